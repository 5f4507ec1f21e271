use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub struct TestEnv {
    root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = TempDir::new().expect("temp harness root");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn harness_cmd(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("grove-harness"));
        cmd.env("GROVE_HARNESS_ROOT", self.root.path());
        // Keep ambient simulated time from leaking into the commands under test.
        cmd.env_remove("GROVE_LOCAL_TIME");
        cmd
    }
}
