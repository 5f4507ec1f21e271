use grove_harness::clock::SimulatedClock;
use grove_harness::config::Config;
use grove_harness::layout::Layout;
use grove_harness::node::{self, CommandOptions};
use std::fs;
use tempfile::TempDir;

#[test]
fn pinned_short_hash_trims_and_truncates() {
    let temp = TempDir::new().unwrap();
    let layout = Layout::at(temp.path());
    let config = Config::default();
    fs::write(
        layout.version_file(&config.version_file),
        "0123456789abcdef0123456789abcdef01234567\n",
    )
    .expect("write pin");

    let short = node::pinned_short_hash(&layout, &config).expect("short hash");
    assert_eq!(short, "0123456");
}

#[test]
fn pinned_short_hash_rejects_a_truncated_pin() {
    let temp = TempDir::new().unwrap();
    let layout = Layout::at(temp.path());
    let config = Config::default();
    fs::write(layout.version_file(&config.version_file), "abc\n").expect("write pin");

    assert!(node::pinned_short_hash(&layout, &config).is_err());
}

#[test]
fn pinned_short_hash_requires_the_pin_file() {
    let temp = TempDir::new().unwrap();
    let layout = Layout::at(temp.path());
    let config = Config::default();

    let err = node::pinned_short_hash(&layout, &config).unwrap_err();
    assert!(err.to_string().contains("Could not read version pin"));
}

#[cfg(unix)]
#[tokio::test]
async fn command_options_set_cwd_and_simulated_time() {
    let temp = TempDir::new().unwrap();
    let options = CommandOptions::new(temp.path(), SimulatedClock::default()).at_day(2);

    let mut cmd = options.command("sh");
    cmd.args(["-c", "printf '%s' \"$GROVE_LOCAL_TIME\""]);
    let output = cmd.output().await.expect("run sh");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        (1_671_211_684u64 + 2 * 86_400).to_string()
    );

    let mut cmd = options.command("pwd");
    let output = cmd.output().await.expect("run pwd");
    let reported = std::path::PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());
    assert_eq!(
        reported.canonicalize().expect("canonical reported dir"),
        temp.path().canonicalize().expect("canonical temp dir")
    );
}

// Exercises the PATH-based assertion against a scripted stand-in for the
// node binary. Sequential within one test: PATH is process-global.
#[cfg(unix)]
#[tokio::test]
async fn assert_installed_verifies_location_and_version() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let layout = Layout::at(temp.path());
    let config = Config::default();
    fs::write(
        layout.version_file(&config.version_file),
        "fedcba9876543210fedcba9876543210fedcba98",
    )
    .expect("write pin");

    let short = node::pinned_short_hash(&layout, &config).expect("short hash");
    let bin_dir = layout.bin_dir(&short);
    fs::create_dir_all(&bin_dir).expect("bin dir");

    let script = bin_dir.join(&config.binary);
    fs::write(&script, format!("#!/bin/sh\necho \"grove 1.0.0 ({short})\"\n"))
        .expect("write script");
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).expect("mark executable");

    node::prepend_bin_path(&bin_dir).expect("prepend PATH");

    node::assert_installed(&config, &bin_dir, &short)
        .await
        .expect("pinned binary accepted");

    let elsewhere = temp.path().join("elsewhere");
    let err = node::assert_installed(&config, &elsewhere, &short)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("doesn't match"));

    let err = node::assert_installed(&config, &bin_dir, "0000000")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("does not satisfy"));
}
