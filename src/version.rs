pub const HARNESS_VERSION: &str = env!("CARGO_PKG_VERSION");
