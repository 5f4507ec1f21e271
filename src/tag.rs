use rand::Rng;

/// Returns a 16-character lowercase hex tag backed by 64 bits of randomness.
///
/// Tags name per-test fixtures and scratch entities so parallel runs never
/// collide.
pub fn random_tag() -> String {
    let value: u64 = rand::rng().random();
    format!("{value:016x}")
}
