use rand::Rng;

/// Number of random bytes in a bot token (hex encoded to 128 characters).
pub const BOT_TOKEN_BYTES: usize = 64;

/// Number of random bytes in a per-session form token.
pub const FORM_TOKEN_BYTES: usize = 32;

/// Generates `len` cryptographically secure random bytes, hex encoded.
pub fn generate_token(len: usize) -> String {
    let mut rng = rand::rng();
    let bytes: Vec<u8> = (0..len).map(|_| rng.random::<u8>()).collect();
    hex::encode(bytes)
}

/// Compares two tokens without stopping at the first differing byte.
///
/// Only the length is observable through timing.
pub fn tokens_match(expected: &str, submitted: &str) -> bool {
    let (expected, submitted) = (expected.as_bytes(), submitted.as_bytes());
    if expected.len() != submitted.len() {
        return false;
    }

    expected
        .iter()
        .zip(submitted)
        .fold(0u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}
