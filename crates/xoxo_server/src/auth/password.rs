//! Argon2 password hashing and verification.

use argon2::Argon2;
use argon2::PasswordHash;
use argon2::PasswordHasher;
use argon2::PasswordVerifier;
use argon2::password_hash::SaltString;

fn salt() -> SaltString {
    use rand::Rng;
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes[..]);
    SaltString::encode_b64(&bytes).expect("16 bytes fit the salt alphabet")
}

/// Hashes a password into a PHC-format string.
pub fn hash(password: &str) -> Result<String, argon2::password_hash::Error> {
    Argon2::default()
        .hash_password(password.as_bytes(), &salt())
        .map(|hash| hash.to_string())
}

/// Verifies a password against a stored PHC-format hash.
///
/// A malformed stored hash verifies as false rather than erroring.
pub fn verify(password: &str, stored: &str) -> bool {
    PasswordHash::new(stored)
        .ok()
        .as_ref()
        .map(|hash| {
            Argon2::default()
                .verify_password(password.as_bytes(), hash)
                .is_ok()
        })
        .unwrap_or(false)
}
