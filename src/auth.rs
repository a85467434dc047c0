//! Password hashing and verification.
//!
//! Uses Argon2id with a per-password random salt. The produced PHC string
//! (salt and parameters included) is what gets stored in the users table.

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;

use crate::errors::{AppResult, AuthError};

/// Hashes a password for storage.
///
/// # Errors
///
/// Returns `AuthError::Hash` if hashing fails internally.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verifies a password against a stored PHC hash string.
///
/// Returns `Ok(true)` on a match and `Ok(false)` on a mismatch.
///
/// # Errors
///
/// Returns `AuthError::Hash` if the stored hash cannot be parsed.
pub fn verify_password(password: &str, stored_hash: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| AuthError::Hash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("Secret123!").unwrap();
        assert!(verify_password("Secret123!", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("Secret123!").unwrap();
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let hash1 = hash_password("Secret123!").unwrap();
        let hash2 = hash_password("Secret123!").unwrap();
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_garbage_stored_hash_is_an_error() {
        assert!(verify_password("Secret123!", "not-a-phc-string").is_err());
    }
}
