//! Password hashing - one-way digests and verification.
//!
//! The user service only depends on the [`PasswordEncoder`] trait; the
//! production implementation is Argon2 with a random salt per digest.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// One-way password hashing with a verify operation.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait PasswordEncoder: Send + Sync {
    /// Hash a plain text password into a storable digest
    fn hash(&self, plain_text: &str) -> AppResult<String>;

    /// Check a plain text password against a stored digest
    fn matches(&self, plain_text: &str, digest: &str) -> bool;
}

/// Argon2id encoder with default parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Encoder;

impl Argon2Encoder {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl PasswordEncoder for Argon2Encoder {
    fn hash(&self, plain_text: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn matches(&self, plain_text: &str, digest: &str) -> bool {
        // A digest that does not parse can never match
        match PasswordHash::new(digest) {
            Ok(parsed) => Self::argon2()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::error!("Stored password digest is malformed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let encoder = Argon2Encoder::new();
        let digest = encoder.hash("123456").unwrap();

        assert!(encoder.matches("123456", &digest));
        assert!(!encoder.matches("123457", &digest));
    }

    #[test]
    fn test_digest_is_not_plain_text() {
        let digest = Argon2Encoder::new().hash("123456").unwrap();
        assert_ne!(digest, "123456");
        assert!(digest.starts_with("$argon2"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let encoder = Argon2Encoder::new();
        let first = encoder.hash("654321").unwrap();
        let second = encoder.hash("654321").unwrap();

        // Different salts produce different digests
        assert_ne!(first, second);
        // But both verify correctly
        assert!(encoder.matches("654321", &first));
        assert!(encoder.matches("654321", &second));
    }

    #[test]
    fn test_malformed_digest_never_matches() {
        assert!(!Argon2Encoder::new().matches("123456", "not-a-digest"));
        assert!(!Argon2Encoder::new().matches("123456", ""));
    }
}
