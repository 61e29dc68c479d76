//! Argon2 password hashing for registered members.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use fb_core::{ForumError, Result};

/// Hashes and verifies member passwords.
#[derive(Clone, Default)]
pub struct Passwords {
    argon2: Argon2<'static>,
}

impl Passwords {
    pub fn new(params: Params) -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }

    /// Minimal-cost parameters for tests and constrained devices.
    pub fn low_cost() -> Self {
        // 8 KiB, one pass, one lane: the smallest Argon2 accepts.
        match Params::new(8, 1, 1, None) {
            Ok(params) => Self::new(params),
            Err(_) => Self::default(),
        }
    }

    pub fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| ForumError::Password(e.to_string()))
    }

    /// Checks a candidate against a stored value.
    ///
    /// Stored values that are not PHC strings are legacy plaintext and are
    /// compared exactly.
    pub fn verify(&self, stored: &str, candidate: &str) -> bool {
        match PasswordHash::new(stored) {
            Ok(parsed) => self
                .argon2
                .verify_password(candidate.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => stored == candidate,
        }
    }

    pub fn is_hashed(stored: &str) -> bool {
        PasswordHash::new(stored).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let passwords = Passwords::low_cost();
        let hash = passwords.hash("hunter2").unwrap();
        assert!(Passwords::is_hashed(&hash));
        assert_ne!(hash, "hunter2");
        assert!(passwords.verify(&hash, "hunter2"));
        assert!(!passwords.verify(&hash, "hunter3"));
    }

    #[test]
    fn test_legacy_plaintext_compared_exactly() {
        let passwords = Passwords::low_cost();
        assert!(!Passwords::is_hashed("secret"));
        assert!(passwords.verify("secret", "secret"));
        assert!(!passwords.verify("secret", "Secret"));
    }
}
