//! Credential hashing and verification.
//!
//! Passwords are stored as `sha256(salt || password)` with a per-user random
//! salt; verification compares digests in constant time.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Salted password digest as stored in the user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordRecord {
    /// Hex-encoded random salt.
    pub salt: String,
    /// Hex-encoded SHA-256 digest of salt || password.
    pub hash: String,
}

impl PasswordRecord {
    /// Derives a record for a new password with a fresh random salt.
    pub fn derive(password: &str) -> Self {
        let salt = uuid::Uuid::new_v4().simple().to_string();
        let hash = Self::digest(&salt, password);
        Self { salt, hash }
    }

    /// Rebuilds a record from stored fields.
    pub fn from_stored(salt: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            salt: salt.into(),
            hash: hash.into(),
        }
    }

    /// Constant-time check of a login attempt against the stored digest.
    pub fn verify(&self, password: &str) -> bool {
        let candidate = Self::digest(&self.salt, password);
        candidate.as_bytes().ct_eq(self.hash.as_bytes()).into()
    }

    fn digest(salt: &str, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(password.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_and_verify_round_trip() {
        let record = PasswordRecord::derive("hunter2");
        assert!(record.verify("hunter2"));
        assert!(!record.verify("hunter3"));
    }

    #[test]
    fn salts_are_unique_per_derivation() {
        let a = PasswordRecord::derive("same-password");
        let b = PasswordRecord::derive("same-password");
        assert_ne!(a.salt, b.salt);
        assert_ne!(a.hash, b.hash);
    }

    #[test]
    fn stored_record_verifies() {
        let original = PasswordRecord::derive("secret");
        let restored = PasswordRecord::from_stored(original.salt.clone(), original.hash.clone());
        assert!(restored.verify("secret"));
    }

    #[test]
    fn digest_is_hex_sha256() {
        let record = PasswordRecord::derive("x");
        assert_eq!(record.hash.len(), 64);
        assert!(record.hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
