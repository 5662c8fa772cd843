//! Password hashing
//!
//! Passwords are stored as `hex(sha256(salt || plaintext))` with one static
//! salt per deployment. Existing stored hashes depend on this exact scheme,
//! so it cannot be swapped for a per-user KDF without a migration.
//! The salt comes from configuration.

use sha2::{Digest, Sha256};

#[derive(Clone)]
pub struct PasswordHasher {
    salt: String,
}

impl PasswordHasher {
    pub fn new(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }

    /// Hash a plaintext password for storage
    pub fn hash(&self, plaintext: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.salt.as_bytes());
        hasher.update(plaintext.as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("salt", &"<redacted>")
            .finish()
    }
}
