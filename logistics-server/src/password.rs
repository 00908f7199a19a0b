//! Password hashing.
//!
//! Argon2id with a random salt per password. Hashes are stored as PHC
//! strings (`$argon2id$v=19$...`), which carry their own parameters and
//! salt, so verification needs nothing but the stored string.

#[cfg(test)]
use std::sync::Arc;
#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

/// Errors from hashing or parsing a stored hash.
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("failed to hash password: {0}")]
    Hash(String),

    #[error("stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// Input for the hash that unknown-user logins are checked against.
const DUMMY_PASSWORD: &str = "dummy-password-for-timing";

/// One-way password hasher.
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
    /// Hashed with the same parameters as real passwords
    dummy_hash: Option<String>,
    #[cfg(test)]
    verifications: Arc<AtomicUsize>,
}

impl PasswordHasher {
    /// Argon2id with the crate's default parameters (19 MiB, 2 passes).
    pub fn new() -> Self {
        let mut hasher = Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, Params::default()),
            dummy_hash: None,
            #[cfg(test)]
            verifications: Arc::default(),
        };
        hasher.dummy_hash = hasher.hash(DUMMY_PASSWORD).ok();
        hasher
    }

    /// Hash `password` with a fresh salt.
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::Hash(e.to_string()))
    }

    /// Check `password` against a stored PHC hash string.
    ///
    /// A mismatch is `Ok(false)`; only an unparseable hash is an error.
    pub fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
        let parsed =
            PasswordHash::new(stored_hash).map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        #[cfg(test)]
        self.verifications.fetch_add(1, Ordering::SeqCst);

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    /// Run a full verification whose result is discarded.
    ///
    /// Used when there is no stored hash to check, so that a missing
    /// account takes as long to reject as a wrong password.
    pub fn verify_dummy(&self, password: &str) {
        if let Some(hash) = &self.dummy_hash {
            let _ = self.verify(password, hash);
        }
    }

    /// Number of hash verifications performed by this hasher and its clones.
    #[cfg(test)]
    pub(crate) fn verification_count(&self) -> usize {
        self.verifications.load(Ordering::SeqCst)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordHasher(argon2id)")
    }
}
