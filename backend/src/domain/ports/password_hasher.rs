//! Port for one-way password hashing.

use async_trait::async_trait;

use crate::domain::PasswordHash;

use super::define_port_error;

define_port_error! {
    /// Errors raised while hashing a password.
    pub enum PasswordHashError {
        /// The hashing backend rejected the input or failed internally.
        Hashing { message: String } => "password hashing failed: {message}",
    }
}

/// Salted one-way hashing with constant-time verification.
///
/// Implementations run the expensive work off the async executor.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Produce a salted digest of `plaintext`.
    async fn hash(&self, plaintext: &str) -> Result<PasswordHash, PasswordHashError>;

    /// Check `plaintext` against `digest`. Malformed digests yield `false`.
    async fn verify(&self, plaintext: &str, digest: &PasswordHash) -> bool;
}
