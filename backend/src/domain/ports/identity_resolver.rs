//! Driving port used by the bearer guard.

use async_trait::async_trait;

use crate::domain::{Error, UserId};

/// Resolves a presented bearer token to the user it identifies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Return the caller's id, or an `unauthorized` error when the token is
    /// invalid or its subject no longer exists.
    async fn resolve(&self, token: &str) -> Result<UserId, Error>;
}
