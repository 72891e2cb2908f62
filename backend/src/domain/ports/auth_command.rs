//! Driving port for registration and login.
//!
//! Inbound adapters call this port to turn credentials into a session token
//! without touching hashing, signing or persistence directly.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, Registration, SessionToken};

/// Domain use-case port for account authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthCommand: Send + Sync {
    /// Create an account and return a token for it.
    async fn register(&self, registration: &Registration) -> Result<SessionToken, Error>;

    /// Verify credentials and return a token.
    async fn login(&self, credentials: &LoginCredentials) -> Result<SessionToken, Error>;
}
