//! Port for issuing and verifying stateless session tokens.

use crate::domain::{SessionToken, TokenClaims};

use super::define_port_error;

define_port_error! {
    /// Errors raised by token service adapters.
    pub enum TokenError {
        /// Token could not be signed.
        Signing { message: String } => "token signing failed: {message}",
        /// Token was malformed, forged or expired.
        Invalid { message: String } => "invalid token: {message}",
    }
}

/// Signs and verifies session tokens.
#[cfg_attr(test, mockall::automock)]
pub trait TokenService: Send + Sync {
    /// Sign a token carrying `claims`.
    fn issue(&self, claims: &TokenClaims) -> Result<SessionToken, TokenError>;

    /// Validate `token` and return its claims.
    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
