//! Account registration, login and bearer-token resolution.
//!
//! The service composes the user repository, the password hasher and the
//! token service. Session tokens identify users by email; the guard turns the
//! email back into a numeric id on every request.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    AuthCommand, IdentityResolver, PasswordHashError, PasswordHasher, TokenError, TokenService,
    UserPersistenceError, UserRepository,
};
use crate::domain::{
    Error, LoginCredentials, NewUser, Registration, SessionToken, TokenClaims, UserId,
};

/// Message returned when registering an email that is already taken.
pub const DUPLICATE_ACCOUNT_MESSAGE: &str = "username already exists";
/// Message returned when a login email matches no account.
pub const UNKNOWN_ACCOUNT_MESSAGE: &str = "User not found";
/// Message returned when a login password does not match.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

/// Authentication service implementing [`AuthCommand`] and
/// [`IdentityResolver`].
#[derive(Clone)]
pub struct AuthenticationService<U, H, T> {
    users: Arc<U>,
    hasher: Arc<H>,
    tokens: Arc<T>,
}

impl<U, H, T> AuthenticationService<U, H, T> {
    /// Create a new service from its collaborators.
    pub fn new(users: Arc<U>, hasher: Arc<H>, tokens: Arc<T>) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }
}

pub(crate) fn map_user_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::DuplicateEmail { .. } => Error::conflict(DUPLICATE_ACCOUNT_MESSAGE),
    }
}

fn map_hash_error(error: PasswordHashError) -> Error {
    Error::internal(error.to_string())
}

fn map_signing_error(error: TokenError) -> Error {
    Error::internal(format!("failed to issue session token: {error}"))
}

impl<U, H, T> AuthenticationService<U, H, T>
where
    U: UserRepository,
    H: PasswordHasher,
    T: TokenService,
{
    fn issue_for(&self, claims: &TokenClaims) -> Result<SessionToken, Error> {
        self.tokens.issue(claims).map_err(map_signing_error)
    }
}

#[async_trait]
impl<U, H, T> AuthCommand for AuthenticationService<U, H, T>
where
    U: UserRepository,
    H: PasswordHasher,
    T: TokenService,
{
    async fn register(&self, registration: &Registration) -> Result<SessionToken, Error> {
        let password_hash = self
            .hasher
            .hash(registration.password())
            .await
            .map_err(map_hash_error)?;
        let new_user = NewUser {
            name: registration.name().clone(),
            email: registration.email().clone(),
            password_hash,
        };
        let user = self.users.create(&new_user).await.map_err(|err| {
            debug!(error = %err, "registration rejected by user repository");
            map_user_error(err)
        })?;
        info!(user_id = %user.id(), "user registered");
        self.issue_for(&TokenClaims::for_email(user.email()))
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<SessionToken, Error> {
        let Some(user) = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(map_user_error)?
        else {
            debug!("login for unknown account");
            return Err(Error::not_found(UNKNOWN_ACCOUNT_MESSAGE));
        };
        if !self
            .hasher
            .verify(credentials.password(), user.password_hash())
            .await
        {
            debug!(user_id = %user.id(), "login with wrong password");
            return Err(Error::unauthorized(INVALID_CREDENTIALS_MESSAGE));
        }
        self.issue_for(&TokenClaims::for_email(user.email()))
    }
}

#[async_trait]
impl<U, H, T> IdentityResolver for AuthenticationService<U, H, T>
where
    U: UserRepository,
    H: PasswordHasher,
    T: TokenService,
{
    async fn resolve(&self, token: &str) -> Result<UserId, Error> {
        let claims = self.tokens.verify(token).map_err(|err| {
            debug!(error = %err, "bearer token rejected");
            Error::unauthorized("invalid or expired token")
        })?;
        match self
            .users
            .find_by_email(&claims.email)
            .await
            .map_err(map_user_error)?
        {
            Some(user) => Ok(user.id()),
            None => {
                debug!("bearer token names an unknown account");
                Err(Error::unauthorized("invalid or expired token"))
            }
        }
    }
}

#[cfg(test)]
#[path = "auth_service_tests.rs"]
mod tests;
