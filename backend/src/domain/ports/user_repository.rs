//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another user already holds the email address.
        DuplicateEmail { email: String } => "user with email {email} already exists",
    }
}

/// Port for reading and creating user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by their unique email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a user, failing with [`UserPersistenceError::DuplicateEmail`]
    /// when the email is taken. The check and the insert must be a single
    /// atomic operation.
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// All users in id order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;
}
