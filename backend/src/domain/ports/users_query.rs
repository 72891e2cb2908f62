//! Driving port for the user directory.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Domain use-case port for listing registered users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every registered user in id order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
