//! Read-only view over registered users.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth_service::map_user_error;
use crate::domain::ports::{UserRepository, UsersQuery};
use crate::domain::{Error, User};

/// [`UsersQuery`] backed by a user repository.
#[derive(Clone)]
pub struct UserDirectory<U> {
    users: Arc<U>,
}

impl<U> UserDirectory<U> {
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<U> UsersQuery for UserDirectory<U>
where
    U: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users.list().await.map_err(map_user_error)
    }
}
