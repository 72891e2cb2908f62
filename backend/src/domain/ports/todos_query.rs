//! Driving port for reading a user's to-dos.

use async_trait::async_trait;

use crate::domain::{Error, Todo, UserId};

/// Domain use-case port for listing to-dos.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodosQuery: Send + Sync {
    /// To-dos owned by `owner`, in id order.
    async fn list_todos(&self, owner: UserId) -> Result<Vec<Todo>, Error>;
}
