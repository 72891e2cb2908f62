//! Driving port for creating and updating to-dos.
//!
//! Both operations answer with the caller's complete, freshly read list.

use async_trait::async_trait;

use crate::domain::{Error, Todo, TodoChanges, TodoId, TodoTitle, UserId};

/// Domain use-case port for to-do mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodosCommand: Send + Sync {
    /// Create a to-do for `owner`.
    async fn create_todo(
        &self,
        owner: UserId,
        title: TodoTitle,
        completed: bool,
    ) -> Result<Vec<Todo>, Error>;

    /// Update to-do `id` on behalf of `caller`.
    async fn update_todo(
        &self,
        caller: UserId,
        id: TodoId,
        changes: TodoChanges,
    ) -> Result<Vec<Todo>, Error>;
}
