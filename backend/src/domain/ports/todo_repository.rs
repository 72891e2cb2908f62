//! Port abstraction for to-do persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{NewTodo, Todo, TodoChanges, TodoId, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by to-do repository adapters.
    pub enum TodoPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "todo repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "todo repository query failed: {message}",
        /// The referenced owner does not exist.
        MissingUser { user_id: i32 } => "user {user_id} does not exist",
    }
}

/// Port for to-do storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// To-dos owned by `owner`, in id order.
    async fn list_for_user(&self, owner: UserId) -> Result<Vec<Todo>, TodoPersistenceError>;

    /// Insert a new to-do and return the stored row.
    async fn insert(&self, todo: &NewTodo) -> Result<Todo, TodoPersistenceError>;

    /// Apply `changes` to the to-do with `id`.
    ///
    /// When `owner` is set only a row owned by that user may match. Returns
    /// `None` when no row matched.
    async fn update(
        &self,
        id: TodoId,
        owner: Option<UserId>,
        changes: &TodoChanges,
    ) -> Result<Option<Todo>, TodoPersistenceError>;
}
