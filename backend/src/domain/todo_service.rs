//! To-do domain service implementing the list, create and update use-cases.
//!
//! Mutations answer with the caller's complete list, read after the write.
//! A failed re-read is reported as a failure of the mutation itself.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{TodoPersistenceError, TodoRepository, TodosCommand, TodosQuery};
use crate::domain::{
    Error, NewTodo, Todo, TodoChanges, TodoId, TodoOwnershipPolicy, TodoTitle, UserId,
};

/// Message returned when the to-do list cannot be read.
pub const LIST_UNAVAILABLE_MESSAGE: &str = "Could not fetch todos. Please try again later.";
/// Message returned when an insert is rejected.
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create todo";
/// Message returned when an update is rejected for a reason other than a
/// missing row.
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update todo";

/// To-do service generic over its repository.
#[derive(Clone)]
pub struct TodoService<R> {
    repo: Arc<R>,
    ownership: TodoOwnershipPolicy,
}

impl<R> TodoService<R> {
    /// Create a service with the given repository and ownership policy.
    pub fn new(repo: Arc<R>, ownership: TodoOwnershipPolicy) -> Self {
        Self { repo, ownership }
    }
}

fn map_list_error(error: TodoPersistenceError) -> Error {
    warn!(error = %error, "todo list read failed");
    match error {
        TodoPersistenceError::Connection { .. } => {
            Error::service_unavailable(LIST_UNAVAILABLE_MESSAGE)
        }
        TodoPersistenceError::Query { .. } | TodoPersistenceError::MissingUser { .. } => {
            Error::internal(LIST_UNAVAILABLE_MESSAGE)
        }
    }
}

fn map_write_error(error: TodoPersistenceError, message: &str) -> Error {
    match error {
        TodoPersistenceError::Connection { message: cause } => {
            Error::service_unavailable(format!("todo repository unavailable: {cause}"))
        }
        TodoPersistenceError::Query { .. } | TodoPersistenceError::MissingUser { .. } => {
            debug!(error = %error, "todo write rejected");
            Error::invalid_request(message)
        }
    }
}

impl<R> TodoService<R>
where
    R: TodoRepository,
{
    async fn fresh_list(&self, owner: UserId) -> Result<Vec<Todo>, TodoPersistenceError> {
        self.repo.list_for_user(owner).await
    }
}

#[async_trait]
impl<R> TodosQuery for TodoService<R>
where
    R: TodoRepository,
{
    async fn list_todos(&self, owner: UserId) -> Result<Vec<Todo>, Error> {
        self.fresh_list(owner).await.map_err(map_list_error)
    }
}

#[async_trait]
impl<R> TodosCommand for TodoService<R>
where
    R: TodoRepository,
{
    async fn create_todo(
        &self,
        owner: UserId,
        title: TodoTitle,
        completed: bool,
    ) -> Result<Vec<Todo>, Error> {
        let new_todo = NewTodo {
            title,
            completed,
            user_id: owner,
        };
        let created = self
            .repo
            .insert(&new_todo)
            .await
            .map_err(|err| map_write_error(err, CREATE_FAILED_MESSAGE))?;
        debug!(todo_id = %created.id(), user_id = %owner, "todo created");
        // The re-read belongs to the write: its failure is a failed create.
        self.fresh_list(owner)
            .await
            .map_err(|err| map_write_error(err, CREATE_FAILED_MESSAGE))
    }

    async fn update_todo(
        &self,
        caller: UserId,
        id: TodoId,
        changes: TodoChanges,
    ) -> Result<Vec<Todo>, Error> {
        let owner = self.ownership.owner_filter(caller);
        let updated = self
            .repo
            .update(id, owner, &changes)
            .await
            .map_err(|err| map_write_error(err, UPDATE_FAILED_MESSAGE))?;
        if updated.is_none() {
            return Err(Error::not_found(format!("Todo with ID {id} not found")));
        }
        self.fresh_list(caller)
            .await
            .map_err(|err| map_write_error(err, UPDATE_FAILED_MESSAGE))
    }
}

#[cfg(test)]
#[path = "todo_service_tests.rs"]
mod tests;
