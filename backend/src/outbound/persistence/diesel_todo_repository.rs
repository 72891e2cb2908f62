//! PostgreSQL-backed `TodoRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{TodoPersistenceError, TodoRepository};
use crate::domain::{NewTodo, Todo, TodoChanges, TodoId, TodoTitle, UserId};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error, pool_error_message};
use super::models::{NewTodoRow, TodoRow, TodoUpdate};
use super::pool::{DbPool, PoolError};
use super::schema::todos;

/// Diesel-backed implementation of the `TodoRepository` port.
#[derive(Clone)]
pub struct DieselTodoRepository {
    pool: DbPool,
}

impl DieselTodoRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> TodoPersistenceError {
    TodoPersistenceError::connection(pool_error_message(error))
}

/// `inserted_for` names the owner of a row being inserted, so a foreign key
/// failure can be reported as a missing user.
fn map_diesel_error(
    error: diesel::result::Error,
    inserted_for: Option<UserId>,
) -> TodoPersistenceError {
    match classify_diesel_error(&error) {
        DieselFailure::Connection => TodoPersistenceError::connection("database connection error"),
        DieselFailure::ForeignKeyViolation => match inserted_for {
            Some(owner) => TodoPersistenceError::missing_user(owner.get()),
            None => TodoPersistenceError::query("foreign key constraint violated"),
        },
        DieselFailure::UniqueViolation => TodoPersistenceError::query("unique constraint violated"),
        DieselFailure::Query(message) => TodoPersistenceError::query(message),
    }
}

fn row_to_todo(row: TodoRow) -> Result<Todo, TodoPersistenceError> {
    let title = TodoTitle::new(row.title).map_err(|err| {
        TodoPersistenceError::query(format!("stored todo {} is invalid: {err}", row.id))
    })?;
    Ok(Todo::new(
        TodoId::new(row.id),
        title,
        row.completed,
        UserId::new(row.user_id),
    ))
}

#[async_trait]
impl TodoRepository for DieselTodoRepository {
    async fn list_for_user(&self, owner: UserId) -> Result<Vec<Todo>, TodoPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<TodoRow> = todos::table
            .filter(todos::user_id.eq(owner.get()))
            .order(todos::id.asc())
            .select(TodoRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;
        rows.into_iter().map(row_to_todo).collect()
    }

    async fn insert(&self, todo: &NewTodo) -> Result<Todo, TodoPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewTodoRow {
            title: todo.title.as_ref(),
            completed: todo.completed,
            user_id: todo.user_id.get(),
        };
        let inserted = diesel::insert_into(todos::table)
            .values(&row)
            .returning(TodoRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, Some(todo.user_id)))?;
        row_to_todo(inserted)
    }

    async fn update(
        &self,
        id: TodoId,
        owner: Option<UserId>,
        changes: &TodoChanges,
    ) -> Result<Option<Todo>, TodoPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changeset = TodoUpdate {
            title: changes.title.as_ref(),
            completed: changes.completed,
        };
        let updated = match owner {
            Some(owner) => {
                diesel::update(
                    todos::table
                        .filter(todos::id.eq(id.get()))
                        .filter(todos::user_id.eq(owner.get())),
                )
                .set(&changeset)
                .returning(TodoRow::as_returning())
                .get_result(&mut conn)
                .await
            }
            None => {
                diesel::update(todos::table.find(id.get()))
                    .set(&changeset)
                    .returning(TodoRow::as_returning())
                    .get_result(&mut conn)
                    .await
            }
        }
        .optional()
        .map_err(|err| map_diesel_error(err, None))?;
        updated.map(row_to_todo).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn rows_convert_to_domain() {
        let todo = row_to_todo(TodoRow {
            id: 1,
            title: "buy milk".to_owned(),
            completed: false,
            user_id: 2,
        })
        .expect("valid row");
        assert_eq!(todo.id(), TodoId::new(1));
        assert_eq!(todo.user_id(), UserId::new(2));
    }

    #[rstest]
    fn invalid_titles_become_query_errors() {
        let error = row_to_todo(TodoRow {
            id: 1,
            title: "x".to_owned(),
            completed: false,
            user_id: 2,
        })
        .expect_err("short title");
        assert!(matches!(error, TodoPersistenceError::Query { .. }));
    }
}
