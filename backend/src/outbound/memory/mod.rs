//! In-memory implementation of the user and to-do repositories.
//!
//! Used when no database URL is configured and by HTTP-level tests. It keeps
//! the same contracts as the Diesel adapters: unique emails, owners must
//! exist, lists come back in id order and owner-filtered updates only match
//! the owner's rows.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    TodoPersistenceError, TodoRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{NewTodo, NewUser, Todo, TodoChanges, TodoId, User, UserId};

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<UserId, User>,
    todos: BTreeMap<TodoId, Todo>,
    next_user_id: i32,
    next_todo_id: i32,
}

impl Tables {
    fn allocate_user_id(&mut self) -> UserId {
        self.next_user_id += 1;
        UserId::new(self.next_user_id)
    }

    fn allocate_todo_id(&mut self) -> TodoId {
        self.next_todo_id += 1;
        TodoId::new(self.next_todo_id)
    }
}

/// Process-local store backing both repository ports.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, String> {
        self.tables
            .lock()
            .map_err(|_| "in-memory store lock poisoned".to_owned())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError> {
        let tables = self.lock().map_err(UserPersistenceError::connection)?;
        Ok(tables
            .users
            .values()
            .find(|user| user.email().as_ref() == email)
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let tables = self.lock().map_err(UserPersistenceError::connection)?;
        Ok(tables.users.get(&id).cloned())
    }

    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut tables = self.lock().map_err(UserPersistenceError::connection)?;
        if tables.users.values().any(|existing| existing.email() == &user.email) {
            return Err(UserPersistenceError::duplicate_email(user.email.as_ref()));
        }
        let id = tables.allocate_user_id();
        let stored = User::new(
            id,
            user.name.clone(),
            user.email.clone(),
            user.password_hash.clone(),
        );
        tables.users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let tables = self.lock().map_err(UserPersistenceError::connection)?;
        Ok(tables.users.values().cloned().collect())
    }
}

#[async_trait]
impl TodoRepository for InMemoryStore {
    async fn list_for_user(&self, owner: UserId) -> Result<Vec<Todo>, TodoPersistenceError> {
        let tables = self.lock().map_err(TodoPersistenceError::connection)?;
        Ok(tables
            .todos
            .values()
            .filter(|todo| todo.user_id() == owner)
            .cloned()
            .collect())
    }

    async fn insert(&self, todo: &NewTodo) -> Result<Todo, TodoPersistenceError> {
        let mut tables = self.lock().map_err(TodoPersistenceError::connection)?;
        if !tables.users.contains_key(&todo.user_id) {
            return Err(TodoPersistenceError::missing_user(todo.user_id.get()));
        }
        let id = tables.allocate_todo_id();
        let stored = Todo::new(id, todo.title.clone(), todo.completed, todo.user_id);
        tables.todos.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(
        &self,
        id: TodoId,
        owner: Option<UserId>,
        changes: &TodoChanges,
    ) -> Result<Option<Todo>, TodoPersistenceError> {
        let mut tables = self.lock().map_err(TodoPersistenceError::connection)?;
        let Some(todo) = tables.todos.get_mut(&id) else {
            return Ok(None);
        };
        if owner.is_some_and(|owner| todo.user_id() != owner) {
            return Ok(None);
        }
        todo.apply(changes);
        Ok(Some(todo.clone()))
    }
}
