//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories are thin: they translate between Diesel rows (`models.rs`)
//! and domain types, and map database failures to port errors. Connections
//! come from a shared `bb8` pool through `diesel-async`.
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselTodoRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/todos")).await?;
//! let todos = DieselTodoRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_todo_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_todo_repository::DieselTodoRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
