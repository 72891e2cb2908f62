//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (repositories, hasher, token service) are implemented by
//! outbound adapters; driving ports (commands and queries) are called by
//! inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod auth_command;
mod identity_resolver;
mod password_hasher;
mod todo_repository;
mod todos_command;
mod todos_query;
mod token_service;
mod user_repository;
mod users_query;

pub use auth_command::AuthCommand;
#[cfg(test)]
pub use auth_command::MockAuthCommand;
pub use identity_resolver::IdentityResolver;
#[cfg(test)]
pub use identity_resolver::MockIdentityResolver;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use todo_repository::MockTodoRepository;
pub use todo_repository::{TodoPersistenceError, TodoRepository};
#[cfg(test)]
pub use todos_command::MockTodosCommand;
pub use todos_command::TodosCommand;
#[cfg(test)]
pub use todos_query::MockTodosQuery;
pub use todos_query::TodosQuery;
#[cfg(test)]
pub use token_service::MockTokenService;
pub use token_service::{TokenError, TokenService};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
