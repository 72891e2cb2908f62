//! Domain primitives, services and ports.
//!
//! Purpose: define strongly typed entities and the use-cases that operate on
//! them. Nothing here knows about HTTP or Diesel; adapters reach the domain
//! through the traits in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User, Todo and their validated value types.
//! - AuthenticationService, TodoService, UserDirectory: port implementations.

pub mod auth;
pub mod auth_service;
pub mod error;
pub mod ports;
pub mod todo;
pub mod todo_service;
pub mod trace_id;
pub mod user;
pub mod user_directory;

pub use self::auth::{
    LoginCredentials, LoginValidationError, PASSWORD_MAX, PASSWORD_MIN, Registration,
    RegistrationValidationError, SessionToken, TokenClaims,
};
pub use self::auth_service::AuthenticationService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::todo::{
    NewTodo, TODO_TITLE_MAX, TODO_TITLE_MIN, Todo, TodoChanges, TodoId, TodoOwnershipPolicy,
    TodoTitle, TodoValidationError,
};
pub use self::todo_service::TodoService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    EMAIL_MAX, EMAIL_MIN, EmailAddress, NewUser, PasswordHash, USER_NAME_MAX, USER_NAME_MIN, User,
    UserId, UserName, UserValidationError,
};
pub use self::user_directory::UserDirectory;

