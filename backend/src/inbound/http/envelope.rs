//! Success envelope shared by every JSON endpoint.
//!
//! ```text
//! {"status": "ok!", "message": "Successfully fetched data", "result": [...]}
//! ```

use serde::Serialize;

/// Status string used by the authentication and user endpoints.
pub const STATUS_AUTH: &str = "Ok!";
/// Status string used by the to-do endpoints.
pub const STATUS_TODOS: &str = "ok!";

/// Uniform `{status, message, result}` wrapper for successful responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiEnvelope<T> {
    pub status: &'static str,
    pub message: &'static str,
    pub result: T,
}

impl<T> ApiEnvelope<T> {
    pub fn new(status: &'static str, message: &'static str, result: T) -> Self {
        Self {
            status,
            message,
            result,
        }
    }
}
