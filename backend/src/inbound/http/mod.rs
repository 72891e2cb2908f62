//! HTTP inbound adapter exposing REST endpoints.
//!
//! [`configure_api`] registers every route; callers add [`state::HttpState`]
//! and [`health::HealthState`] as app data.

use actix_web::web;

pub mod auth;
pub mod envelope;
pub mod error;
pub mod guard;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod todos;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Register the API routes, health probes and JSON error handling.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::configure_api;
///
/// let _app = App::new().configure(configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(auth::register)
        .service(auth::login)
        .service(users::list_users)
        .service(health::ready)
        .service(health::live)
        .configure(todos::configure);
}
