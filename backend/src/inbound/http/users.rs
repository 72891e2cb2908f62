//! Users API handler.
//!
//! ```text
//! GET /users
//! ```
//!
//! The listing is public and includes each stored password digest.

use actix_web::{HttpResponse, get, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{ApiEnvelope, STATUS_AUTH};
use crate::inbound::http::state::HttpState;

pub const LISTED_MESSAGE: &str = "Successfully fetched users";

/// List every registered user in id order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = crate::inbound::http::schemas::UserListEnvelopeSchema),
        (status = 503, description = "Store unavailable", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers",
    security([])
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let users = state.users.list_users().await?;
    Ok(HttpResponse::Ok().json(ApiEnvelope::new(STATUS_AUTH, LISTED_MESSAGE, users)))
}
