//! To-do handlers. Every route here sits behind [`BearerAuth`].
//!
//! ```text
//! GET /todos
//! POST /todos {"title":"buy milk"}
//! PUT /todos {"id":1,"title":"buy milk v2","completed":true}
//! ```

use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Todo, TodoChanges, TodoId, TodoTitle};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{ApiEnvelope, STATUS_TODOS};
use crate::inbound::http::guard::{AuthenticatedUser, BearerAuth};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::todo_error;

pub const FETCHED_MESSAGE: &str = "Successfully fetched data";
pub const CREATED_MESSAGE: &str = "Successfully created todo";
pub const UPDATED_MESSAGE: &str = "Successfully updated todo";

/// Request body for `POST /todos`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateTodoRequest {
    #[schema(example = "buy milk")]
    pub title: String,
    /// Defaults to `false`.
    #[serde(default)]
    pub completed: bool,
}

/// Request body for `PUT /todos`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateTodoRequest {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "buy milk v2")]
    pub title: String,
    /// Required; omitting it is a 400.
    pub completed: bool,
}

/// Mount the guarded `/todos` scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/todos")
            .wrap(BearerAuth)
            .service(list_todos)
            .service(create_todo)
            .service(update_todo),
    );
}

fn todos_body(message: &'static str, todos: Vec<Todo>) -> ApiEnvelope<Vec<Todo>> {
    ApiEnvelope::new(STATUS_TODOS, message, todos)
}

/// List the caller's to-dos in id order.
#[utoipa::path(
    get,
    path = "/todos",
    responses(
        (status = 200, description = "Caller's to-dos", body = crate::inbound::http::schemas::TodoListEnvelopeSchema),
        (status = 401, description = "Missing or invalid bearer token", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 503, description = "Store unavailable", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "listTodos"
)]
#[get("")]
pub async fn list_todos(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
) -> ApiResult<HttpResponse> {
    let todos = state.todos_query.list_todos(user.id()).await?;
    Ok(HttpResponse::Ok().json(todos_body(FETCHED_MESSAGE, todos)))
}

/// Create a to-do owned by the caller and return the caller's list.
#[utoipa::path(
    post,
    path = "/todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Created; caller's to-dos", body = crate::inbound::http::schemas::TodoListEnvelopeSchema),
        (status = 400, description = "Invalid request", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 401, description = "Missing or invalid bearer token", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 503, description = "Store unavailable", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "createTodo"
)]
#[post("")]
pub async fn create_todo(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
    payload: web::Json<CreateTodoRequest>,
) -> ApiResult<HttpResponse> {
    let CreateTodoRequest { title, completed } = payload.into_inner();
    let title = TodoTitle::new(title).map_err(todo_error)?;
    let todos = state.todos.create_todo(user.id(), title, completed).await?;
    Ok(HttpResponse::Created().json(todos_body(CREATED_MESSAGE, todos)))
}

/// Replace a to-do's title and completion flag and return the caller's list.
#[utoipa::path(
    put,
    path = "/todos",
    request_body = UpdateTodoRequest,
    responses(
        (status = 202, description = "Updated; caller's to-dos", body = crate::inbound::http::schemas::TodoListEnvelopeSchema),
        (status = 400, description = "Invalid request", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 401, description = "Missing or invalid bearer token", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "To-do not found", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 503, description = "Store unavailable", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["todos"],
    operation_id = "updateTodo"
)]
#[put("")]
pub async fn update_todo(
    state: web::Data<HttpState>,
    user: AuthenticatedUser,
    payload: web::Json<UpdateTodoRequest>,
) -> ApiResult<HttpResponse> {
    let UpdateTodoRequest {
        id,
        title,
        completed,
    } = payload.into_inner();
    let changes = TodoChanges {
        title: TodoTitle::new(title).map_err(todo_error)?,
        completed,
    };
    let todos = state
        .todos
        .update_todo(user.id(), TodoId::new(id), changes)
        .await?;
    Ok(HttpResponse::Accepted().json(todos_body(UPDATED_MESSAGE, todos)))
}
