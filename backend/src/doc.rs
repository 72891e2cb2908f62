//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every handler under [`crate::inbound::http`], the
//! schema wrappers from [`crate::inbound::http::schemas`] and the bearer
//! token security scheme. Swagger UI serves it in debug builds.

use crate::inbound::http::auth::{LoginRequest, RegisterRequest};
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, TodoListEnvelopeSchema, TodoSchema, TokenEnvelopeSchema,
    TokenResultSchema, UserListEnvelopeSchema, UserSchema,
};
use crate::inbound::http::todos::{CreateTodoRequest, UpdateTodoRequest};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Name of the bearer security scheme in the generated document.
pub const BEARER_SCHEME_NAME: &str = "BearerToken";

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            BEARER_SCHEME_NAME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Token returned by POST /auth/login or /auth/register."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "To-do API",
        description = "Multi-user to-do lists behind bearer token authentication."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerToken" = [])),
    paths(
        crate::inbound::http::auth::register,
        crate::inbound::http::auth::login,
        crate::inbound::http::todos::list_todos,
        crate::inbound::http::todos::create_todo,
        crate::inbound::http::todos::update_todo,
        crate::inbound::http::users::list_users,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        UserSchema,
        TodoSchema,
        TokenResultSchema,
        TokenEnvelopeSchema,
        TodoListEnvelopeSchema,
        UserListEnvelopeSchema,
        RegisterRequest,
        LoginRequest,
        CreateTodoRequest,
        UpdateTodoRequest,
    )),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "todos", description = "The caller's to-do list"),
        (name = "users", description = "Registered users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn registers_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/auth/register",
            "/auth/login",
            "/todos",
            "/users",
            "/health/ready",
            "/health/live",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn todos_path_has_all_three_methods() {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get("/todos").expect("todos path");
        assert!(item.get.is_some());
        assert!(item.post.is_some());
        assert!(item.put.is_some());
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key(BEARER_SCHEME_NAME));
    }

    #[test]
    fn domain_schemas_use_wrapped_names() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        // utoipa replaces :: with . in schema names
        for name in ["crate.domain.Error", "crate.domain.User", "crate.domain.Todo"] {
            assert!(schemas.contains_key(name), "missing {name}");
        }
    }

    #[test]
    fn error_responses_reference_the_error_schema() {
        let doc = serde_json::to_value(ApiDoc::openapi()).expect("serialise OpenAPI");
        for (path, method, status) in [
            ("/auth/register", "post", "409"),
            ("/auth/login", "post", "401"),
            ("/todos", "put", "404"),
            ("/users", "get", "503"),
        ] {
            let schema_ref = &doc["paths"][path][method]["responses"][status]["content"]
                ["application/json"]["schema"]["$ref"];
            assert_eq!(
                schema_ref, "#/components/schemas/crate.domain.Error",
                "{method} {path} {status}"
            );
        }
    }
}
