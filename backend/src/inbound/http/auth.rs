//! Registration and login handlers.
//!
//! ```text
//! POST /auth/register {"name":"alice","email":"alice@example.com","password":"abc123"}
//! POST /auth/login {"email":"alice@example.com","password":"abc123"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{LoginCredentials, Registration, SessionToken};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{ApiEnvelope, STATUS_AUTH};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{login_error, registration_error};

pub const REGISTERED_MESSAGE: &str = "Successfully register!";
pub const LOGGED_IN_MESSAGE: &str = "Successfully login!";

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "alice")]
    pub name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(example = "abc123")]
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(example = "abc123")]
    pub password: String,
}

/// `{token}` result carried in the envelope.
#[derive(Debug, Serialize)]
pub struct TokenResult {
    pub token: String,
}

fn token_response(message: &'static str, token: SessionToken) -> HttpResponse {
    HttpResponse::Ok().json(ApiEnvelope::new(
        STATUS_AUTH,
        message,
        TokenResult {
            token: token.into(),
        },
    ))
}

/// Create an account and return a bearer token for it.
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created", body = crate::inbound::http::schemas::TokenEnvelopeSchema),
        (status = 400, description = "Invalid request", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 409, description = "Email already registered", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 503, description = "Store unavailable", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "register",
    security([])
)]
#[post("/auth/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let RegisterRequest {
        name,
        email,
        password,
    } = payload.into_inner();
    let registration =
        Registration::try_from_parts(&name, &email, &password).map_err(registration_error)?;
    let token = state.auth.register(&registration).await?;
    Ok(token_response(REGISTERED_MESSAGE, token))
}

/// Verify credentials and return a bearer token.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = crate::inbound::http::schemas::TokenEnvelopeSchema),
        (status = 400, description = "Invalid request", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 401, description = "Invalid credentials", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "Unknown email", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 503, description = "Store unavailable", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let LoginRequest { email, password } = payload.into_inner();
    let credentials = LoginCredentials::try_from_parts(&email, &password).map_err(login_error)?;
    let token = state.auth.login(&credentials).await?;
    Ok(token_response(LOGGED_IN_MESSAGE, token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockAuthCommand;
    use crate::domain::{Error, PASSWORD_MIN};
    use crate::inbound::http::test_utils::{TestPorts, state_with};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};

    #[derive(Debug)]
    struct ValidationExpectation<'a> {
        field: &'a str,
        code: &'a str,
    }

    fn test_app(
        auth: MockAuthCommand,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = state_with(TestPorts {
            auth: Some(auth),
            ..TestPorts::default()
        });
        App::new()
            .app_data(web::Data::new(state))
            .app_data(
                web::JsonConfig::default()
                    .error_handler(crate::inbound::http::error::json_error_handler),
            )
            .service(register)
            .service(login)
    }

    async fn post_json(auth: MockAuthCommand, uri: &str, body: Value) -> (StatusCode, Value) {
        let app = actix_test::init_service(test_app(auth)).await;
        let request = actix_test::TestRequest::post()
            .uri(uri)
            .set_json(body)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        (status, serde_json::from_slice(&body).expect("JSON body"))
    }

    #[rstest]
    #[actix_web::test]
    async fn register_wraps_token_in_envelope() {
        let mut auth = MockAuthCommand::new();
        auth.expect_register()
            .withf(|registration| registration.email().as_ref() == "alice@example.com")
            .times(1)
            .returning(|_| Ok(SessionToken::new("signed")));

        let (status, body) = post_json(
            auth,
            "/auth/register",
            json!({"name": "alice", "email": "alice@example.com", "password": "abc123"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"status": "Ok!", "message": REGISTERED_MESSAGE, "result": {"token": "signed"}})
        );
    }

    #[rstest]
    #[case(
        json!({"name": "alice", "email": "alice@example.com", "password": "abc"}),
        ValidationExpectation { field: "password", code: "too_short" }
    )]
    #[case(
        json!({"name": "alice", "email": "alice@example.com", "password": "abcdef"}),
        ValidationExpectation { field: "password", code: "letters_and_digits_required" }
    )]
    #[case(
        json!({"name": "al", "email": "alice@example.com", "password": "abc123"}),
        ValidationExpectation { field: "name", code: "too_short" }
    )]
    #[case(
        json!({"name": "alice", "email": "not-an-email", "password": "abc123"}),
        ValidationExpectation { field: "email", code: "invalid_format" }
    )]
    #[actix_web::test]
    async fn register_rejects_invalid_shapes(
        #[case] payload: Value,
        #[case] expected: ValidationExpectation<'_>,
    ) {
        let mut auth = MockAuthCommand::new();
        auth.expect_register().never();

        let (status, body) = post_json(auth, "/auth/register", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["details"]["field"], expected.field);
        assert_eq!(body["details"]["code"], expected.code);
    }

    #[rstest]
    #[actix_web::test]
    async fn register_reports_password_bounds_in_message() {
        let mut auth = MockAuthCommand::new();
        auth.expect_register().never();

        let (_, body) = post_json(
            auth,
            "/auth/register",
            json!({"name": "alice", "email": "alice@example.com", "password": "a1"}),
        )
        .await;
        let message = body["message"].as_str().expect("message");
        assert!(message.contains(&PASSWORD_MIN.to_string()));
    }

    #[rstest]
    #[actix_web::test]
    async fn register_conflict_is_409() {
        let mut auth = MockAuthCommand::new();
        auth.expect_register()
            .returning(|_| Err(Error::conflict("username already exists")));

        let (status, body) = post_json(
            auth,
            "/auth/register",
            json!({"name": "alice", "email": "alice@example.com", "password": "abc123"}),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "username already exists");
    }

    #[rstest]
    #[actix_web::test]
    async fn login_wraps_token_in_envelope() {
        let mut auth = MockAuthCommand::new();
        auth.expect_login()
            .withf(|credentials| credentials.email() == "alice@example.com")
            .times(1)
            .returning(|_| Ok(SessionToken::new("signed")));

        let (status, body) = post_json(
            auth,
            "/auth/login",
            json!({"email": " alice@example.com ", "password": "abc123"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "Ok!");
        assert_eq!(body["message"], LOGGED_IN_MESSAGE);
        assert_eq!(body["result"]["token"], "signed");
    }

    #[rstest]
    #[case(Error::unauthorized("Invalid credentials"), StatusCode::UNAUTHORIZED)]
    #[case(Error::not_found("User not found"), StatusCode::NOT_FOUND)]
    #[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
    #[actix_web::test]
    async fn login_failures_map_to_status(#[case] error: Error, #[case] status: StatusCode) {
        let mut auth = MockAuthCommand::new();
        auth.expect_login().return_once(move |_| Err(error));

        let (actual, _) = post_json(
            auth,
            "/auth/login",
            json!({"email": "alice@example.com", "password": "abc123"}),
        )
        .await;
        assert_eq!(actual, status);
    }

    #[rstest]
    #[case(json!({"email": "   ", "password": "abc123"}), "email")]
    #[case(json!({"email": "alice@example.com", "password": ""}), "password")]
    #[actix_web::test]
    async fn login_rejects_blank_fields(#[case] payload: Value, #[case] field: &str) {
        let mut auth = MockAuthCommand::new();
        auth.expect_login().never();

        let (status, body) = post_json(auth, "/auth/login", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["field"], field);
    }

    #[rstest]
    #[actix_web::test]
    async fn missing_fields_are_bad_requests() {
        let mut auth = MockAuthCommand::new();
        auth.expect_login().never();

        let (status, body) =
            post_json(auth, "/auth/login", json!({"email": "alice@example.com"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["field"], "body");
    }
}
