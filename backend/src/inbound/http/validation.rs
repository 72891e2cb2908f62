//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every rejected field is reported the same way: an `invalid_request` error
//! whose details name the field and a machine-readable code.

use serde_json::json;

use crate::domain::{
    Error, LoginValidationError, RegistrationValidationError, TodoValidationError,
};

fn field_error(field: &str, code: &str, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": code,
    }))
}

pub(crate) fn registration_error(err: RegistrationValidationError) -> Error {
    field_error(err.field(), err.code(), err.to_string())
}

pub(crate) fn login_error(err: LoginValidationError) -> Error {
    field_error(err.field(), "empty", err.to_string())
}

pub(crate) fn todo_error(err: TodoValidationError) -> Error {
    field_error(err.field(), err.code(), err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorCode, UserValidationError};
    use rstest::rstest;

    #[rstest]
    #[case(
        RegistrationValidationError::PasswordTooShort { min: 6 },
        "password",
        "too_short"
    )]
    #[case(
        RegistrationValidationError::User(UserValidationError::EmailInvalid),
        "email",
        "invalid_format"
    )]
    #[case(
        RegistrationValidationError::User(UserValidationError::NameTooLong { max: 10 }),
        "name",
        "too_long"
    )]
    fn registration_errors_name_field_and_code(
        #[case] err: RegistrationValidationError,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        let message = err.to_string();
        let error = registration_error(err);
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.message(), message);
        assert_eq!(
            error.details(),
            Some(&json!({"field": field, "code": code}))
        );
    }

    #[rstest]
    fn login_errors_report_empty_field() {
        let error = login_error(LoginValidationError::EmptyPassword);
        assert_eq!(error.message(), "password must not be empty");
        assert_eq!(
            error.details(),
            Some(&json!({"field": "password", "code": "empty"}))
        );
    }

    #[rstest]
    fn todo_errors_point_at_title() {
        let error = todo_error(TodoValidationError::TitleTooShort { min: 3 });
        assert_eq!(
            error.details(),
            Some(&json!({"field": "title", "code": "too_short"}))
        );
    }
}
