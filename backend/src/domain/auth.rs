//! Authentication primitives: login credentials, registration requests and
//! session tokens.
//!
//! Inbound payload parsing stays outside the domain; handlers call the
//! constructors here to validate raw strings before talking to a port.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::user::{EmailAddress, UserName, UserValidationError};

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Password was blank.
    EmptyPassword,
}

impl LoginValidationError {
    /// Request field the error relates to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyEmail => "email",
            Self::EmptyPassword => "password",
        }
    }
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials.
///
/// ## Invariants
/// - `email` is trimmed and non-empty. It is not format-checked: an address
///   that cannot exist simply fails the lookup.
/// - `password` is non-empty and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" alice@example.com ", "abc123").unwrap();
/// assert_eq!(creds.email(), "alice@example.com");
/// assert_eq!(creds.password(), "abc123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = email.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            email: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email used for the user lookup.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password supplied by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Minimum password length accepted at registration.
pub const PASSWORD_MIN: usize = 6;
/// Maximum password length accepted at registration.
pub const PASSWORD_MAX: usize = 12;

/// Validation errors raised while building a [`Registration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationValidationError {
    /// Name or email failed validation.
    User(UserValidationError),
    PasswordTooShort { min: usize },
    PasswordTooLong { max: usize },
    /// Only ASCII letters and digits are allowed.
    PasswordInvalidCharacters,
    /// At least one letter and one digit are required.
    PasswordTooWeak,
}

impl RegistrationValidationError {
    /// Request field the error relates to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::User(inner) => inner.field(),
            _ => "password",
        }
    }

    /// Machine-readable validation code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::User(inner) => inner.code(),
            Self::PasswordTooShort { .. } => "too_short",
            Self::PasswordTooLong { .. } => "too_long",
            Self::PasswordInvalidCharacters => "invalid_characters",
            Self::PasswordTooWeak => "letters_and_digits_required",
        }
    }
}

impl fmt::Display for RegistrationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(inner) => inner.fmt(f),
            Self::PasswordTooShort { min } => {
                write!(f, "password must be at least {min} characters")
            }
            Self::PasswordTooLong { max } => write!(f, "password must be at most {max} characters"),
            Self::PasswordInvalidCharacters => {
                write!(f, "password may only contain letters and numbers")
            }
            Self::PasswordTooWeak => {
                write!(f, "password must contain both letters and numbers")
            }
        }
    }
}

impl std::error::Error for RegistrationValidationError {}

impl From<UserValidationError> for RegistrationValidationError {
    fn from(value: UserValidationError) -> Self {
        Self::User(value)
    }
}

fn validate_password(password: &str) -> Result<(), RegistrationValidationError> {
    let length = password.chars().count();
    if length < PASSWORD_MIN {
        return Err(RegistrationValidationError::PasswordTooShort { min: PASSWORD_MIN });
    }
    if length > PASSWORD_MAX {
        return Err(RegistrationValidationError::PasswordTooLong { max: PASSWORD_MAX });
    }
    if !password.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(RegistrationValidationError::PasswordInvalidCharacters);
    }
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !(has_letter && has_digit) {
        return Err(RegistrationValidationError::PasswordTooWeak);
    }
    Ok(())
}

/// Validated registration request.
///
/// # Examples
/// ```
/// use backend::domain::Registration;
///
/// let reg = Registration::try_from_parts("alice", "alice@example.com", "abc123").unwrap();
/// assert_eq!(reg.name().as_ref(), "alice");
/// assert!(Registration::try_from_parts("alice", "alice@example.com", "abcdef").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    name: UserName,
    email: EmailAddress,
    password: Zeroizing<String>,
}

impl Registration {
    /// Validate raw registration inputs. Fields are checked in password,
    /// name, email order and the first failure is reported.
    pub fn try_from_parts(
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, RegistrationValidationError> {
        validate_password(password)?;
        let name = UserName::new(name)?;
        let email = EmailAddress::new(email)?;
        Ok(Self {
            name,
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Claims embedded in a session token.
///
/// `exp` and `iat` are only present when tokens are issued with a lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
}

impl TokenClaims {
    /// Claims identifying `email` with no lifetime attached.
    pub fn for_email(email: &EmailAddress) -> Self {
        Self {
            email: email.as_ref().to_owned(),
            exp: None,
            iat: None,
        }
    }
}

/// Signed bearer credential handed to clients.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

impl From<SessionToken> for String {
    fn from(value: SessionToken) -> Self {
        value.0
    }
}
