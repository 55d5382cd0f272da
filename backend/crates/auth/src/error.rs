//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::token::TokenError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

pub const MSG_NOT_FOUND: &str = "the requested resource could not be found";
pub const MSG_INVALID_CREDENTIALS: &str = "invalid authentication credentials";
pub const MSG_INVALID_TOKEN: &str = "invalid or missing authentication token";
pub const MSG_DUPLICATE_EMAIL: &str = "a user with this email address already exists";
const MSG_DATABASE: &str = "auth database error";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("user not found")]
    UserNotFound,

    /// Unique constraint on `users.email`
    #[error("duplicate email")]
    DuplicateEmail,

    /// Unknown email or wrong password
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Missing, malformed, expired or foreign bearer token, or unknown subject
    #[error("invalid or missing authentication token")]
    InvalidToken,

    /// Field validation failure (422)
    #[error(transparent)]
    Validation(#[from] AppError),

    #[error("token error: {0}")]
    Token(#[from] TokenError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::DuplicateEmail => ErrorKind::UnprocessableEntity,
            AuthError::InvalidCredentials | AuthError::InvalidToken => ErrorKind::Unauthorized,
            AuthError::Validation(err) => err.kind(),
            AuthError::Token(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Token(e) => {
                tracing::error!(error = %e, "Token signing failed");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::UserNotFound => AppError::not_found(MSG_NOT_FOUND),
            AuthError::DuplicateEmail => AppError::with_field("email", MSG_DUPLICATE_EMAIL),
            AuthError::InvalidCredentials => AppError::unauthorized(MSG_INVALID_CREDENTIALS),
            AuthError::InvalidToken => AppError::unauthorized(MSG_INVALID_TOKEN),
            AuthError::Validation(err) => err,
            AuthError::Database(err) => AppError::internal(MSG_DATABASE).with_source(err),
            other => AppError::internal(other.to_string()),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        let challenge = matches!(self, AuthError::InvalidToken);
        let mut response = AppError::from(self).into_response();
        if challenge {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
