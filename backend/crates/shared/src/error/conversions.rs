//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`].

use super::app_error::AppError;
use super::kind::ErrorKind;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NotFound,
            std::io::ErrorKind::TimedOut => ErrorKind::RequestTimeout,
            _ => ErrorKind::InternalServerError,
        };
        AppError::new(kind, "I/O operation failed").with_source(err)
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::bad_request("invalid integer format").with_source(err)
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() || err.is_eof() {
            AppError::bad_request(format!("body contains badly-formed JSON: {}", err))
                .with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    /// Only a missing row is a client error. Every other failure is a 500
    /// whose message never reaches the client.
    fn from(err: sqlx::Error) -> Self {
        let message = match &err {
            sqlx::Error::RowNotFound => {
                return AppError::not_found("the requested resource could not be found")
                    .with_source(err);
            }
            sqlx::Error::PoolTimedOut => "database connection pool exhausted",
            sqlx::Error::Io(io) if io.kind() == std::io::ErrorKind::TimedOut => {
                "database query timed out"
            }
            sqlx::Error::Io(_) => "database connection error",
            // https://www.postgresql.org/docs/current/errcodes-appendix.html
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some("23505") => "duplicate key value",
                Some("23503") => "foreign key violation",
                Some("23502" | "23514") => "constraint violation",
                Some("57014") => "query canceled",
                Some(code) if code.starts_with("53") => "database resource exhausted",
                _ => "database error",
            },
            _ => "database error",
        };
        AppError::internal(message).with_source(err)
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.envelope())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert_eq!(app_err.kind(), ErrorKind::NotFound);

        let io_err = std::io::Error::new(std::io::ErrorKind::TimedOut, "slow");
        let app_err: AppError = io_err.into();
        assert_eq!(app_err.kind(), ErrorKind::RequestTimeout);
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_err: Result<i32, _> = "abc".parse();
        let app_err: AppError = parse_err.unwrap_err().into();
        assert_eq!(app_err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_err: AppError = json_err.into();
        assert_eq!(app_err.kind(), ErrorKind::BadRequest);
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_sqlx_row_not_found() {
        let app_err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(app_err.kind(), ErrorKind::NotFound);
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_sqlx_failures_are_opaque_server_errors() {
        use crate::error::app_error::SERVER_ERROR_MESSAGE;

        let timed_out =
            sqlx::Error::Io(std::io::Error::new(std::io::ErrorKind::TimedOut, "slow"));
        for err in [sqlx::Error::PoolTimedOut, timed_out, sqlx::Error::WorkerCrashed] {
            let app_err: AppError = err.into();
            assert_eq!(app_err.kind(), ErrorKind::InternalServerError);
            assert_eq!(
                app_err.envelope(),
                serde_json::json!({"error": SERVER_ERROR_MESSAGE})
            );
        }
    }

    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_into_response_envelope() {
        use axum::response::IntoResponse;

        let response = AppError::with_field("title", "must be provided").into_response();
        assert_eq!(response.status().as_u16(), 422);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"error": {"title": "must be provided"}}));
    }
}
