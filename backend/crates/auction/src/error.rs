//! Auction Error Types
//!
//! Auction-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auction-specific result type alias
pub type AuctionResult<T> = Result<T, AuctionError>;

pub const MSG_NOT_FOUND: &str = "the requested resource could not be found";
pub const MSG_LOT_DELETED: &str = "lot successfully deleted";
const MSG_DATABASE: &str = "auction database error";

/// Auction-specific error variants
#[derive(Debug, Error)]
pub enum AuctionError {
    #[error("lot not found")]
    LotNotFound,

    /// Field validation failure (422), including the bidding window
    #[error(transparent)]
    Validation(#[from] AppError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AuctionError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuctionError::LotNotFound => ErrorKind::NotFound,
            AuctionError::Validation(err) => err.kind(),
            AuctionError::Database(_) | AuctionError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuctionError::Database(e) => {
                tracing::error!(error = %e, "Auction database error");
            }
            AuctionError::Internal(msg) => {
                tracing::error!(message = %msg, "Auction internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Auction error");
            }
        }
    }
}

impl From<AuctionError> for AppError {
    fn from(err: AuctionError) -> Self {
        match err {
            AuctionError::LotNotFound => AppError::not_found(MSG_NOT_FOUND),
            AuctionError::Validation(err) => err,
            AuctionError::Database(err) => AppError::internal(MSG_DATABASE).with_source(err),
            AuctionError::Internal(msg) => AppError::internal(msg),
        }
    }
}

impl IntoResponse for AuctionError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
