//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Common error types and result aliases
//! - Typed record identifiers
//! - Field-level validation accumulator
//! - HTTP/database glue shared by every feature crate (feature-gated)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod validation;

#[cfg(feature = "sqlx")]
pub mod db;

#[cfg(feature = "axum")]
pub mod json;
