//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, extractor, router
//!
//! ## Features
//! - Registration with name, email and password
//! - Login with email + password, answered with an HS256 bearer token
//! - `CurrentUser` extractor for routes that require a token
//! - User listing and lookup
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never serialized
//! - Unknown email and wrong password produce the same 401
//! - Every token failure produces the same 401 with `WWW-Authenticate: Bearer`

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::extractor::{AuthProvider, CurrentUser};
pub use presentation::router::{auth_router, auth_router_generic, vary_authorization};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::user::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;
