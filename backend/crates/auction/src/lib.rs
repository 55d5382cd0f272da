//! Auction Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, lot status, bidding rules, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Lot CRUD with partial updates
//! - Bid placement against a lot's running price
//!
//! Every route requires a bearer token; the authenticated user is resolved
//! by `auth::CurrentUser`.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuctionConfig;
pub use error::{AuctionError, AuctionResult};
pub use infra::postgres::PgAuctionRepository;
pub use presentation::router::{auction_router, auction_router_generic};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}
