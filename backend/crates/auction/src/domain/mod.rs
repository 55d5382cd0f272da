//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Lot, Bid)
//! - Domain value objects (LotStatus)
//! - Domain services (running price, bidding window)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
