//! Presentation Layer
//!
//! HTTP handlers, DTOs, the bearer token extractor and the router.

pub mod dto;
pub mod extractor;
pub mod handlers;
pub mod router;
