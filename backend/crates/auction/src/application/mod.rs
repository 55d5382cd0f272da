//! Application Layer
//!
//! Use cases and application services.

pub mod bids;
pub mod config;
pub mod create_lot;
pub mod delete_lot;
pub mod lots;
pub mod place_bid;
pub mod update_lot;

// Re-exports
pub use bids::BidQueryUseCase;
pub use config::AuctionConfig;
pub use create_lot::{CreateLotInput, CreateLotUseCase};
pub use delete_lot::DeleteLotUseCase;
pub use lots::LotQueryUseCase;
pub use place_bid::{PlaceBidInput, PlaceBidUseCase};
pub use update_lot::UpdateLotUseCase;
