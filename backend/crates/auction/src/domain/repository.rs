//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::LotId;

use crate::domain::entities::{Bid, Lot, NewBid, NewLot};
use crate::error::AuctionResult;

/// Lot repository trait
#[trait_variant::make(LotRepository: Send)]
pub trait LocalLotRepository {
    /// All lots ordered by id
    async fn list(&self) -> AuctionResult<Vec<Lot>>;

    async fn find(&self, lot_id: LotId) -> AuctionResult<Option<Lot>>;

    async fn create(&self, lot: &NewLot) -> AuctionResult<Lot>;

    /// Persist a merged lot; `None` if the row no longer exists
    async fn update(&self, lot: &Lot) -> AuctionResult<Option<Lot>>;

    /// Hard delete; `false` if no row was affected
    async fn delete(&self, lot_id: LotId) -> AuctionResult<bool>;
}

/// Bid repository trait
#[trait_variant::make(BidRepository: Send)]
pub trait LocalBidRepository {
    /// Bids of a lot ordered by id
    async fn list_for_lot(&self, lot_id: LotId) -> AuctionResult<Vec<Bid>>;

    /// Insert a bid priced at the lot's running total, atomically
    ///
    /// Concurrent bids on the same lot are serialized so the running total
    /// never double-counts.
    async fn place(&self, bid: &NewBid) -> AuctionResult<Bid>;
}
