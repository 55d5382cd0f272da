//! Bid Query Use Cases

use std::sync::Arc;

use kernel::id::LotId;

use crate::domain::entities::Bid;
use crate::domain::repository::{BidRepository, LotRepository};
use crate::error::{AuctionError, AuctionResult};

/// List the bids of a lot
pub struct BidQueryUseCase<R>
where
    R: LotRepository + BidRepository,
{
    repo: Arc<R>,
}

impl<R> BidQueryUseCase<R>
where
    R: LotRepository + BidRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// An unknown lot is a 404, never an empty list
    pub async fn list(&self, lot_id: LotId) -> AuctionResult<Vec<Bid>> {
        if self.repo.find(lot_id).await?.is_none() {
            return Err(AuctionError::LotNotFound);
        }

        self.repo.list_for_lot(lot_id).await
    }
}
