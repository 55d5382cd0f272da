//! Place Bid Use Case
//!
//! The bid amount is always the lot's step price; the running price is
//! computed by the repository inside one transaction.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::error::app_error::AppError;
use kernel::id::{LotId, UserId};

use crate::application::config::AuctionConfig;
use crate::domain::entities::{Bid, NewBid};
use crate::domain::repository::{BidRepository, LotRepository};
use crate::domain::services::check_bidding_window;
use crate::error::{AuctionError, AuctionResult};

/// Place bid input
pub struct PlaceBidInput {
    pub lot_id: LotId,
    pub bidder_id: UserId,
}

/// Place bid use case
pub struct PlaceBidUseCase<R>
where
    R: LotRepository + BidRepository,
{
    repo: Arc<R>,
    config: Arc<AuctionConfig>,
}

impl<R> PlaceBidUseCase<R>
where
    R: LotRepository + BidRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuctionConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: PlaceBidInput) -> AuctionResult<Bid> {
        self.execute_at(input, Utc::now()).await
    }

    /// Same as [`execute`](Self::execute) with an explicit clock for the lot window
    pub async fn execute_at(&self, input: PlaceBidInput, now: DateTime<Utc>) -> AuctionResult<Bid> {
        let lot = self
            .repo
            .find(input.lot_id)
            .await?
            .ok_or(AuctionError::LotNotFound)?;

        if self.config.enforce_lot_window {
            check_bidding_window(&lot, now).map_err(|msg| AppError::with_field("lot", msg))?;
        }

        let new_bid = NewBid {
            lot_id: lot.id,
            amount: lot.terms.step_price,
            bidder_id: Some(input.bidder_id),
        };
        new_bid.validate()?;

        let bid = self.repo.place(&new_bid).await?;

        tracing::info!(
            lot_id = %bid.lot_id,
            bid_id = %bid.id,
            bidder_id = %input.bidder_id,
            price = bid.price,
            "Bid placed"
        );

        Ok(bid)
    }
}
