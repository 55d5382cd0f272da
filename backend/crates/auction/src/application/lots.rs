//! Lot Query Use Cases

use std::sync::Arc;

use kernel::id::LotId;

use crate::domain::entities::Lot;
use crate::domain::repository::LotRepository;
use crate::error::{AuctionError, AuctionResult};

/// List and show lots
pub struct LotQueryUseCase<R>
where
    R: LotRepository,
{
    lot_repo: Arc<R>,
}

impl<R> LotQueryUseCase<R>
where
    R: LotRepository,
{
    pub fn new(lot_repo: Arc<R>) -> Self {
        Self { lot_repo }
    }

    pub async fn list(&self) -> AuctionResult<Vec<Lot>> {
        self.lot_repo.list().await
    }

    pub async fn show(&self, lot_id: LotId) -> AuctionResult<Lot> {
        self.lot_repo
            .find(lot_id)
            .await?
            .ok_or(AuctionError::LotNotFound)
    }
}
