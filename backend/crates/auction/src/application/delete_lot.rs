//! Delete Lot Use Case

use std::sync::Arc;

use kernel::id::LotId;

use crate::domain::repository::LotRepository;
use crate::error::{AuctionError, AuctionResult};

/// Delete lot use case (hard delete, bids cascade)
pub struct DeleteLotUseCase<R>
where
    R: LotRepository,
{
    lot_repo: Arc<R>,
}

impl<R> DeleteLotUseCase<R>
where
    R: LotRepository,
{
    pub fn new(lot_repo: Arc<R>) -> Self {
        Self { lot_repo }
    }

    pub async fn execute(&self, lot_id: LotId) -> AuctionResult<()> {
        if !self.lot_repo.delete(lot_id).await? {
            return Err(AuctionError::LotNotFound);
        }

        tracing::info!(lot_id = %lot_id, "Lot deleted");

        Ok(())
    }
}
