//! Update Lot Use Case
//!
//! Fetch, merge the present fields, re-validate, persist.

use std::sync::Arc;

use kernel::id::LotId;

use crate::domain::entities::{Lot, LotPatch};
use crate::domain::repository::LotRepository;
use crate::error::{AuctionError, AuctionResult};

/// Update lot use case
pub struct UpdateLotUseCase<R>
where
    R: LotRepository,
{
    lot_repo: Arc<R>,
}

impl<R> UpdateLotUseCase<R>
where
    R: LotRepository,
{
    pub fn new(lot_repo: Arc<R>) -> Self {
        Self { lot_repo }
    }

    pub async fn execute(&self, lot_id: LotId, patch: LotPatch) -> AuctionResult<Lot> {
        let mut lot = self
            .lot_repo
            .find(lot_id)
            .await?
            .ok_or(AuctionError::LotNotFound)?;

        lot.apply(patch);
        lot.terms.validate()?;

        let lot = self
            .lot_repo
            .update(&lot)
            .await?
            .ok_or(AuctionError::LotNotFound)?;

        tracing::info!(lot_id = %lot.id, status = %lot.status, "Lot updated");

        Ok(lot)
    }
}
