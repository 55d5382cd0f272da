//! Create Lot Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entities::{Lot, LotTerms, NewLot};
use crate::domain::repository::LotRepository;
use crate::error::AuctionResult;

/// Create lot input
pub struct CreateLotInput {
    pub terms: LotTerms,
    pub creator_id: UserId,
}

/// Create lot use case
pub struct CreateLotUseCase<R>
where
    R: LotRepository,
{
    lot_repo: Arc<R>,
}

impl<R> CreateLotUseCase<R>
where
    R: LotRepository,
{
    pub fn new(lot_repo: Arc<R>) -> Self {
        Self { lot_repo }
    }

    pub async fn execute(&self, input: CreateLotInput) -> AuctionResult<Lot> {
        input.terms.validate()?;

        let new_lot = NewLot::new(input.terms, input.creator_id);
        let lot = self.lot_repo.create(&new_lot).await?;

        tracing::info!(lot_id = %lot.id, creator_id = %input.creator_id, "Lot created");

        Ok(lot)
    }
}
