//! In-memory lot and bid repository for router tests

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use kernel::id::{BidId, LotId};

use crate::domain::entities::{Bid, Lot, NewBid, NewLot};
use crate::domain::repository::{BidRepository, LotRepository};
use crate::domain::services::running_price;
use crate::error::{AuctionError, AuctionResult};

#[derive(Default)]
struct Store {
    lots: Vec<Lot>,
    bids: Vec<Bid>,
    last_lot_id: i64,
    last_bid_id: i64,
}

/// Clones share the same storage.
#[derive(Clone, Default)]
pub struct MemoryAuctionRepository {
    store: Arc<Mutex<Store>>,
}

impl MemoryAuctionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn store(&self) -> AuctionResult<MutexGuard<'_, Store>> {
        self.store
            .lock()
            .map_err(|_| AuctionError::Internal("auction store poisoned".to_string()))
    }
}

impl LotRepository for MemoryAuctionRepository {
    async fn list(&self) -> AuctionResult<Vec<Lot>> {
        Ok(self.store()?.lots.clone())
    }

    async fn find(&self, lot_id: LotId) -> AuctionResult<Option<Lot>> {
        Ok(self.store()?.lots.iter().find(|l| l.id == lot_id).cloned())
    }

    async fn create(&self, lot: &NewLot) -> AuctionResult<Lot> {
        let mut store = self.store()?;
        store.last_lot_id += 1;

        let now = Utc::now();
        let stored = Lot {
            id: LotId::new(store.last_lot_id),
            status: lot.status,
            terms: lot.terms.clone(),
            creator_id: Some(lot.creator_id),
            winner_id: None,
            destroyed_at: None,
            created_at: now,
            updated_at: now,
        };
        store.lots.push(stored.clone());

        Ok(stored)
    }

    async fn update(&self, lot: &Lot) -> AuctionResult<Option<Lot>> {
        let mut store = self.store()?;
        let Some(stored) = store.lots.iter_mut().find(|l| l.id == lot.id) else {
            return Ok(None);
        };

        stored.status = lot.status;
        stored.terms = lot.terms.clone();
        stored.updated_at = Utc::now();

        Ok(Some(stored.clone()))
    }

    async fn delete(&self, lot_id: LotId) -> AuctionResult<bool> {
        let mut store = self.store()?;
        let before = store.lots.len();
        store.lots.retain(|l| l.id != lot_id);
        if store.lots.len() == before {
            return Ok(false);
        }

        store.bids.retain(|b| b.lot_id != lot_id);
        Ok(true)
    }
}

impl BidRepository for MemoryAuctionRepository {
    async fn list_for_lot(&self, lot_id: LotId) -> AuctionResult<Vec<Bid>> {
        let store = self.store()?;
        Ok(store
            .bids
            .iter()
            .filter(|b| b.lot_id == lot_id)
            .cloned()
            .collect())
    }

    async fn place(&self, bid: &NewBid) -> AuctionResult<Bid> {
        let mut store = self.store()?;
        if !store.lots.iter().any(|l| l.id == bid.lot_id) {
            return Err(AuctionError::LotNotFound);
        }

        let previous_total = store
            .bids
            .iter()
            .filter(|b| b.lot_id == bid.lot_id)
            .try_fold(0i64, |total, b| total.checked_add(b.amount))
            .ok_or_else(|| AuctionError::Internal("lot price overflow".to_string()))?;
        let price = running_price(previous_total, bid.amount)?;

        store.last_bid_id += 1;
        let now = Utc::now();
        let stored = Bid {
            id: BidId::new(store.last_bid_id),
            amount: bid.amount,
            price,
            lot_id: bid.lot_id,
            bidder_id: bid.bidder_id,
            created_at: now,
            updated_at: now,
        };
        store.bids.push(stored.clone());

        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LotTerms;
    use kernel::id::UserId;

    async fn lot_with_step(repo: &MemoryAuctionRepository, step_price: i64) -> Lot {
        let terms = LotTerms {
            title: "t".to_string(),
            description: "d".to_string(),
            start_price: 1,
            end_price: 0,
            step_price,
            start_at: None,
            end_at: None,
            notify: false,
        };
        repo.create(&NewLot::new(terms, UserId::new(1))).await.unwrap()
    }

    fn bid(lot: &Lot) -> NewBid {
        NewBid {
            lot_id: lot.id,
            amount: lot.terms.step_price,
            bidder_id: Some(UserId::new(1)),
        }
    }

    #[tokio::test]
    async fn test_place_overflowing_total_is_internal() {
        let repo = MemoryAuctionRepository::new();
        let lot = lot_with_step(&repo, i64::MAX).await;

        repo.place(&bid(&lot)).await.unwrap();
        let err = repo.place(&bid(&lot)).await.unwrap_err();
        assert!(matches!(err, AuctionError::Internal(_)));

        let bids = repo.list_for_lot(lot.id).await.unwrap();
        assert_eq!(bids.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_cascades_to_bids() {
        let repo = MemoryAuctionRepository::new();
        let lot = lot_with_step(&repo, 10).await;
        repo.place(&bid(&lot)).await.unwrap();

        assert!(repo.delete(lot.id).await.unwrap());
        assert!(!repo.delete(lot.id).await.unwrap());
        assert!(repo.list_for_lot(lot.id).await.unwrap().is_empty());
    }
}
