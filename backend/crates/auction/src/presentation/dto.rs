//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::{BidId, LotId, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Bid, Lot, LotPatch, LotTerms};
use crate::domain::value_objects::LotStatus;

// ============================================================================
// Lots
// ============================================================================

/// `{"lot": {...}}` request body for create and update
///
/// Everything defaults so that missing fields surface as validation errors
/// rather than malformed bodies.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LotRequest {
    #[serde(default)]
    pub lot: LotPayload,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LotPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_price: Option<i64>,
    pub end_price: Option<i64>,
    pub step_price: Option<i64>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    /// Ignored on create
    pub status: Option<LotStatus>,
    pub notify: Option<bool>,
}

impl LotPayload {
    /// Terms of a new lot; absent prices become zero and fail validation
    pub fn into_terms(self) -> LotTerms {
        LotTerms {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            start_price: self.start_price.unwrap_or_default(),
            end_price: self.end_price.unwrap_or_default(),
            step_price: self.step_price.unwrap_or_default(),
            start_at: self.start_at,
            end_at: self.end_at,
            notify: self.notify.unwrap_or_default(),
        }
    }

    pub fn into_patch(self) -> LotPatch {
        LotPatch {
            title: self.title,
            description: self.description,
            start_price: self.start_price,
            end_price: self.end_price,
            step_price: self.step_price,
            start_at: self.start_at,
            end_at: self.end_at,
            status: self.status,
            notify: self.notify.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LotDto {
    pub id: LotId,
    pub status: LotStatus,
    pub title: String,
    pub description: String,
    pub start_price: i64,
    pub end_price: i64,
    pub step_price: i64,
    pub creator_id: Option<UserId>,
    pub winner_id: Option<UserId>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub notify: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destroyed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Lot> for LotDto {
    fn from(lot: Lot) -> Self {
        Self {
            id: lot.id,
            status: lot.status,
            title: lot.terms.title,
            description: lot.terms.description,
            start_price: lot.terms.start_price,
            end_price: lot.terms.end_price,
            step_price: lot.terms.step_price,
            creator_id: lot.creator_id,
            winner_id: lot.winner_id,
            start_at: lot.terms.start_at,
            end_at: lot.terms.end_at,
            notify: lot.terms.notify,
            destroyed_at: lot.destroyed_at,
            created_at: lot.created_at,
            updated_at: lot.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LotEnvelope {
    pub lot: LotDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct LotsEnvelope {
    pub lots: Vec<LotDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ============================================================================
// Bids
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct BidDto {
    pub id: BidId,
    pub amount: i64,
    pub price: i64,
    pub lot_id: LotId,
    pub bidder_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Bid> for BidDto {
    fn from(bid: Bid) -> Self {
        Self {
            id: bid.id,
            amount: bid.amount,
            price: bid.price,
            lot_id: bid.lot_id,
            bidder_id: bid.bidder_id,
            created_at: bid.created_at,
            updated_at: bid.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BidEnvelope {
    pub bid: BidDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct BidsEnvelope {
    pub bids: Vec<BidDto>,
}
