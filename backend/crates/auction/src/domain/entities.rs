//! Domain Entities
//!
//! Core business entities for the auction domain.

use chrono::{DateTime, Utc};
use kernel::error::app_error::AppError;
use kernel::id::{BidId, LotId, UserId};
use kernel::validation::Validator;

use crate::domain::value_objects::LotStatus;

/// Maximum length for a lot title (in bytes)
pub const LOT_TITLE_MAX_BYTES: usize = 500;
/// Maximum length for a lot description (in bytes)
pub const LOT_DESCRIPTION_MAX_BYTES: usize = 1000;

/// The part of a lot its creator controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LotTerms {
    pub title: String,
    pub description: String,
    pub start_price: i64,
    pub end_price: i64,
    pub step_price: i64,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub notify: bool,
}

impl LotTerms {
    /// Run on every write; failures are reported per field (422)
    pub fn validate(&self) -> Result<(), AppError> {
        let mut v = Validator::new();

        v.check(!self.title.trim().is_empty(), "title", "must be provided");
        v.check(
            self.title.len() <= LOT_TITLE_MAX_BYTES,
            "title",
            "must not be more than 500 bytes long",
        );

        v.check(
            !self.description.trim().is_empty(),
            "description",
            "must be provided",
        );
        v.check(
            self.description.len() <= LOT_DESCRIPTION_MAX_BYTES,
            "description",
            "must not be more than 1000 bytes long",
        );

        v.check(self.start_price > 0, "start_price", "must be greater than zero");
        v.check(self.step_price > 0, "step_price", "must be greater than zero");
        v.check(self.end_price >= 0, "end_price", "must not be negative");

        if let (Some(start_at), Some(end_at)) = (self.start_at, self.end_at) {
            v.check(end_at > start_at, "end_at", "must be after start_at");
        }

        v.finish()
    }
}

/// Lot entity - an auction listing
#[derive(Debug, Clone)]
pub struct Lot {
    pub id: LotId,
    pub status: LotStatus,
    pub terms: LotTerms,
    pub creator_id: Option<UserId>,
    pub winner_id: Option<UserId>,
    pub destroyed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lot {
    /// Merge a partial update into this lot
    ///
    /// Absent fields are kept, and an empty title or description counts as
    /// absent. `notify` is always overwritten.
    pub fn apply(&mut self, patch: LotPatch) {
        if let Some(title) = patch.title.filter(|t| !t.is_empty()) {
            self.terms.title = title;
        }
        if let Some(description) = patch.description.filter(|d| !d.is_empty()) {
            self.terms.description = description;
        }
        if let Some(start_price) = patch.start_price {
            self.terms.start_price = start_price;
        }
        if let Some(end_price) = patch.end_price {
            self.terms.end_price = end_price;
        }
        if let Some(step_price) = patch.step_price {
            self.terms.step_price = step_price;
        }
        if let Some(start_at) = patch.start_at {
            self.terms.start_at = Some(start_at);
        }
        if let Some(end_at) = patch.end_at {
            self.terms.end_at = Some(end_at);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.terms.notify = patch.notify;
    }
}

/// A lot about to be inserted
#[derive(Debug, Clone)]
pub struct NewLot {
    pub status: LotStatus,
    pub terms: LotTerms,
    pub creator_id: UserId,
}

impl NewLot {
    /// New lots always start out pending
    pub fn new(terms: LotTerms, creator_id: UserId) -> Self {
        Self {
            status: LotStatus::Pending,
            terms,
            creator_id,
        }
    }
}

/// Partial update of a lot
#[derive(Debug, Clone, Default)]
pub struct LotPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_price: Option<i64>,
    pub end_price: Option<i64>,
    pub step_price: Option<i64>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub status: Option<LotStatus>,
    pub notify: bool,
}

/// Bid entity - one increment placed against a lot
#[derive(Debug, Clone)]
pub struct Bid {
    pub id: BidId,
    /// The increment
    pub amount: i64,
    /// Running total of the lot after this bid
    pub price: i64,
    pub lot_id: LotId,
    pub bidder_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A bid about to be placed; the price is computed by the repository
#[derive(Debug, Clone)]
pub struct NewBid {
    pub lot_id: LotId,
    pub amount: i64,
    pub bidder_id: Option<UserId>,
}

impl NewBid {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut v = Validator::new();
        v.check(self.amount > 0, "amount", "must be greater than zero");
        v.check(self.bidder_id.is_some(), "bidder_id", "must be provided");
        v.finish()
    }
}
