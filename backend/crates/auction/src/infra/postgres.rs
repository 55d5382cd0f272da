//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::db::bounded;
use kernel::id::{BidId, LotId, UserId};
use sqlx::PgPool;

use crate::domain::entities::{Bid, Lot, LotTerms, NewBid, NewLot};
use crate::domain::repository::{BidRepository, LotRepository};
use crate::domain::services::running_price;
use crate::domain::value_objects::LotStatus;
use crate::error::{AuctionError, AuctionResult};

const LOT_COLUMNS: &str = "id, status, title, description, start_price, end_price, step_price, \
     creator_id, winner_id, start_at, end_at, notify, destroyed_at, created_at, updated_at";

const BID_COLUMNS: &str = "id, amount, price, lot_id, bidder_id, created_at, updated_at";

/// PostgreSQL-backed lot and bid repository
#[derive(Clone)]
pub struct PgAuctionRepository {
    pool: PgPool,
}

impl PgAuctionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl LotRepository for PgAuctionRepository {
    async fn list(&self) -> AuctionResult<Vec<Lot>> {
        let sql = format!("SELECT {LOT_COLUMNS} FROM lots ORDER BY id");
        let rows = bounded(sqlx::query_as::<_, LotRow>(&sql).fetch_all(&self.pool)).await?;

        rows.into_iter().map(LotRow::into_lot).collect()
    }

    async fn find(&self, lot_id: LotId) -> AuctionResult<Option<Lot>> {
        let sql = format!("SELECT {LOT_COLUMNS} FROM lots WHERE id = $1");
        let row = bounded(
            sqlx::query_as::<_, LotRow>(&sql)
                .bind(lot_id.value())
                .fetch_optional(&self.pool),
        )
        .await?;

        row.map(LotRow::into_lot).transpose()
    }

    async fn create(&self, lot: &NewLot) -> AuctionResult<Lot> {
        let sql = format!(
            r#"
            INSERT INTO lots (status, title, description, start_price, end_price, step_price,
                              creator_id, start_at, end_at, notify)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {LOT_COLUMNS}
            "#
        );
        let terms = &lot.terms;
        let row = bounded(
            sqlx::query_as::<_, LotRow>(&sql)
                .bind(lot.status.as_db())
                .bind(&terms.title)
                .bind(&terms.description)
                .bind(terms.start_price)
                .bind(terms.end_price)
                .bind(terms.step_price)
                .bind(lot.creator_id.value())
                .bind(terms.start_at)
                .bind(terms.end_at)
                .bind(terms.notify)
                .fetch_one(&self.pool),
        )
        .await?;

        row.into_lot()
    }

    async fn update(&self, lot: &Lot) -> AuctionResult<Option<Lot>> {
        let sql = format!(
            r#"
            UPDATE lots
            SET status = $2, title = $3, description = $4, start_price = $5, end_price = $6,
                step_price = $7, start_at = $8, end_at = $9, notify = $10, updated_at = NOW()
            WHERE id = $1
            RETURNING {LOT_COLUMNS}
            "#
        );
        let terms = &lot.terms;
        let row = bounded(
            sqlx::query_as::<_, LotRow>(&sql)
                .bind(lot.id.value())
                .bind(lot.status.as_db())
                .bind(&terms.title)
                .bind(&terms.description)
                .bind(terms.start_price)
                .bind(terms.end_price)
                .bind(terms.step_price)
                .bind(terms.start_at)
                .bind(terms.end_at)
                .bind(terms.notify)
                .fetch_optional(&self.pool),
        )
        .await?;

        row.map(LotRow::into_lot).transpose()
    }

    async fn delete(&self, lot_id: LotId) -> AuctionResult<bool> {
        let result = bounded(
            sqlx::query("DELETE FROM lots WHERE id = $1")
                .bind(lot_id.value())
                .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl BidRepository for PgAuctionRepository {
    async fn list_for_lot(&self, lot_id: LotId) -> AuctionResult<Vec<Bid>> {
        let sql = format!("SELECT {BID_COLUMNS} FROM bids WHERE lot_id = $1 ORDER BY id");
        let rows = bounded(
            sqlx::query_as::<_, BidRow>(&sql)
                .bind(lot_id.value())
                .fetch_all(&self.pool),
        )
        .await?;

        Ok(rows.into_iter().map(BidRow::into_bid).collect())
    }

    async fn place(&self, bid: &NewBid) -> AuctionResult<Bid> {
        // Dropping the transaction on any early return rolls it back.
        let mut tx = bounded(self.pool.begin()).await?;

        // Row lock on the lot serializes concurrent bidders.
        let locked = bounded(
            sqlx::query_scalar::<_, i64>("SELECT id FROM lots WHERE id = $1 FOR UPDATE")
                .bind(bid.lot_id.value())
                .fetch_optional(&mut *tx),
        )
        .await?;
        if locked.is_none() {
            return Err(AuctionError::LotNotFound);
        }

        let previous_total = bounded(
            sqlx::query_scalar::<_, i64>(
                "SELECT COALESCE(SUM(amount), 0)::BIGINT FROM bids WHERE lot_id = $1",
            )
            .bind(bid.lot_id.value())
            .fetch_one(&mut *tx),
        )
        .await?;
        let price = running_price(previous_total, bid.amount)?;

        let sql = format!(
            r#"
            INSERT INTO bids (amount, price, lot_id, bidder_id)
            VALUES ($1, $2, $3, $4)
            RETURNING {BID_COLUMNS}
            "#
        );
        let row = bounded(
            sqlx::query_as::<_, BidRow>(&sql)
                .bind(bid.amount)
                .bind(price)
                .bind(bid.lot_id.value())
                .bind(bid.bidder_id.map(|id| id.value()))
                .fetch_one(&mut *tx),
        )
        .await?;

        bounded(tx.commit()).await?;

        Ok(row.into_bid())
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct LotRow {
    id: i64,
    status: i32,
    title: String,
    description: String,
    start_price: i64,
    end_price: i64,
    step_price: i64,
    creator_id: Option<i64>,
    winner_id: Option<i64>,
    start_at: Option<DateTime<Utc>>,
    end_at: Option<DateTime<Utc>>,
    notify: bool,
    destroyed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl LotRow {
    fn into_lot(self) -> AuctionResult<Lot> {
        Ok(Lot {
            id: LotId::new(self.id),
            status: LotStatus::from_db(self.status)?,
            terms: LotTerms {
                title: self.title,
                description: self.description,
                start_price: self.start_price,
                end_price: self.end_price,
                step_price: self.step_price,
                start_at: self.start_at,
                end_at: self.end_at,
                notify: self.notify,
            },
            creator_id: self.creator_id.map(UserId::new),
            winner_id: self.winner_id.map(UserId::new),
            destroyed_at: self.destroyed_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct BidRow {
    id: i64,
    amount: i64,
    price: i64,
    lot_id: i64,
    bidder_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BidRow {
    fn into_bid(self) -> Bid {
        Bid {
            id: BidId::new(self.id),
            amount: self.amount,
            price: self.price,
            lot_id: LotId::new(self.lot_id),
            bidder_id: self.bidder_id.map(UserId::new),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
