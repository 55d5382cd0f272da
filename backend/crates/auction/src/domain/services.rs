//! Domain Services
//!
//! Bidding rules shared by the repositories and the bid use case.

use chrono::{DateTime, Utc};

use crate::domain::entities::Lot;
use crate::domain::value_objects::LotStatus;
use crate::error::{AuctionError, AuctionResult};

/// Running price of a lot after a bid of `amount`
///
/// `previous_total` is the sum of the amounts of all earlier bids on the lot.
pub fn running_price(previous_total: i64, amount: i64) -> AuctionResult<i64> {
    previous_total
        .checked_add(amount)
        .ok_or_else(|| AuctionError::Internal("lot price overflow".to_string()))
}

/// Check that a lot accepts bids at `now`
///
/// The error is the field message reported to the client under `lot`.
pub fn check_bidding_window(lot: &Lot, now: DateTime<Utc>) -> Result<(), &'static str> {
    if lot.status != LotStatus::Published {
        return Err("is not open for bidding");
    }
    if lot.terms.start_at.is_some_and(|start_at| now < start_at) {
        return Err("bidding has not started yet");
    }
    if lot.terms.end_at.is_some_and(|end_at| now > end_at) {
        return Err("bidding has already ended");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LotTerms;
    use chrono::Duration;
    use kernel::id::LotId;

    fn lot(status: LotStatus) -> Lot {
        let now = Utc::now();
        Lot {
            id: LotId::new(1),
            status,
            terms: LotTerms {
                title: "t".to_string(),
                description: "d".to_string(),
                start_price: 100,
                end_price: 0,
                step_price: 10,
                start_at: Some(now - Duration::hours(1)),
                end_at: Some(now + Duration::hours(1)),
                notify: false,
            },
            creator_id: None,
            winner_id: None,
            destroyed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_running_price() {
        assert_eq!(running_price(1500, 500).unwrap(), 2000);
        assert_eq!(running_price(0, 500).unwrap(), 500);
        assert!(running_price(i64::MAX, 1).is_err());
    }

    #[test]
    fn test_bidding_window_open() {
        assert!(check_bidding_window(&lot(LotStatus::Published), Utc::now()).is_ok());
    }

    #[test]
    fn test_bidding_window_open_without_dates() {
        let mut lot = lot(LotStatus::Published);
        lot.terms.start_at = None;
        lot.terms.end_at = None;
        assert!(check_bidding_window(&lot, Utc::now()).is_ok());
    }

    #[test]
    fn test_bidding_window_status() {
        for status in [
            LotStatus::Pending,
            LotStatus::Processing,
            LotStatus::Finished,
        ] {
            assert_eq!(
                check_bidding_window(&lot(status), Utc::now()),
                Err("is not open for bidding")
            );
        }
    }

    #[test]
    fn test_bidding_window_dates() {
        let lot = lot(LotStatus::Published);
        assert_eq!(
            check_bidding_window(&lot, Utc::now() - Duration::hours(2)),
            Err("bidding has not started yet")
        );
        assert_eq!(
            check_bidding_window(&lot, Utc::now() + Duration::hours(2)),
            Err("bidding has already ended")
        );
    }
}
