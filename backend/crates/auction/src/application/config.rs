//! Application Configuration
//!
//! Configuration for the auction application layer.

/// Auction application configuration
#[derive(Debug, Clone, Default)]
pub struct AuctionConfig {
    /// Only accept bids on published lots inside their `[start_at, end_at]` window
    pub enforce_lot_window: bool,
}

impl AuctionConfig {
    pub fn with_lot_window() -> Self {
        Self {
            enforce_lot_window: true,
        }
    }
}
