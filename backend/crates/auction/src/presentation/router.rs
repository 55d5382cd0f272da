//! Auction Router

use auth::domain::repository::UserRepository;
use auth::{AuthConfig, PgUserRepository, vary_authorization};
use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::AuctionConfig;
use crate::domain::repository::{BidRepository, LotRepository};
use crate::infra::postgres::PgAuctionRepository;
use crate::presentation::handlers::{self, AuctionAppState};

/// Create the Auction router with PostgreSQL repositories
pub fn auction_router(
    repo: PgAuctionRepository,
    users: PgUserRepository,
    auth_config: AuthConfig,
    config: AuctionConfig,
) -> Router {
    auction_router_generic(repo, users, auth_config, config)
}

/// Create a generic Auction router for any repository implementation
///
/// Routes (all authenticated): `/lots`, `/lots/{id}`, `/lots/{id}/bids`.
pub fn auction_router_generic<R, U>(
    repo: R,
    users: U,
    auth_config: AuthConfig,
    config: AuctionConfig,
) -> Router
where
    R: LotRepository + BidRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let state = AuctionAppState {
        repo: Arc::new(repo),
        users: Arc::new(users),
        auth_config: Arc::new(auth_config),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/lots",
            get(handlers::list_lots::<R, U>).post(handlers::create_lot::<R, U>),
        )
        .route(
            "/lots/{id}",
            get(handlers::show_lot::<R, U>)
                .patch(handlers::update_lot::<R, U>)
                .delete(handlers::delete_lot::<R, U>),
        )
        .route(
            "/lots/{id}/bids",
            get(handlers::list_bids::<R, U>).post(handlers::place_bid::<R, U>),
        )
        .layer(vary_authorization())
        .with_state(state)
}
