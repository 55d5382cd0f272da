//! HTTP Handlers

use auth::domain::repository::UserRepository;
use auth::{AuthConfig, AuthProvider, CurrentUser};
use axum::Json;
use axum::extract::{FromRequest, Path, Request, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use kernel::id::LotId;
use kernel::json::JsonBody;
use std::sync::Arc;

use crate::application::config::AuctionConfig;
use crate::application::{
    BidQueryUseCase, CreateLotInput, CreateLotUseCase, DeleteLotUseCase, LotQueryUseCase,
    PlaceBidInput, PlaceBidUseCase, UpdateLotUseCase,
};
use crate::domain::repository::{BidRepository, LotRepository};
use crate::error::{AuctionError, AuctionResult, MSG_LOT_DELETED};
use crate::presentation::dto::{
    BidEnvelope, BidsEnvelope, LotEnvelope, LotRequest, LotsEnvelope, MessageResponse,
};

/// Shared state for auction handlers
pub struct AuctionAppState<R, U>
where
    R: LotRepository + BidRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub users: Arc<U>,
    pub auth_config: Arc<AuthConfig>,
    pub config: Arc<AuctionConfig>,
}

impl<R, U> Clone for AuctionAppState<R, U>
where
    R: LotRepository + BidRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            users: self.users.clone(),
            auth_config: self.auth_config.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R, U> AuthProvider for AuctionAppState<R, U>
where
    R: LotRepository + BidRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    type Users = U;

    fn users(&self) -> Arc<U> {
        self.users.clone()
    }

    fn auth_config(&self) -> Arc<AuthConfig> {
        self.auth_config.clone()
    }
}

fn lot_id(raw: &str) -> AuctionResult<LotId> {
    LotId::parse_path(raw).ok_or(AuctionError::LotNotFound)
}

// ============================================================================
// Lots
// ============================================================================

/// GET /v1/lots
pub async fn list_lots<R, U>(
    State(state): State<AuctionAppState<R, U>>,
    CurrentUser(_): CurrentUser,
) -> AuctionResult<Json<LotsEnvelope>>
where
    R: LotRepository + BidRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let lots = LotQueryUseCase::new(state.repo.clone()).list().await?;

    Ok(Json(LotsEnvelope {
        lots: lots.into_iter().map(Into::into).collect(),
    }))
}

/// GET /v1/lots/{id}
pub async fn show_lot<R, U>(
    State(state): State<AuctionAppState<R, U>>,
    CurrentUser(_): CurrentUser,
    Path(id): Path<String>,
) -> AuctionResult<Json<LotEnvelope>>
where
    R: LotRepository + BidRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let lot = LotQueryUseCase::new(state.repo.clone())
        .show(lot_id(&id)?)
        .await?;

    Ok(Json(LotEnvelope { lot: lot.into() }))
}

/// POST /v1/lots
pub async fn create_lot<R, U>(
    State(state): State<AuctionAppState<R, U>>,
    CurrentUser(user): CurrentUser,
    JsonBody(req): JsonBody<LotRequest>,
) -> AuctionResult<impl IntoResponse>
where
    R: LotRepository + BidRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let use_case = CreateLotUseCase::new(state.repo.clone());

    let input = CreateLotInput {
        terms: req.lot.into_terms(),
        creator_id: user.id,
    };

    let lot = use_case.execute(input).await?;
    let location = format!("/v1/lots/{}", lot.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(LotEnvelope { lot: lot.into() }),
    ))
}

/// PATCH /v1/lots/{id}
///
/// The lot is looked up before the body is decoded, so an unknown lot is a
/// 404 even when the body is malformed.
pub async fn update_lot<R, U>(
    State(state): State<AuctionAppState<R, U>>,
    CurrentUser(_): CurrentUser,
    Path(id): Path<String>,
    request: Request,
) -> AuctionResult<Json<LotEnvelope>>
where
    R: LotRepository + BidRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let lot_id = lot_id(&id)?;
    LotQueryUseCase::new(state.repo.clone()).show(lot_id).await?;

    let JsonBody(req) = JsonBody::<LotRequest>::from_request(request, &state).await?;

    let lot = UpdateLotUseCase::new(state.repo.clone())
        .execute(lot_id, req.lot.into_patch())
        .await?;

    Ok(Json(LotEnvelope { lot: lot.into() }))
}

/// DELETE /v1/lots/{id}
pub async fn delete_lot<R, U>(
    State(state): State<AuctionAppState<R, U>>,
    CurrentUser(_): CurrentUser,
    Path(id): Path<String>,
) -> AuctionResult<Json<MessageResponse>>
where
    R: LotRepository + BidRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    DeleteLotUseCase::new(state.repo.clone())
        .execute(lot_id(&id)?)
        .await?;

    Ok(Json(MessageResponse {
        message: MSG_LOT_DELETED,
    }))
}

// ============================================================================
// Bids
// ============================================================================

/// GET /v1/lots/{id}/bids
pub async fn list_bids<R, U>(
    State(state): State<AuctionAppState<R, U>>,
    CurrentUser(_): CurrentUser,
    Path(id): Path<String>,
) -> AuctionResult<Json<BidsEnvelope>>
where
    R: LotRepository + BidRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let bids = BidQueryUseCase::new(state.repo.clone())
        .list(lot_id(&id)?)
        .await?;

    Ok(Json(BidsEnvelope {
        bids: bids.into_iter().map(Into::into).collect(),
    }))
}

/// POST /v1/lots/{id}/bids
pub async fn place_bid<R, U>(
    State(state): State<AuctionAppState<R, U>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> AuctionResult<impl IntoResponse>
where
    R: LotRepository + BidRepository + Send + Sync + 'static,
    U: UserRepository + Send + Sync + 'static,
{
    let use_case = PlaceBidUseCase::new(state.repo.clone(), state.config.clone());

    let input = PlaceBidInput {
        lot_id: lot_id(&id)?,
        bidder_id: user.id,
    };

    let bid = use_case.execute(input).await?;
    let location = format!("/v1/lots/{}/bids/{}", bid.lot_id, bid.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(BidEnvelope { bid: bid.into() }),
    ))
}
