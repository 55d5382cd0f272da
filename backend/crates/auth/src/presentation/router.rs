//! Auth Router

use axum::http::{HeaderValue, header};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// `Vary: Authorization` for responses that depend on the bearer token
pub fn vary_authorization() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::appending(header::VARY, HeaderValue::from_static("Authorization"))
}

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
///
/// Routes: `POST /register`, `POST /auth`, `GET /users`, `GET /users/{id}`.
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let protected = Router::new()
        .route("/users", get(handlers::list_users::<R>))
        .route("/users/{id}", get(handlers::show_user::<R>))
        .layer(vary_authorization());

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/auth", post(handlers::login::<R>))
        .merge(protected)
        .with_state(state)
}
