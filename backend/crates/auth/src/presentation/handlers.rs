//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use kernel::id::UserId;
use kernel::json::JsonBody;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, UserQueryUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    LoginRequest, RegisterRequest, TokenResponse, UserEnvelope, UsersEnvelope,
};
use crate::presentation::extractor::{AuthProvider, CurrentUser};

/// Shared state for auth handlers
pub struct AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> Clone for AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R> AuthProvider for AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    type Users = R;

    fn users(&self) -> Arc<R> {
        self.repo.clone()
    }

    fn auth_config(&self) -> Arc<AuthConfig> {
        self.config.clone()
    }
}

// ============================================================================
// Sessions
// ============================================================================

/// POST /v1/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone());

    let input = RegisterInput {
        name: req.name,
        email: req.email,
        password: req.password,
    };

    let user = use_case.execute(input).await?;
    let location = format!("/v1/users/{}", user.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserEnvelope { user: user.into() }),
    ))
}

/// POST /v1/auth
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let input = LoginInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            token: output.token,
        }),
    ))
}

// ============================================================================
// Users
// ============================================================================

/// GET /v1/users
pub async fn list_users<R>(
    State(state): State<AuthAppState<R>>,
    CurrentUser(_): CurrentUser,
) -> AuthResult<Json<UsersEnvelope>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let users = UserQueryUseCase::new(state.repo.clone()).list().await?;

    Ok(Json(UsersEnvelope {
        users: users.into_iter().map(Into::into).collect(),
    }))
}

/// GET /v1/users/{id}
pub async fn show_user<R>(
    State(state): State<AuthAppState<R>>,
    CurrentUser(_): CurrentUser,
    Path(id): Path<String>,
) -> AuthResult<Json<UserEnvelope>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let user_id = UserId::parse_path(&id).ok_or(AuthError::UserNotFound)?;
    let user = UserQueryUseCase::new(state.repo.clone())
        .show(user_id)
        .await?;

    Ok(Json(UserEnvelope { user: user.into() }))
}
