//! Authenticate Use Case
//!
//! Resolves a bearer token to the user it was issued for.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Authenticate use case
pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Verify `token` and load its subject
    ///
    /// Every token problem and an unknown subject yield `InvalidToken`. A
    /// subject that is not an integer was not minted by us and is an
    /// internal error.
    pub async fn execute(&self, token: &str) -> AuthResult<User> {
        let claims = self.config.token_signer().verify(token).map_err(|e| {
            tracing::debug!(error = %e, "Bearer token rejected");
            AuthError::InvalidToken
        })?;

        let user_id: i64 = claims
            .sub
            .parse()
            .map_err(|_| AuthError::Internal(format!("non-numeric token subject {:?}", claims.sub)))?;

        self.user_repo
            .find_by_id(UserId::new(user_id))
            .await?
            .ok_or(AuthError::InvalidToken)
    }
}
