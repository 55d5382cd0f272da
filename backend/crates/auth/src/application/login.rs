//! Login Use Case
//!
//! Checks credentials and issues a bearer token.

use std::sync::Arc;

use kernel::validation::Validator;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let mut v = Validator::new();
        let email = v.field("email", Email::new(input.email));
        let password = v.field("password", RawPassword::new(input.password));
        v.finish()?;

        let (Some(email), Some(password)) = (email, password) else {
            return Err(AuthError::Internal("validated field missing".to_string()));
        };

        // Unknown email and wrong password must be indistinguishable
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.password_hash().verify(&password) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.config.token_signer().issue(&user.id.to_string())?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginOutput { token })
    }
}
