//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use kernel::validation::Validator;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<User> {
        let mut v = Validator::new();
        let name = v.field("name", UserName::new(input.name));
        let email = v.field("email", Email::new(input.email));
        let password = v.field("password", RawPassword::new(input.password));
        v.finish()?;

        let (Some(name), Some(email), Some(password)) = (name, email, password) else {
            return Err(AuthError::Internal("validated field missing".to_string()));
        };

        let new_user = NewUser {
            name,
            email,
            password_hash: UserPassword::from_raw(&password)?,
            active: true,
        };

        let user = self.user_repo.create(&new_user).await?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(user)
    }
}
