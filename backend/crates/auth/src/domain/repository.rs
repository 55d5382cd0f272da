//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user and return the stored record
    ///
    /// Fails with `AuthError::DuplicateEmail` when the email is taken.
    async fn create(&self, user: &NewUser) -> AuthResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>>;

    /// Find user by email, including the password hash
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// All users that are not soft-deleted, ordered by id, without hashes
    async fn list(&self) -> AuthResult<Vec<User>>;
}
