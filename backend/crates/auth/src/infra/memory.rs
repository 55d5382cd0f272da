//! In-memory user repository
//!
//! Used by router tests in this crate and in crates that mount the auth
//! extractor (enable the `memory` feature).

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use kernel::id::UserId;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Clones share the same storage.
#[derive(Clone, Default)]
pub struct MemoryUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn users(&self) -> AuthResult<MutexGuard<'_, Vec<User>>> {
        self.users
            .lock()
            .map_err(|_| AuthError::Internal("user store poisoned".to_string()))
    }

    /// Mark a user as soft-deleted
    pub fn destroy(&self, user_id: UserId) -> AuthResult<()> {
        let mut users = self.users()?;
        if let Some(user) = users.iter_mut().find(|u| u.id == user_id) {
            user.destroyed_at = Some(Utc::now());
        }
        Ok(())
    }
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let mut users = self.users()?;
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::DuplicateEmail);
        }

        let now = Utc::now();
        let stored = User {
            id: UserId::new(users.len() as i64 + 1),
            active: user.active,
            role: 0,
            name: user.name.clone(),
            email: user.email.clone(),
            password_hash: Some(user.password_hash.clone()),
            destroyed_at: None,
            created_at: now,
            updated_at: now,
        };
        users.push(stored.clone());

        Ok(User {
            password_hash: None,
            ..stored
        })
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let users = self.users()?;
        Ok(users.iter().find(|u| u.id == user_id).map(|u| User {
            password_hash: None,
            ..u.clone()
        }))
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let users = self.users()?;
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }

    async fn list(&self) -> AuthResult<Vec<User>> {
        let users = self.users()?;
        Ok(users
            .iter()
            .filter(|u| u.destroyed_at.is_none())
            .map(|u| User {
                password_hash: None,
                ..u.clone()
            })
            .collect())
    }
}
