//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{email::Email, user_name::UserName, user_password::UserPassword};

/// User entity
///
/// The password hash is only loaded by lookups that need it (login).
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub active: bool,
    pub role: i32,
    pub name: UserName,
    pub email: Email,
    pub password_hash: Option<UserPassword>,
    pub destroyed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Stored password hash
    ///
    /// # Panics
    /// Panics if the record was loaded without its hash. Every code path that
    /// checks credentials loads the hash, so reaching this is a bug.
    pub fn password_hash(&self) -> &UserPassword {
        match &self.password_hash {
            Some(hash) => hash,
            None => panic!("user {} was loaded without a password hash", self.id),
        }
    }
}

/// Data for inserting a new user; the store assigns id and timestamps
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: UserName,
    pub email: Email,
    pub password_hash: UserPassword,
    pub active: bool,
}
