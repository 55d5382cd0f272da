//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::db::bounded;
use kernel::id::UserId;
use sqlx::PgPool;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName, user_password::UserPassword};
use crate::error::{AuthError, AuthResult};

const USERS_EMAIL_KEY: &str = "users_email_key";

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let result = bounded(
            sqlx::query_as::<_, UserRow>(
                r#"
                INSERT INTO users (name, email, password_hash, active)
                VALUES ($1, $2, $3, $4)
                RETURNING id, active, role, name, email, destroyed_at, created_at, updated_at
                "#,
            )
            .bind(user.name.as_str())
            .bind(user.email.as_str())
            .bind(user.password_hash.as_phc_string())
            .bind(user.active)
            .fetch_one(&self.pool),
        )
        .await;

        match result {
            Ok(row) => row.into_user(),
            Err(sqlx::Error::Database(db_err))
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some(USERS_EMAIL_KEY) =>
            {
                Err(AuthError::DuplicateEmail)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let row = bounded(
            sqlx::query_as::<_, UserRow>(
                r#"
                SELECT id, active, role, name, email, destroyed_at, created_at, updated_at
                FROM users
                WHERE id = $1
                "#,
            )
            .bind(user_id.value())
            .fetch_optional(&self.pool),
        )
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = bounded(
            sqlx::query_as::<_, UserRow>(
                r#"
                SELECT id, active, role, name, email, password_hash,
                       destroyed_at, created_at, updated_at
                FROM users
                WHERE email = $1
                "#,
            )
            .bind(email.as_str())
            .fetch_optional(&self.pool),
        )
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    async fn list(&self) -> AuthResult<Vec<User>> {
        let rows = bounded(
            sqlx::query_as::<_, UserRow>(
                r#"
                SELECT id, active, role, name, email, destroyed_at, created_at, updated_at
                FROM users
                WHERE destroyed_at IS NULL
                ORDER BY id
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await?;

        rows.into_iter().map(UserRow::into_user).collect()
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    active: bool,
    role: i32,
    name: String,
    email: String,
    #[sqlx(default)]
    password_hash: Option<String>,
    destroyed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let password_hash = self
            .password_hash
            .map(UserPassword::from_phc_string)
            .transpose()?;

        Ok(User {
            id: UserId::new(self.id),
            active: self.active,
            role: self.role,
            name: UserName::from_db(self.name),
            email: Email::from_db(self.email),
            password_hash,
            destroyed_at: self.destroyed_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
