//! PostgreSQL User Repository Implementation
//!
//! Implements the UserRepository trait against the users table consulted
//! during HTTP Basic authentication.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::User;
use crate::shared::errors::RepositoryError;

/// Database row representation for the users table
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    username: String,
    password_digest: String,
    role: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::restore(row.username, row.password_digest, row.role)
    }
}

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new PostgresUserRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT username, password_digest, role
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }
}
