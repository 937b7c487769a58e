//! User Repository Gateway
//!
//! Abstract trait defining the contract for the user/role store consulted
//! during authentication.

use async_trait::async_trait;

use crate::domain::models::user::User;
use crate::shared::errors::RepositoryError;

/// Repository trait for user lookups
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
}
