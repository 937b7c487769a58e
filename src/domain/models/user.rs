//! User Domain Model
//!
//! Represents an account in the user/role store that backs HTTP Basic
//! authentication.

use sha2::{Digest, Sha256};

/// Role required to access cash card endpoints
pub const CARD_OWNER_ROLE: &str = "CARD-OWNER";

/// Compute the hex digest stored for a password
#[must_use]
pub fn password_digest(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// User account with a hashed password and a single role
#[derive(Debug, Clone)]
pub struct User {
    username: String,
    password_digest: String,
    role: String,
}

impl User {
    /// Restore a user from persisted data
    #[must_use]
    pub fn restore(username: String, password_digest: String, role: String) -> Self {
        Self {
            username,
            password_digest,
            role,
        }
    }

    /// Check a presented password against the stored digest
    #[must_use]
    pub fn verify_password(&self, candidate: &str) -> bool {
        password_digest(candidate) == self.password_digest
    }

    /// Whether this user may access cash card endpoints
    #[must_use]
    pub fn is_card_owner(&self) -> bool {
        self.role == CARD_OWNER_ROLE
    }

    // Getters

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user(role: &str) -> User {
        User::restore(
            "jay".to_string(),
            password_digest("abc1234"),
            role.to_string(),
        )
    }

    #[test]
    fn test_verify_password_accepts_correct_password() {
        let user = test_user(CARD_OWNER_ROLE);
        assert!(user.verify_password("abc1234"));
    }

    #[test]
    fn test_verify_password_rejects_wrong_password() {
        let user = test_user(CARD_OWNER_ROLE);
        assert!(!user.verify_password("wrong-password"));
    }

    #[test]
    fn test_card_owner_role_check() {
        assert!(test_user(CARD_OWNER_ROLE).is_card_owner());
        assert!(!test_user("NON-OWNER").is_card_owner());
    }

    #[test]
    fn test_password_digest_is_stable_hex() {
        let digest = password_digest("abc1234");
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, password_digest("abc1234"));
        assert_ne!(digest, password_digest("abc12345"));
    }
}
