use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// User entity - represents a user in the system.
///
/// `password_hash` and `version` are storage details and must never be
/// rendered into a response.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    /// Revision counter, starts at 0.
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID and timestamps.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("version", &self.version)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_starts_at_version_zero() {
        let user = User::new("Jane", "Doe", "jane@example.com", "hash");

        assert_eq!(user.version, 0);
        assert_eq!(user.created_at, user.updated_at);
        assert_eq!(user.first_name, "Jane");
    }

    #[test]
    fn test_new_users_get_distinct_ids() {
        let a = User::new("Jane", "Doe", "jane@example.com", "hash");
        let b = User::new("Jane", "Doe", "jane@example.com", "hash");

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_debug_redacts_password_hash() {
        let user = User::new("Jane", "Doe", "jane@example.com", "$argon2id$secret");
        let rendered = format!("{user:?}");

        assert!(!rendered.contains("$argon2id$secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
