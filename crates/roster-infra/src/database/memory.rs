//! In-memory user repository - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use roster_core::domain::User;
use roster_core::error::RepoError;
use roster_core::ports::UserRepository;

use super::mask_email;

/// In-memory user store using a HashMap behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryUserRepository {
    store: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, RepoError> {
        let mut store = self.store.write().await;

        if store.contains_key(&user.id) {
            return Err(RepoError::Constraint(format!(
                "user {} already exists",
                user.id
            )));
        }

        tracing::debug!(user_id = %user.id, user_email = %mask_email(&user.email), "Storing user in memory");
        store.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        let store = self.store.read().await;

        let mut users: Vec<User> = store.values().cloned().collect();
        users.sort_by_key(|u| u.created_at);

        Ok(users)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, RepoError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find_by_id() {
        let repo = InMemoryUserRepository::new();
        let user = User::new("Jane", "Doe", "jane@example.com", "hash");
        let id = user.id;

        repo.create(user).await.unwrap();

        let found = repo.find_by_id(&id.to_string()).await.unwrap().unwrap();
        assert_eq!(found.email, "jane@example.com");
    }

    #[tokio::test]
    async fn test_find_by_unknown_id_is_none() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.find_by_id(&Uuid::new_v4().to_string()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_malformed_id_is_none() {
        let repo = InMemoryUserRepository::new();
        repo.create(User::new("Jane", "Doe", "jane@example.com", "hash"))
            .await
            .unwrap();

        assert!(repo.find_by_id("67467238jhfd").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_is_oldest_first() {
        let repo = InMemoryUserRepository::new();
        let mut first = User::new("Ada", "Lovelace", "ada@example.com", "hash");
        first.created_at -= chrono::Duration::seconds(10);
        let second = User::new("Alan", "Turing", "alan@example.com", "hash");

        repo.create(second).await.unwrap();
        repo.create(first).await.unwrap();

        let users = repo.find_all().await.unwrap();
        let names: Vec<_> = users.iter().map(|u| u.first_name.as_str()).collect();
        assert_eq!(names, ["Ada", "Alan"]);
    }

    #[tokio::test]
    async fn test_duplicate_id_is_a_constraint_violation() {
        let repo = InMemoryUserRepository::new();
        let user = User::new("Jane", "Doe", "jane@example.com", "hash");

        repo.create(user.clone()).await.unwrap();
        let err = repo.create(user).await.unwrap_err();

        assert!(matches!(err, RepoError::Constraint(_)));
    }
}
