use async_trait::async_trait;
use crate::domain::User;
use crate::error::RepoError;

/// User data-access layer.
///
/// Every HTTP operation maps onto exactly one call here.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return the stored record.
    async fn create(&self, user: User) -> Result<User, RepoError>;

    /// Fetch every user, oldest first.
    async fn find_all(&self) -> Result<Vec<User>, RepoError>;

    /// Find a user by the ID as it appears in the request path.
    ///
    /// An ID the store cannot interpret matches no user and yields `Ok(None)`.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, RepoError>;
}
