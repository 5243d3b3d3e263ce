//! Fakes standing in for the data-access layer in handler tests.

use std::sync::Mutex;
use std::thread::{self, ThreadId};

use async_trait::async_trait;
use uuid::Uuid;

use roster_core::domain::User;
use roster_core::error::{PasswordError, RepoError};
use roster_core::ports::{PasswordService, UserRepository};

/// Always answers with the same canned user, Jane Doe.
#[derive(Default)]
pub struct FixtureUserRepository;

impl FixtureUserRepository {
    fn jane(id: Uuid) -> User {
        let mut user = User::new("Jane", "Doe", "johned@gmail.com", "stub-hash:Erickpass");
        user.id = id;
        user
    }
}

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn create(&self, user: User) -> Result<User, RepoError> {
        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        Ok(vec![Self::jane(Uuid::new_v4())])
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, RepoError> {
        let id = Uuid::parse_str(id).unwrap_or_else(|_| Uuid::new_v4());
        Ok(Some(Self::jane(id)))
    }
}

/// Every call fails the way a dropped database would.
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn create(&self, _user: User) -> Result<User, RepoError> {
        Err(RepoError::Query("connection reset by peer".to_string()))
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        Err(RepoError::Query("connection reset by peer".to_string()))
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<User>, RepoError> {
        Err(RepoError::Query("connection reset by peer".to_string()))
    }
}

/// Cheap reversible "hash" so tests need not pay for Argon2.
pub struct StubPasswordService;

impl PasswordService for StubPasswordService {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        Ok(format!("stub-hash:{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        Ok(hash.strip_prefix("stub-hash:") == Some(password))
    }
}

/// Stub hasher that remembers which thread ran the last `hash` call.
#[derive(Default)]
pub struct ThreadRecordingPasswordService {
    hashed_on: Mutex<Option<ThreadId>>,
}

impl ThreadRecordingPasswordService {
    pub fn hashed_on(&self) -> Option<ThreadId> {
        *self.hashed_on.lock().unwrap()
    }
}

impl PasswordService for ThreadRecordingPasswordService {
    fn hash(&self, password: &str) -> Result<String, PasswordError> {
        *self.hashed_on.lock().unwrap() = Some(thread::current().id());
        StubPasswordService.hash(password)
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        StubPasswordService.verify(password, hash)
    }
}
