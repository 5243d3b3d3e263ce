//! PostgreSQL user repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, QueryOrder, SqlErr};
use uuid::Uuid;

use roster_core::domain::User;
use roster_core::error::RepoError;
use roster_core::ports::UserRepository;

use super::entity::user::{self, Entity as UserEntity};
use super::mask_email;

/// PostgreSQL user repository backed by SeaORM.
pub struct PostgresUserRepository {
    db: DbConn,
}

impl PostgresUserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// Translate driver errors into repository errors.
fn map_db_err(err: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return RepoError::Constraint(detail);
    }

    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, RepoError> {
        tracing::debug!(user_id = %user.id, user_email = %mask_email(&user.email), "Inserting user");

        let active_model: user::ActiveModel = user.into();
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        let result = UserEntity::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, RepoError> {
        // Primary keys are UUIDs; anything else cannot match a row.
        let Ok(id) = Uuid::parse_str(id) else {
            tracing::debug!(user_id = %id, "Lookup with non-UUID id");
            return Ok(None);
        };

        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}
