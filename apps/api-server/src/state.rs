//! Application state - shared across all handlers.

use std::sync::Arc;

use roster_core::ports::{PasswordService, UserRepository};
use roster_infra::database::{DatabaseConfig, InMemoryUserRepository};
use roster_infra::password::Argon2PasswordService;

#[cfg(feature = "postgres")]
use roster_infra::database::{DatabaseConnections, PostgresUserRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The data-access layer for users.
    pub users: Arc<dyn UserRepository>,
    pub passwords: Arc<dyn PasswordService>,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// Falls back to in-memory storage when the database is not configured or unreachable.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => match DatabaseConnections::init(config).await {
                Ok(connections) => {
                    let conn = Arc::new(connections);
                    let repo = Arc::new(PostgresUserRepository::new(conn.main.clone()));
                    let mut state = Self::with_repository(repo);
                    state.db = Some(conn);
                    state
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repository");
            Self::in_memory()
        };

        tracing::info!("Application state initialized");
        state
    }

    /// State backed by a fresh in-memory repository.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryUserRepository::new()))
    }

    /// State around an existing repository, hashing passwords with Argon2.
    pub fn with_repository(users: Arc<dyn UserRepository>) -> Self {
        Self {
            users,
            passwords: Arc::new(Argon2PasswordService::new()),
            #[cfg(feature = "postgres")]
            db: None,
        }
    }
}
