//! # Roster Infrastructure
//!
//! Concrete implementations of the ports defined in `roster-core`.
//! This crate contains the data-access layer and password hashing.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory only
//! - `postgres` - PostgreSQL storage via SeaORM

pub mod database;
pub mod password;

pub use database::{DatabaseConfig, InMemoryUserRepository};
pub use password::Argon2PasswordService;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresUserRepository};
