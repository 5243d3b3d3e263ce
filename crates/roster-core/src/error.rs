//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
///
/// These travel unchanged from the data-access layer up to the HTTP edge.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Password hashing errors.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Stored hash is malformed: {0}")]
    MalformedHash(String),
}
