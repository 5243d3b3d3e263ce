//! Password hashing port.

use crate::error::PasswordError;

/// Password hashing service.
///
/// Plain-text passwords never reach a repository; handlers hash them first.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password into a self-describing hash string.
    fn hash(&self, password: &str) -> Result<String, PasswordError>;

    /// Verify a password against a hash produced by [`PasswordService::hash`].
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError>;
}
