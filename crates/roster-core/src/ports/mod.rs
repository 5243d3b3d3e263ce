//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod password;
mod repository;

pub use password::PasswordService;
pub use repository::UserRepository;
