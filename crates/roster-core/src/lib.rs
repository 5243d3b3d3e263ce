//! # Roster Core
//!
//! The domain layer of the Roster user service.
//! This crate contains the `User` entity and the ports the data-access layer implements.
//! It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;
