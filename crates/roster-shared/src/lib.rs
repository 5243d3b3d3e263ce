//! # Roster Shared
//!
//! Wire types shared between the API server and its clients.
//! Nothing here knows about storage; conversions from domain types live in the server.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
