//! Observability module - per-request IDs and spans.

mod request_id;

pub use request_id::{RequestId, RequestIdMiddleware};
