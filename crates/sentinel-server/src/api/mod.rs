//! REST API and dashboard page
//!
//! - types: application state and response payloads
//! - handlers: endpoint handlers
//! - router: router creation and middleware

mod handlers;
mod router;
pub mod types;

pub use router::create_router;
pub use types::{AppState, HealthResponse, SnapshotResponse};
