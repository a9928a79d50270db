//! HTTP surface for the browser UI
//!
//! - GET  /        - the single-page UI
//! - POST /turns   - run one interaction turn over an uploaded recording
//! - GET  /health  - health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
