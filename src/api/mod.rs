//! HTTP API module for the index page, status and health endpoints.

pub mod handlers;
pub mod routes;
pub mod templates;

pub use handlers::AppState;
pub use routes::create_router;
