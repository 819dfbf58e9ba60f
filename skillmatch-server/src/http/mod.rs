//! HTTP server layer
//!
//! Axum server with:
//! - Bearer-token gate on every resource route
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod auth;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use auth::{AuthUser, JwtService};
pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
