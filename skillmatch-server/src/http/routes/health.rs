//! Liveness endpoint, mounted outside the auth gate
//!
//! Never touches the store; a 200 only means the process is serving.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct Liveness {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// Issuer the gate accepts tokens from
    pub token_issuer: String,
}

/// GET /health
async fn liveness(State(state): State<Arc<AppState>>) -> Json<Liveness> {
    Json(Liveness {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        token_issuer: state.jwt.issuer().to_owned(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(liveness))
}
