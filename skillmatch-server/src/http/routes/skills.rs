//! Skill catalog endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::http::auth::AuthUser;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Skill;

/// GET /skills - every catalog skill
async fn list_skills(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<Json<Vec<Skill>>, ApiError> {
    let skills = state.store.all_skills().await?;
    tracing::debug!(user_id = user.user_id, count = skills.len(), "listed skills");
    Ok(Json(skills))
}

/// Skill routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/skills", get(list_skills))
}
