//! User-skill association endpoints
//!
//! `/user-skills/{id}` is shared: GET reads it as a user id, DELETE as a
//! link id.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::http::auth::AuthUser;
use crate::http::error::ApiError;
use crate::http::extractors::{ApiQuery, PathId};
use crate::http::server::AppState;
use crate::models::{NewUserSkill, UserSkill, UserSkillDetail, UserSkillFilter, ValidationError};

/// Create link request
///
/// Only `skill_id` is required. The owner comes from the session.
#[derive(Debug, Deserialize)]
pub struct CreateUserSkillRequest {
    pub skill_id: Option<i32>,
    pub skill_desc: Option<String>,
    pub user_skill_type: Option<String>,
    pub skill_img_url: Option<String>,
}

impl CreateUserSkillRequest {
    /// Parse a create body.
    ///
    /// `skill_id` is checked before the optional fields are typed, so a body
    /// without it fails on `skill_id` whatever else it carries. An empty body
    /// reads as `{}`.
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        let value: Value = if body.iter().all(u8::is_ascii_whitespace) {
            Value::Object(Map::new())
        } else {
            serde_json::from_slice(body).map_err(|e| ApiError::BadRequest {
                message: format!("Invalid JSON body: {e}"),
            })?
        };

        if !has_skill_id(&value) {
            return Err(ValidationError::Missing { field: "skill_id" }.into());
        }

        serde_json::from_value(value).map_err(|e| ApiError::BadRequest {
            message: format!("Invalid request body: {e}"),
        })
    }

    /// Map the request onto a link owned by `user_id`.
    pub fn into_link(self, user_id: i32) -> Result<NewUserSkill, ValidationError> {
        let skill_id = self
            .skill_id
            .filter(|id| *id != 0)
            .ok_or(ValidationError::Missing { field: "skill_id" })?;

        Ok(NewUserSkill {
            fk_user_id: user_id,
            fk_skill_id: skill_id,
            user_skill_type: self.user_skill_type,
            primary_img_url: self.skill_img_url,
            primary_description: self.skill_desc,
        })
    }
}

/// Absent, `null` and `0` all count as no skill id.
fn has_skill_id(body: &Value) -> bool {
    match body.get("skill_id") {
        None | Some(Value::Null) => false,
        Some(id) => id.as_i64() != Some(0),
    }
}

/// GET /user-skills - every link, enriched
async fn list_user_skills(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserSkillDetail>>, ApiError> {
    let links = state.store.all_user_skills().await?;
    Ok(Json(links))
}

/// POST /user-skills - link a skill to the calling user
async fn create_user_skill(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    body: Bytes,
) -> Result<(StatusCode, Json<UserSkill>), ApiError> {
    let link = CreateUserSkillRequest::from_body(&body)?.into_link(user.user_id)?;
    let created = state.store.link_user_skill(link).await?;

    tracing::info!(
        user_skill_id = created.id,
        user_id = created.fk_user_id,
        skill_id = created.fk_skill_id,
        "linked skill"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

/// DELETE /user-skills/{user_skill_id} - remove a link by its own id
async fn delete_user_skill(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    PathId(user_skill_id): PathId,
) -> Result<(StatusCode, &'static str), ApiError> {
    state.store.delete_user_skill(user_skill_id).await?;

    tracing::info!(user_skill_id, by = user.user_id, "deleted user skill");
    Ok((StatusCode::OK, "Skill deleted"))
}

/// GET /user-skills/{user_id} - links owned by a user
///
/// No links reads as an unknown user.
async fn list_for_user(
    State(state): State<Arc<AppState>>,
    PathId(user_id): PathId,
) -> Result<Json<Vec<UserSkillDetail>>, ApiError> {
    let links = state.store.user_skills_for_user(user_id).await?;
    if links.is_empty() {
        return Err(ApiError::NotFound {
            message: format!("Requested user profile id '{}' does not exist", user_id),
        });
    }
    Ok(Json(links))
}

/// GET /user-skills/details/{user_skill_id} - one link, `null` when absent
async fn get_user_skill_detail(
    State(state): State<Arc<AppState>>,
    PathId(user_skill_id): PathId,
) -> Result<Json<Option<UserSkillDetail>>, ApiError> {
    let detail = state.store.user_skill_detail(user_skill_id).await?;
    Ok(Json(detail))
}

/// GET /user-skills/skills/{skill_id}?q=&t=&z= - links for a skill, filtered
async fn list_for_skill(
    State(state): State<Arc<AppState>>,
    PathId(skill_id): PathId,
    ApiQuery(filter): ApiQuery<UserSkillFilter>,
) -> Result<Json<Vec<UserSkillDetail>>, ApiError> {
    let links = state.store.user_skills_for_skill(skill_id).await?;
    let fetched = links.len();

    let links = filter.apply(links);
    if !filter.is_empty() {
        tracing::debug!(skill_id, fetched, kept = links.len(), "filtered user skills");
    }
    Ok(Json(links))
}

/// User-skill routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/user-skills", get(list_user_skills).post(create_user_skill))
        .route("/user-skills/{id}", get(list_for_user).delete(delete_user_skill))
        .route("/user-skills/details/{user_skill_id}", get(get_user_skill_detail))
        .route("/user-skills/skills/{skill_id}", get(list_for_skill))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(skill_id: Option<i32>) -> CreateUserSkillRequest {
        CreateUserSkillRequest {
            skill_id,
            skill_desc: Some("fixes pipes".into()),
            user_skill_type: Some("PLUMBER".into()),
            skill_img_url: Some("https://img.example/p.png".into()),
        }
    }

    #[test]
    fn missing_skill_id_is_rejected() {
        let err = request(None).into_link(3).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "skill_id" });
    }

    #[test]
    fn fields_map_onto_link() {
        let link = request(Some(7)).into_link(3).unwrap();
        assert_eq!(link.fk_user_id, 3);
        assert_eq!(link.fk_skill_id, 7);
        assert_eq!(link.primary_description.as_deref(), Some("fixes pipes"));
        assert_eq!(link.primary_img_url.as_deref(), Some("https://img.example/p.png"));
        assert_eq!(link.user_skill_type.as_deref(), Some("PLUMBER"));
    }

    #[test]
    fn zero_skill_id_is_rejected() {
        let err = request(Some(0)).into_link(3).unwrap_err();
        assert_eq!(err, ValidationError::Missing { field: "skill_id" });
    }

    #[test]
    fn skill_id_checked_before_other_fields() {
        for body in [
            r#"{"skill_desc": 42}"#,
            r#"{"skill_id": null, "user_skill_type": ["x"]}"#,
            r#"{"skill_id": 0}"#,
            r#"[1, 2]"#,
            "",
        ] {
            let err = CreateUserSkillRequest::from_body(body.as_bytes()).unwrap_err();
            assert!(matches!(err, ApiError::Validation(_)), "{body}: {err}");
        }
    }

    #[test]
    fn mistyped_field_is_bad_request() {
        let err = CreateUserSkillRequest::from_body(br#"{"skill_id": 7, "skill_desc": 42}"#)
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest { .. }));

        let err = CreateUserSkillRequest::from_body(b"{not json").unwrap_err();
        assert!(matches!(err, ApiError::BadRequest { .. }));
    }

    #[test]
    fn body_parses_optional_fields() {
        let req = CreateUserSkillRequest::from_body(br#"{"skill_id": 7, "skill_desc": "x"}"#)
            .unwrap();
        assert_eq!(req.skill_id, Some(7));
        assert_eq!(req.skill_desc.as_deref(), Some("x"));
        assert!(req.user_skill_type.is_none());
    }
}
