//! User-skill links
//!
//! A link joins one user to one catalog skill and carries per-user
//! overrides (description, image) plus a classification tag. Links are
//! identified by their own surrogate id, never by the user/skill pair.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Link row as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserSkill {
    pub id: i32,
    pub fk_user_id: i32,
    pub fk_skill_id: i32,
    pub user_skill_type: Option<String>,
    pub primary_description: Option<String>,
    pub primary_img_url: Option<String>,
}

/// Insert payload for a new link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserSkill {
    pub fk_user_id: i32,
    pub fk_skill_id: i32,
    pub user_skill_type: Option<String>,
    pub primary_description: Option<String>,
    pub primary_img_url: Option<String>,
}

/// Link enriched with catalog data and the owner's profile zip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserSkillDetail {
    pub user_skill_id: i32,
    pub fk_user_id: i32,
    pub fk_skill_id: i32,
    pub user_skill_type: Option<String>,
    pub primary_description: Option<String>,
    pub primary_img_url: Option<String>,
    pub skill_description: Option<String>,
    pub skill_img_url: Option<String>,
    pub skill_type: Option<String>,
    pub zip: Option<String>,
}

/// Query filters for `GET /user-skills/skills/{skill_id}`
///
/// `q` is free text, `t` a skill type, `z` a zip code. An absent or
/// empty parameter disables its filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserSkillFilter {
    pub q: Option<String>,
    pub t: Option<String>,
    pub z: Option<String>,
}

impl UserSkillFilter {
    /// Narrow `links` by text, then type, then zip.
    ///
    /// Each step runs on the output of the previous one, so the
    /// filters compose as a logical AND.
    pub fn apply(&self, mut links: Vec<UserSkillDetail>) -> Vec<UserSkillDetail> {
        if let Some(text) = present(&self.q) {
            links.retain(|link| {
                link.primary_description
                    .as_deref()
                    .is_some_and(|desc| desc.contains(text))
            });
        }

        if let Some(kind) = present(&self.t) {
            let kind = kind.to_uppercase();
            links.retain(|link| link.user_skill_type.as_deref() == Some(kind.as_str()));
        }

        if let Some(zip) = present(&self.z) {
            links.retain(|link| link.zip.as_deref() == Some(zip));
        }

        links
    }

    pub fn is_empty(&self) -> bool {
        present(&self.q).is_none() && present(&self.t).is_none() && present(&self.z).is_none()
    }
}

fn present(param: &Option<String>) -> Option<&str> {
    param.as_deref().filter(|s| !s.is_empty())
}
