//! Catalog skill record

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Skill from the catalog. Read-only from the service's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Skill {
    pub id: i32,
    pub skill_description: String,
    pub skill_img_url: Option<String>,
    pub skill_type: Option<String>,
}
