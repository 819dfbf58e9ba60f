//! Skill catalog repository

use sqlx::PgPool;

use super::DbError;
use crate::models::Skill;

/// Skill repository
pub struct SkillRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SkillRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every catalog skill, ordered by id.
    pub async fn list(&self) -> Result<Vec<Skill>, DbError> {
        let skills = sqlx::query_as::<_, Skill>(
            r#"
            SELECT id, skill_description, skill_img_url, skill_type
            FROM skill
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(skills)
    }
}
