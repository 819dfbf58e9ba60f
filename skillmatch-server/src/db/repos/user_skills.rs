//! User-skill link repository
//!
//! Enriched reads JOIN the catalog skill and LEFT JOIN the owner's profile
//! for the zip code, so every list is a single query.

use sqlx::PgPool;

use super::DbError;
use crate::models::{NewUserSkill, UserSkill, UserSkillDetail};

/// Shared projection for `UserSkillDetail` reads.
const DETAIL_SELECT: &str = r#"
    SELECT
        us.id AS user_skill_id,
        us.fk_user_id,
        us.fk_skill_id,
        us.user_skill_type,
        us.primary_description,
        us.primary_img_url,
        s.skill_description,
        s.skill_img_url,
        s.skill_type,
        up.zip
    FROM user_skill us
    JOIN skill s ON s.id = us.fk_skill_id
    LEFT JOIN user_profile up ON up.id = us.fk_user_id
"#;

/// User-skill repository
pub struct UserSkillRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserSkillRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every link, enriched.
    pub async fn list(&self) -> Result<Vec<UserSkillDetail>, DbError> {
        let sql = format!("{DETAIL_SELECT} ORDER BY us.id");
        let rows = sqlx::query_as::<_, UserSkillDetail>(&sql)
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// Links owned by one user.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<UserSkillDetail>, DbError> {
        let sql = format!("{DETAIL_SELECT} WHERE us.fk_user_id = $1 ORDER BY us.id");
        let rows = sqlx::query_as::<_, UserSkillDetail>(&sql)
            .bind(user_id)
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// Links pointing at one catalog skill.
    pub async fn list_for_skill(&self, skill_id: i32) -> Result<Vec<UserSkillDetail>, DbError> {
        let sql = format!("{DETAIL_SELECT} WHERE us.fk_skill_id = $1 ORDER BY us.id");
        let rows = sqlx::query_as::<_, UserSkillDetail>(&sql)
            .bind(skill_id)
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// One link by its surrogate id. `None` when absent.
    pub async fn get(&self, id: i32) -> Result<Option<UserSkillDetail>, DbError> {
        let sql = format!("{DETAIL_SELECT} WHERE us.id = $1");
        let row = sqlx::query_as::<_, UserSkillDetail>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(row)
    }

    /// Insert a link and return the stored row.
    ///
    /// An unknown `fk_skill_id` fails on the foreign key. `fk_user_id` is
    /// not checked; profiles belong to the user subsystem.
    pub async fn create(&self, link: NewUserSkill) -> Result<UserSkill, DbError> {
        let row = sqlx::query_as::<_, UserSkill>(
            r#"
            INSERT INTO user_skill
                (fk_user_id, fk_skill_id, user_skill_type, primary_description, primary_img_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, fk_user_id, fk_skill_id, user_skill_type, primary_description, primary_img_url
            "#,
        )
        .bind(link.fk_user_id)
        .bind(link.fk_skill_id)
        .bind(link.user_skill_type.as_deref())
        .bind(link.primary_description.as_deref())
        .bind(link.primary_img_url.as_deref())
        .fetch_one(self.pool)
        .await
        .map_err(|e| missing_reference(e, &link))?;

        Ok(row)
    }

    /// Delete a link by surrogate id. A missing id deletes nothing.
    pub async fn delete(&self, id: i32) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM user_skill WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

/// Translate the skill foreign-key violation on insert into `MissingReference`.
fn missing_reference(err: sqlx::Error, link: &NewUserSkill) -> DbError {
    let fk_violation = err
        .as_database_error()
        .is_some_and(|db| db.is_foreign_key_violation());

    if fk_violation {
        DbError::MissingReference {
            resource: "skill",
            id: link.fk_skill_id,
        }
    } else {
        DbError::Sqlx(err)
    }
}
