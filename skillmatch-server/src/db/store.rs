//! Data-access handle used by the HTTP layer
//!
//! `SkillStore` is the seam between handlers and persistence. The
//! PostgreSQL implementation delegates to the repositories; tests use
//! [`MemoryStore`](super::MemoryStore).

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, SkillRepo, UserSkillRepo};
use crate::models::{NewUserSkill, Skill, UserSkill, UserSkillDetail};

/// Reads and writes against the skill and user-skill tables
#[async_trait]
pub trait SkillStore: Send + Sync + 'static {
    /// Every catalog skill.
    async fn all_skills(&self) -> Result<Vec<Skill>, DbError>;

    /// Every user-skill link, enriched.
    async fn all_user_skills(&self) -> Result<Vec<UserSkillDetail>, DbError>;

    /// Persist a new link.
    async fn link_user_skill(&self, link: NewUserSkill) -> Result<UserSkill, DbError>;

    /// Remove a link by surrogate id. Missing ids are not an error.
    async fn delete_user_skill(&self, user_skill_id: i32) -> Result<(), DbError>;

    /// Links owned by `user_id`.
    async fn user_skills_for_user(&self, user_id: i32) -> Result<Vec<UserSkillDetail>, DbError>;

    /// One link by surrogate id.
    async fn user_skill_detail(
        &self,
        user_skill_id: i32,
    ) -> Result<Option<UserSkillDetail>, DbError>;

    /// Links referencing `skill_id`.
    async fn user_skills_for_skill(&self, skill_id: i32)
        -> Result<Vec<UserSkillDetail>, DbError>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgSkillStore {
    pool: PgPool,
}

impl PgSkillStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SkillStore for PgSkillStore {
    async fn all_skills(&self) -> Result<Vec<Skill>, DbError> {
        SkillRepo::new(&self.pool).list().await
    }

    async fn all_user_skills(&self) -> Result<Vec<UserSkillDetail>, DbError> {
        UserSkillRepo::new(&self.pool).list().await
    }

    async fn link_user_skill(&self, link: NewUserSkill) -> Result<UserSkill, DbError> {
        UserSkillRepo::new(&self.pool).create(link).await
    }

    async fn delete_user_skill(&self, user_skill_id: i32) -> Result<(), DbError> {
        let deleted = UserSkillRepo::new(&self.pool).delete(user_skill_id).await?;
        if deleted == 0 {
            tracing::debug!(user_skill_id, "delete matched no rows");
        }
        Ok(())
    }

    async fn user_skills_for_user(&self, user_id: i32) -> Result<Vec<UserSkillDetail>, DbError> {
        UserSkillRepo::new(&self.pool).list_for_user(user_id).await
    }

    async fn user_skill_detail(
        &self,
        user_skill_id: i32,
    ) -> Result<Option<UserSkillDetail>, DbError> {
        UserSkillRepo::new(&self.pool).get(user_skill_id).await
    }

    async fn user_skills_for_skill(
        &self,
        skill_id: i32,
    ) -> Result<Vec<UserSkillDetail>, DbError> {
        UserSkillRepo::new(&self.pool).list_for_skill(skill_id).await
    }
}
