//! In-memory `SkillStore` for tests and local demos
//!
//! Mirrors the PostgreSQL semantics the handlers rely on: enriched reads
//! join the catalog and the owner's zip, inserts reject unknown skills but
//! accept any user id, deletes of unknown ids are no-ops. Every trait call is counted so tests
//! can assert that rejected requests never reached the store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{DbError, SkillStore};
use crate::models::{NewUserSkill, Skill, UserSkill, UserSkillDetail};

#[derive(Default)]
struct Tables {
    skills: Vec<Skill>,
    zips: HashMap<i32, Option<String>>,
    links: Vec<UserSkill>,
    next_link_id: i32,
}

impl Tables {
    fn enrich(&self, link: &UserSkill) -> Option<UserSkillDetail> {
        let skill = self.skills.iter().find(|s| s.id == link.fk_skill_id)?;
        Some(UserSkillDetail {
            user_skill_id: link.id,
            fk_user_id: link.fk_user_id,
            fk_skill_id: link.fk_skill_id,
            user_skill_type: link.user_skill_type.clone(),
            primary_description: link.primary_description.clone(),
            primary_img_url: link.primary_img_url.clone(),
            skill_description: Some(skill.skill_description.clone()),
            skill_img_url: skill.skill_img_url.clone(),
            skill_type: skill.skill_type.clone(),
            zip: self.zips.get(&link.fk_user_id).cloned().flatten(),
        })
    }

    fn details<F>(&self, keep: F) -> Vec<UserSkillDetail>
    where
        F: Fn(&UserSkill) -> bool,
    {
        self.links
            .iter()
            .filter(|link| keep(link))
            .filter_map(|link| self.enrich(link))
            .collect()
    }
}

/// Store backed by process memory
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a catalog skill.
    pub fn add_skill(&self, skill: Skill) {
        self.lock().skills.push(skill);
    }

    /// Register a user profile and its zip code.
    pub fn add_profile(&self, user_id: i32, zip: Option<&str>) {
        self.lock().zips.insert(user_id, zip.map(str::to_owned));
    }

    /// Make every subsequent call fail with `DbError::Unavailable`.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of trait calls served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tables> {
        // A poisoned lock only means another test thread panicked mid-write.
        self.tables.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn enter(&self) -> Result<std::sync::MutexGuard<'_, Tables>, DbError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(DbError::Unavailable("memory store set to fail".into()));
        }
        Ok(self.lock())
    }
}

#[async_trait]
impl SkillStore for MemoryStore {
    async fn all_skills(&self) -> Result<Vec<Skill>, DbError> {
        let tables = self.enter()?;
        let mut skills = tables.skills.clone();
        skills.sort_by_key(|s| s.id);
        Ok(skills)
    }

    async fn all_user_skills(&self) -> Result<Vec<UserSkillDetail>, DbError> {
        Ok(self.enter()?.details(|_| true))
    }

    async fn link_user_skill(&self, link: NewUserSkill) -> Result<UserSkill, DbError> {
        let mut tables = self.enter()?;

        if !tables.skills.iter().any(|s| s.id == link.fk_skill_id) {
            return Err(DbError::MissingReference {
                resource: "skill",
                id: link.fk_skill_id,
            });
        }

        tables.next_link_id += 1;
        let row = UserSkill {
            id: tables.next_link_id,
            fk_user_id: link.fk_user_id,
            fk_skill_id: link.fk_skill_id,
            user_skill_type: link.user_skill_type,
            primary_description: link.primary_description,
            primary_img_url: link.primary_img_url,
        };
        tables.links.push(row.clone());
        Ok(row)
    }

    async fn delete_user_skill(&self, user_skill_id: i32) -> Result<(), DbError> {
        self.enter()?.links.retain(|link| link.id != user_skill_id);
        Ok(())
    }

    async fn user_skills_for_user(&self, user_id: i32) -> Result<Vec<UserSkillDetail>, DbError> {
        Ok(self.enter()?.details(|link| link.fk_user_id == user_id))
    }

    async fn user_skill_detail(
        &self,
        user_skill_id: i32,
    ) -> Result<Option<UserSkillDetail>, DbError> {
        let tables = self.enter()?;
        Ok(tables
            .links
            .iter()
            .find(|link| link.id == user_skill_id)
            .and_then(|link| tables.enrich(link)))
    }

    async fn user_skills_for_skill(
        &self,
        skill_id: i32,
    ) -> Result<Vec<UserSkillDetail>, DbError> {
        Ok(self.enter()?.details(|link| link.fk_skill_id == skill_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plumbing() -> Skill {
        Skill {
            id: 7,
            skill_description: "Plumbing".into(),
            skill_img_url: None,
            skill_type: Some("TRADE".into()),
        }
    }

    fn new_link(user: i32, skill: i32) -> NewUserSkill {
        NewUserSkill {
            fk_user_id: user,
            fk_skill_id: skill,
            user_skill_type: Some("PLUMBER".into()),
            primary_description: Some("fixes pipes".into()),
            primary_img_url: None,
        }
    }

    #[tokio::test]
    async fn link_rejects_unknown_skill() {
        let store = MemoryStore::new();
        let err = store.link_user_skill(new_link(1, 99)).await.unwrap_err();
        assert!(matches!(err, DbError::MissingReference { resource: "skill", id: 99 }));
    }

    #[tokio::test]
    async fn link_accepts_user_without_profile() {
        let store = MemoryStore::new();
        store.add_skill(plumbing());

        let created = store.link_user_skill(new_link(5, 7)).await.unwrap();
        let detail = store.user_skill_detail(created.id).await.unwrap().unwrap();

        assert_eq!(detail.fk_user_id, 5);
        assert!(detail.zip.is_none());
    }

    #[tokio::test]
    async fn details_carry_profile_zip() {
        let store = MemoryStore::new();
        store.add_skill(plumbing());
        store.add_profile(1, Some("10001"));

        let created = store.link_user_skill(new_link(1, 7)).await.unwrap();
        let detail = store.user_skill_detail(created.id).await.unwrap().unwrap();

        assert_eq!(detail.zip.as_deref(), Some("10001"));
        assert_eq!(detail.skill_description.as_deref(), Some("Plumbing"));
    }

    #[tokio::test]
    async fn delete_unknown_id_is_noop() {
        let store = MemoryStore::new();
        store.add_skill(plumbing());
        store.link_user_skill(new_link(1, 7)).await.unwrap();

        store.delete_user_skill(42).await.unwrap();
        assert_eq!(store.all_user_skills().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failing_mode_counts_calls() {
        let store = MemoryStore::new();
        store.set_failing(true);

        assert!(store.all_skills().await.is_err());
        assert_eq!(store.calls(), 1);
    }
}
