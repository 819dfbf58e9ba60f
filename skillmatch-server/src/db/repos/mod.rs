//! Repository implementations for database access
//!
//! Each repository borrows the pool and issues exactly one statement per
//! call. Enriched reads share `UserSkillRepo::DETAIL_SELECT`.

pub mod skills;
pub mod user_skills;

pub use skills::SkillRepo;
pub use user_skills::UserSkillRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} '{id}' does not exist")]
    MissingReference { resource: &'static str, id: i32 },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}
