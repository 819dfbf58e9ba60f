//! Domain models
//!
//! Catalog skills, user-skill links, and the filter applied to
//! skill-scoped link queries.

pub mod validation;
pub mod skill;
pub mod user_skill;

pub use validation::ValidationError;
pub use skill::Skill;
pub use user_skill::{NewUserSkill, UserSkill, UserSkillDetail, UserSkillFilter};
