//! Route handlers organized by resource

pub mod health;
pub mod skills;
pub mod user_skills;
