//! Data access layer - pool, schema, repositories, and the store handle
//!
//! # Design Principles
//!
//! - Handlers only see `SkillStore`; the PostgreSQL pool stays behind it
//! - Enriched reads use JOINs - no N+1 queries
//! - One round trip per operation, no retries

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use memory::MemoryStore;
pub use pool::create_pool;
pub use repos::*;
pub use store::{PgSkillStore, SkillStore};
