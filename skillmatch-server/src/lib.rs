//! skillmatch-server: skills catalog and user-skill association API
//!
//! Authenticated JSON endpoints over a PostgreSQL-backed store. Handlers
//! talk to the store only through [`db::SkillStore`], so the same router
//! runs against [`db::PgSkillStore`] in production and
//! [`db::MemoryStore`] in tests.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, MemoryStore, PgSkillStore, SkillStore};
pub use http::{build_router, run_server, ApiError, AppState, AuthUser, JwtService, ServerConfig};
