//! Command implementations for the skillmatch CLI

use anyhow::{Context, Result};
use clap::Args;

pub mod migrate;
pub mod serve;
pub mod token;

pub use migrate::run_migrate;
pub use serve::run_serve;
pub use token::run_token;

/// Default issuer embedded in and required of session tokens
pub const DEFAULT_ISSUER: &str = "skillmatch";

/// Database connection options
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}

impl DatabaseArgs {
    pub fn url(&self) -> Result<&str> {
        self.database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")
    }
}

/// Token signing options shared by `serve` and `token`
#[derive(Args, Debug, Clone)]
pub struct JwtArgs {
    /// HMAC secret used to sign and verify bearer tokens
    #[arg(long, env = "SKILLMATCH_JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: Option<String>,

    /// Token issuer (`iss` claim)
    #[arg(long, env = "SKILLMATCH_JWT_ISSUER", default_value = DEFAULT_ISSUER)]
    pub jwt_issuer: String,
}

impl JwtArgs {
    pub fn service(&self) -> Result<skillmatch_server::JwtService> {
        let secret = self
            .jwt_secret
            .as_deref()
            .filter(|s| !s.is_empty())
            .context("SKILLMATCH_JWT_SECRET not set. Set via --jwt-secret or SKILLMATCH_JWT_SECRET env")?;
        Ok(skillmatch_server::JwtService::new(secret, &self.jwt_issuer))
    }
}
