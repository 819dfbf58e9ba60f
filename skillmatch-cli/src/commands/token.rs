//! Bearer token issuance
//!
//! Prints a signed token for an existing user profile id. The server only
//! checks the signature, issuer and expiry; it does not look the user up.

use anyhow::{Context, Result};
use clap::Parser;

use skillmatch_server::http::auth::DEFAULT_TOKEN_TTL_SECS;

use super::JwtArgs;

/// Arguments for the token command
#[derive(Parser, Debug)]
pub struct TokenArgs {
    /// User profile id carried in the token
    #[arg(long)]
    pub user_id: i32,

    /// Username (`sub` claim); defaults to `user<ID>`
    #[arg(long)]
    pub username: Option<String>,

    /// Lifetime in seconds
    #[arg(long, default_value_t = DEFAULT_TOKEN_TTL_SECS)]
    pub ttl: i64,

    #[command(flatten)]
    pub jwt: JwtArgs,
}

pub fn run_token(args: TokenArgs) -> Result<()> {
    let jwt = args.jwt.service()?;
    let username = args
        .username
        .unwrap_or_else(|| format!("user{}", args.user_id));

    let token = jwt
        .issue(args.user_id, &username, args.ttl)
        .context("Failed to sign token")?;

    tracing::debug!(user_id = args.user_id, ttl = args.ttl, "issued token");
    println!("{token}");
    Ok(())
}
