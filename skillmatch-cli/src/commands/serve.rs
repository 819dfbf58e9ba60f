//! HTTP server command
//!
//! Runs the skillmatch API against PostgreSQL.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use skillmatch_server::db::{create_pool, migrations, PgSkillStore};
use skillmatch_server::{run_server, ServerConfig};

use super::{DatabaseArgs, JwtArgs};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "SKILLMATCH_BIND", default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Apply migrations before accepting requests
    #[arg(long)]
    pub migrate: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub jwt: JwtArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args.database.url()?;
    let jwt = args.jwt.service()?;

    tracing::info!("Starting skillmatch server on {}", args.bind);

    let pool = create_pool(database_url)
        .await
        .context("Failed to create database pool")?;

    if args.migrate {
        migrations::run(&pool)
            .await
            .context("Failed to apply migrations")?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(Arc::new(PgSkillStore::new(pool)), jwt, config)
        .await
        .context("Server error")?;

    Ok(())
}
