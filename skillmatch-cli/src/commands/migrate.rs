//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use skillmatch_server::db::{create_pool, migrations};

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool(args.database.url()?)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to apply migrations")?;

    println!("Migrations applied");
    Ok(())
}
