//! skillmatch CLI - run and operate the skillmatch API server
//!
//! Subcommands:
//! - `serve`: run the HTTP API against PostgreSQL
//! - `migrate`: create or update the schema
//! - `token`: mint a bearer token for a user (local testing, scripts)
//! - `completions`: shell completion scripts

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "skillmatch",
    author,
    version,
    about = "Skills catalog and user-skill matching API"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Apply database migrations and exit
    Migrate(commands::migrate::MigrateArgs),
    /// Issue a bearer token for a user profile id
    Token(commands::token::TokenArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Migrate(args) => commands::run_migrate(args).await,
        Commands::Token(args) => commands::run_token(args),
        Commands::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "skillmatch", &mut std::io::stdout());
            Ok(())
        }
    }
}
