//! webstack CLI - runs the blog and database connectivity check services
//!
//! Each service is an independent process:
//! - `webstack blog`: post list, creation form and JSON API (needs DATABASE_URL)
//! - `webstack dbcheck`: reports the PostgreSQL server version (DB_* settings)

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "webstack",
    author,
    version,
    about = "Minimal PostgreSQL-backed web services: a blog and a connectivity check"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the blog server (list and create posts)
    Blog(commands::blog::BlogArgs),
    /// Run the database connectivity check server
    Dbcheck(commands::dbcheck::DbCheckArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; real environment variables always win
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Blog(args) => commands::run_blog(args).await?,
        Commands::Dbcheck(args) => commands::run_dbcheck(args).await?,
    }
    Ok(())
}
