//! Database connectivity check command
//!
//! Connection settings come from DB_HOST, DB_PORT, DB_NAME, DB_USER and
//! DB_PASS (with defaults), and any flag given here overrides them.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use webstack_server::db::PgVersionSource;
use webstack_server::http::{self, DbCheckState, ServerConfig};
use webstack_server::{FailureStatus, PgSettings};

/// Arguments for the dbcheck command
#[derive(Parser, Debug)]
pub struct DbCheckArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database host (overrides DB_HOST)
    #[arg(long)]
    pub db_host: Option<String>,

    /// Database port (overrides DB_PORT)
    #[arg(long)]
    pub db_port: Option<u16>,

    /// Database name (overrides DB_NAME)
    #[arg(long)]
    pub db_name: Option<String>,

    /// Database user (overrides DB_USER)
    #[arg(long)]
    pub db_user: Option<String>,

    /// HTTP status for failed checks: legacy (always 200) or strict (503/500)
    #[arg(long, env = "DBCHECK_FAILURE_STATUS", default_value_t = FailureStatus::Legacy)]
    pub failure_status: FailureStatus,
}

impl DbCheckArgs {
    /// Environment settings with command-line overrides applied
    fn settings(&self) -> PgSettings {
        let mut settings = PgSettings::from_env();
        if let Some(host) = &self.db_host {
            settings.host = host.clone();
        }
        if let Some(port) = self.db_port {
            settings.port = port;
        }
        if let Some(name) = &self.db_name {
            settings.database = name.clone();
        }
        if let Some(user) = &self.db_user {
            settings.user = user.clone();
        }
        settings
    }
}

/// Run the connectivity check server (blocks until shutdown)
pub async fn run_dbcheck(args: DbCheckArgs) -> Result<()> {
    let settings = args.settings();
    tracing::info!(?settings, "Starting connectivity check on {}", args.bind);

    let state = DbCheckState::new(
        Arc::new(PgVersionSource::new(&settings)),
        args.failure_status,
    );
    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    http::run_dbcheck(state, config)
        .await
        .context("Server error")?;

    Ok(())
}
