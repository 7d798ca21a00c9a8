//! Server version probe for the connectivity check
//!
//! Each call opens a fresh connection, runs `SELECT version()`, and closes
//! the connection again. Nothing is pooled or reused between calls.

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;

use crate::config::PgSettings;

/// Why the version could not be read
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    /// Could not open a connection (auth, DNS, network, bad database name)
    #[error("{0}")]
    Connect(#[source] sqlx::Error),

    /// Connected, but the query failed or returned nothing usable
    #[error("{0}")]
    Query(#[source] sqlx::Error),
}

/// Source of the database server version string (testable)
#[async_trait]
pub trait VersionSource: Send + Sync {
    async fn server_version(&self) -> Result<String, VersionError>;
}

/// Version source that talks to PostgreSQL directly
#[derive(Debug, Clone)]
pub struct PgVersionSource {
    options: PgConnectOptions,
}

impl PgVersionSource {
    pub fn new(settings: &PgSettings) -> Self {
        Self {
            options: settings.connect_options(),
        }
    }
}

#[async_trait]
impl VersionSource for PgVersionSource {
    async fn server_version(&self) -> Result<String, VersionError> {
        let mut conn = PgConnection::connect_with(&self.options)
            .await
            .map_err(VersionError::Connect)?;

        let version = sqlx::query_scalar::<_, String>("SELECT version()")
            .fetch_one(&mut conn)
            .await;

        // Close regardless of the query outcome; close errors are only logged.
        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "Failed to close connection cleanly");
        }

        version.map_err(VersionError::Query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_settings() -> PgSettings {
        PgSettings {
            host: "127.0.0.1".to_string(),
            // Port 1 (tcpmux) is essentially never bound
            port: 1,
            ..PgSettings::default()
        }
    }

    #[tokio::test]
    async fn unreachable_server_is_connect_error() {
        let source = PgVersionSource::new(&unreachable_settings());
        let err = source.server_version().await.unwrap_err();
        assert!(matches!(err, VersionError::Connect(_)), "got {:?}", err);
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn reachable_server_reports_version() {
        let source = PgVersionSource::new(&PgSettings::from_env());
        let version = source.server_version().await.expect("version query failed");
        assert!(version.starts_with("PostgreSQL"), "got {}", version);
    }
}
