//! Connection settings and failure policy for the connectivity check
//!
//! Settings are read once at startup from environment variables:
//! - `DB_HOST` (default: localhost)
//! - `DB_PORT` (default: 5432)
//! - `DB_NAME` (default: mydatabase)
//! - `DB_USER` (default: myuser)
//! - `DB_PASS` (default: mypassword)

use std::fmt;
use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_NAME: &str = "mydatabase";
pub const DEFAULT_DB_USER: &str = "myuser";
pub const DEFAULT_DB_PASS: &str = "mypassword";

/// PostgreSQL connection settings
#[derive(Clone, PartialEq, Eq)]
pub struct PgSettings {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl PgSettings {
    /// Create settings from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create settings from an arbitrary key lookup.
    ///
    /// Unset keys take their default. An unparseable `DB_PORT` also falls
    /// back to the default port, with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("DB_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid DB_PORT, using default");
                defaults.port
            }),
            None => defaults.port,
        };

        Self {
            host: lookup("DB_HOST").unwrap_or(defaults.host),
            port,
            database: lookup("DB_NAME").unwrap_or(defaults.database),
            user: lookup("DB_USER").unwrap_or(defaults.user),
            password: lookup("DB_PASS").unwrap_or(defaults.password),
        }
    }

    /// sqlx connect options for these settings
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
    }
}

impl Default for PgSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_DB_HOST.to_string(),
            port: DEFAULT_DB_PORT,
            database: DEFAULT_DB_NAME.to_string(),
            user: DEFAULT_DB_USER.to_string(),
            password: DEFAULT_DB_PASS.to_string(),
        }
    }
}

impl fmt::Debug for PgSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// How a failed connectivity check maps to an HTTP status.
///
/// The body text is the same under both policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureStatus {
    /// Always 200, error details only in the body
    #[default]
    Legacy,
    /// 503 when the server is unreachable, 500 when the query fails
    Strict,
}

impl FromStr for FailureStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "invalid failure status '{}' (expected 'legacy' or 'strict')",
                other
            )),
        }
    }
}

impl fmt::Display for FailureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => f.write_str("legacy"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let settings = PgSettings::from_lookup(|_| None);
        assert_eq!(settings, PgSettings::default());
        assert_eq!(settings.host, "localhost");
        assert_eq!(settings.port, 5432);
        assert_eq!(settings.database, "mydatabase");
        assert_eq!(settings.user, "myuser");
        assert_eq!(settings.password, "mypassword");
    }

    #[test]
    fn env_values_override_defaults() {
        let settings = PgSettings::from_lookup(lookup_from(&[
            ("DB_HOST", "db"),
            ("DB_PORT", "6543"),
            ("DB_NAME", "blog"),
            ("DB_USER", "admin"),
            ("DB_PASS", "hunter2"),
        ]));

        assert_eq!(settings.host, "db");
        assert_eq!(settings.port, 6543);
        assert_eq!(settings.database, "blog");
        assert_eq!(settings.user, "admin");
        assert_eq!(settings.password, "hunter2");
    }

    #[test]
    fn bad_port_falls_back() {
        let settings = PgSettings::from_lookup(lookup_from(&[("DB_PORT", "not-a-port")]));
        assert_eq!(settings.port, DEFAULT_DB_PORT);
    }

    #[test]
    fn debug_redacts_password() {
        let rendered = format!("{:?}", PgSettings::default());
        assert!(!rendered.contains("mypassword"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn failure_status_parses() {
        assert_eq!("legacy".parse::<FailureStatus>(), Ok(FailureStatus::Legacy));
        assert_eq!("STRICT".parse::<FailureStatus>(), Ok(FailureStatus::Strict));
        assert!("loud".parse::<FailureStatus>().is_err());
        assert_eq!(FailureStatus::default(), FailureStatus::Legacy);
        assert_eq!(FailureStatus::Strict.to_string(), "strict");
    }
}
