use sqlx::postgres::PgConnectOptions;

use crate::error::{Result, RosterError};

/// Connection parameters for the students database, resolved once at
/// startup and passed into every component that needs them.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: String,
}

impl AppConfig {
    /// Build the configuration from the standard `PG*` environment
    /// variables, substituting a default for any that is absent or empty.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env_or("PGHOST", "localhost"),
            port: parse_port(std::env::var("PGPORT").ok())?,
            dbname: env_or("PGDATABASE", "postgres"),
            user: env_or("PGUSER", "postgres"),
            password: env_or("PGPASSWORD", "postgres"),
        })
    }

    /// Connect options with every field set explicitly, so sqlx's own
    /// environment probing never overrides the resolved values.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.dbname)
            .username(&self.user)
            .password(&self.password)
    }
}

fn env_or(name: &str, default: &str) -> String {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

/// An absent or empty port defaults to 5432; a present, non-numeric one is
/// a hard configuration error rather than a silent fallback.
fn parse_port(raw: Option<String>) -> Result<u16> {
    match raw {
        Some(value) if !value.trim().is_empty() => {
            value.trim().parse::<u16>().map_err(|_| {
                RosterError::Config(format!("PGPORT must be an integer, got {value:?}"))
            })
        }
        _ => Ok(5432),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_absent_or_empty() {
        assert_eq!(parse_port(None).unwrap(), 5432);
        assert_eq!(parse_port(Some(String::new())).unwrap(), 5432);
        assert_eq!(parse_port(Some("   ".to_string())).unwrap(), 5432);
    }

    #[test]
    fn port_parses_numeric_values() {
        assert_eq!(parse_port(Some("5433".to_string())).unwrap(), 5433);
        assert_eq!(parse_port(Some(" 6432 ".to_string())).unwrap(), 6432);
    }

    #[test]
    fn malformed_port_is_a_config_error() {
        let err = parse_port(Some("fivefourthreetwo".to_string())).unwrap_err();
        assert!(matches!(err, RosterError::Config(_)));
        assert!(err.to_string().contains("PGPORT"));
    }
}
