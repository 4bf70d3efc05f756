//! Server configuration loaded from the environment.
//!
//! Every setting has a default. Unset variables fall back to it with an
//! `info` event; set but unparseable values are an error.

use std::{env, fmt::Display, str::FromStr};

use apex_db::DbConfig;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration for the HTTP server and its database connection.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host or IP address to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
    pub db: DbConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
            db: DbConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from `APEX_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            host: load(&lookup, "APEX_HOST", defaults.host)?,
            port: load(&lookup, "APEX_PORT", defaults.port)?,
            db: DbConfig {
                url: load(&lookup, "APEX_DB_URL", defaults.db.url)?,
                namespace: load(&lookup, "APEX_DB_NAMESPACE", defaults.db.namespace)?,
                database: load(&lookup, "APEX_DB_DATABASE", defaults.db.database)?,
                username: load(&lookup, "APEX_DB_USERNAME", defaults.db.username)?,
                password: load(&lookup, "APEX_DB_PASSWORD", defaults.db.password)?,
            },
        })
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn load<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value,
            reason: e.to_string(),
        }),
        None => {
            // Never echo the password default.
            if key.ends_with("PASSWORD") {
                info!("{key} not set, using default");
            } else {
                info!("{key} not set, using default: {default}");
            }
            Ok(default)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn falls_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.db.url, "127.0.0.1:8000");
        assert_eq!(config.db.namespace, "apex");
        assert_eq!(config.db.database, "main");
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn reads_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("APEX_HOST", "127.0.0.1"),
            ("APEX_PORT", " 9090 "),
            ("APEX_DB_URL", "db.internal:8000"),
            ("APEX_DB_NAMESPACE", "agency"),
            ("APEX_DB_PASSWORD", "s3cret"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:9090");
        assert_eq!(config.db.url, "db.internal:8000");
        assert_eq!(config.db.namespace, "agency");
        assert_eq!(config.db.database, "main");
        assert_eq!(config.db.password, "s3cret");
    }

    #[test]
    fn rejects_unparseable_port() {
        let err = ServerConfig::from_lookup(lookup_from(&[("APEX_PORT", "eighty")])).unwrap_err();

        let ConfigError::Invalid { key, value, .. } = err;
        assert_eq!(key, "APEX_PORT");
        assert_eq!(value, "eighty");
    }
}
