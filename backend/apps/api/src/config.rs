//! Server Configuration
//!
//! Read from the process environment (after `.env` has been loaded).

use anyhow::Context;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_DATABASE_URL: &str = "sqlite://app.db";
const DEFAULT_PORT: u16 = 5555;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:4000,http://127.0.0.1:4000";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Connection string of the store
    pub database_url: String,
    pub max_connections: u32,
    pub host: IpAddr,
    pub port: u16,
    /// CORS allow-list
    pub frontend_origins: Vec<String>,
    /// Insert sample heroes and powers into an empty database
    pub seed_database: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            frontend_origins: split_origins(DEFAULT_FRONTEND_ORIGINS),
            seed_database: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let database_url = lookup("DATABASE_URL")
            .or_else(|| lookup("DB_URI"))
            .unwrap_or(defaults.database_url);

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw}"))?,
            None => defaults.max_connections,
        };

        let host = match lookup("HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("HOST is not an IP address: {raw}"))?,
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port: {raw}"))?,
            None => defaults.port,
        };

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .map(|raw| split_origins(&raw))
            .unwrap_or(defaults.frontend_origins);

        let seed_database = lookup("SEED_DATABASE")
            .map(|raw| matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.seed_database);

        Ok(Self {
            database_url,
            max_connections,
            host,
            port,
            frontend_origins,
            seed_database,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
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
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.database_url, "sqlite://app.db");
        assert_eq!(config.port, 5555);
        assert!(!config.seed_database);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:5555");
    }

    #[test]
    fn test_db_uri_fallback() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("DB_URI", "sqlite://legacy.db")])).unwrap();
        assert_eq!(config.database_url, "sqlite://legacy.db");

        let config = ServerConfig::from_lookup(lookup_from(&[
            ("DB_URI", "sqlite://legacy.db"),
            ("DATABASE_URL", "sqlite://primary.db"),
        ]))
        .unwrap();
        assert_eq!(config.database_url, "sqlite://primary.db");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
            ("FRONTEND_ORIGINS", "http://a.test, ,http://b.test"),
            ("SEED_DATABASE", "TRUE"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.frontend_origins, vec!["http://a.test", "http://b.test"]);
        assert!(config.seed_database);
    }

    #[test]
    fn test_invalid_numbers_are_errors() {
        assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).is_err());
        assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
        assert!(
            ServerConfig::from_lookup(lookup_from(&[("DATABASE_MAX_CONNECTIONS", "-1")])).is_err()
        );
    }
}
