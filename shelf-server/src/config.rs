//! Server configuration read from the environment

use anyhow::{bail, Context, Result};
use std::net::SocketAddr;

/// Address the server binds when `SHELF_BIND_ADDR` is unset
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Origins allowed when `SHELF_CORS_ORIGINS` is unset (local development)
pub const DEFAULT_CORS_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

/// Which origins may call the JSON API from a browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    Any,
    Origins(Vec<String>),
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self::Origins(DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,

    /// Start with the sample books instead of an empty library
    pub seed_samples: bool,

    pub cors: CorsPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            seed_samples: true,
            cors: CorsPolicy::default(),
        }
    }
}

impl ServerConfig {
    /// Read `SHELF_BIND_ADDR`, `SHELF_SEED_SAMPLES` and `SHELF_CORS_ORIGINS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment in production)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = lookup("SHELF_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .trim()
            .parse()
            .with_context(|| format!("SHELF_BIND_ADDR is not a socket address: {}", bind_addr))?;

        let seed_samples = match lookup("SHELF_SEED_SAMPLES") {
            Some(value) => parse_flag(&value)
                .with_context(|| format!("SHELF_SEED_SAMPLES is not a boolean: {}", value))?,
            None => true,
        };

        // Comma-separated list of origins, or "*" for any
        let cors = match lookup("SHELF_CORS_ORIGINS") {
            Some(origins) if origins.trim() == "*" => CorsPolicy::Any,
            Some(origins) => CorsPolicy::Origins(
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            None => CorsPolicy::default(),
        };

        Ok(Self {
            bind_addr,
            seed_samples,
            cors,
        })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => bail!("expected true or false"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("SHELF_BIND_ADDR", "0.0.0.0:8080"),
            ("SHELF_SEED_SAMPLES", "no"),
            ("SHELF_CORS_ORIGINS", "https://a.example, https://b.example,"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert!(!config.seed_samples);
        assert_eq!(
            config.cors,
            CorsPolicy::Origins(vec![
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ])
        );
    }

    #[test]
    fn test_any_origin() {
        let config = config_from(&[("SHELF_CORS_ORIGINS", "*")]).unwrap();
        assert_eq!(config.cors, CorsPolicy::Any);
    }

    #[test]
    fn test_invalid_values() {
        assert!(config_from(&[("SHELF_BIND_ADDR", "localhost")]).is_err());
        assert!(config_from(&[("SHELF_SEED_SAMPLES", "maybe")]).is_err());
    }
}
