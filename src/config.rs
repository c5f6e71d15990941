use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::domain::order_summary::PricingPolicy;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PoolConfig {
    pub max_size: u32,
    pub connection_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_size: 10,
            connection_timeout: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub pool: PoolConfig,
    pub pricing: PricingPolicy,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "PORT", 8080u16)?;

        let defaults = PoolConfig::default();
        let max_size = parse_or(&lookup, "DB_POOL_MAX_SIZE", defaults.max_size)?;
        if max_size == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_POOL_MAX_SIZE",
                value: "0".to_string(),
            });
        }
        let timeout_secs = parse_or(
            &lookup,
            "DB_CONNECTION_TIMEOUT_SECS",
            defaults.connection_timeout.as_secs(),
        )?;

        let allow_negative_lines = parse_or(&lookup, "PRICING_ALLOW_NEGATIVE_LINES", false)?;

        Ok(Self {
            database_url,
            host,
            port,
            pool: PoolConfig {
                max_size,
                connection_timeout: Duration::from_secs(timeout_secs),
            },
            pricing: PricingPolicy {
                allow_negative_lines,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db")]))
            .expect("config should parse");

        assert_eq!(config.database_url, "postgres://db");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.pool, PoolConfig::default());
        assert!(!config.pricing.allow_negative_lines);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = AppConfig::from_lookup(lookup_from(&[("PORT", "9000")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
        assert_eq!(err.to_string(), "DATABASE_URL must be set");
    }

    #[test]
    fn overrides_are_parsed() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("DB_POOL_MAX_SIZE", "4"),
            ("DB_CONNECTION_TIMEOUT_SECS", "2"),
            ("PRICING_ALLOW_NEGATIVE_LINES", "true"),
        ]))
        .expect("config should parse");

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.pool.max_size, 4);
        assert_eq!(config.pool.connection_timeout, Duration::from_secs(2));
        assert!(config.pricing.allow_negative_lines);
    }

    #[test]
    fn invalid_port_is_reported_with_its_value() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn zero_pool_size_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db"),
            ("DB_POOL_MAX_SIZE", "0"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { key: "DB_POOL_MAX_SIZE", .. }));
    }
}
