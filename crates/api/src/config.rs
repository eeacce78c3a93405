use std::env;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::time::Duration;

/// Configuration errors surfaced at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host to bind to.
    pub host: String,
    /// Server port to bind to.
    pub port: u16,
    /// PostgreSQL connection URL. Without it content lives in memory.
    pub database_url: Option<String>,
    /// Maximum database connections in the pool.
    pub db_max_connections: u32,
    /// Minimum database connections in the pool.
    pub db_min_connections: u32,
    /// JWT signing secret for admin tokens.
    pub jwt_secret: String,
    /// Event bus channel capacity.
    pub event_bus_capacity: NonZeroUsize,
    /// How long served content stays cached.
    pub content_cache_ttl: Duration,
    /// Log level (e.g., "info", "debug", "trace").
    pub log_level: String,
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T: FromStr>(
    name: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    let value = var_or(name, default);
    value.parse().map_err(|_| ConfigError::Invalid {
        name,
        expected,
        value,
    })
}

impl AppConfig {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: var_or("HOST", "0.0.0.0"),
            port: parse_var("PORT", "3030", "u16")?,
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", "20", "u32")?,
            db_min_connections: parse_var("DB_MIN_CONNECTIONS", "5", "u32")?,
            jwt_secret: var_or("JWT_SECRET", "dev-secret-change-me-in-production"),
            event_bus_capacity: parse_var("EVENT_BUS_CAPACITY", "1024", "positive integer")?,
            content_cache_ttl: Duration::from_secs(parse_var(
                "CONTENT_CACHE_TTL_SECS",
                "300",
                "number of seconds",
            )?),
            log_level: var_or("LOG_LEVEL", "info"),
        })
    }

    /// Build the socket address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
impl AppConfig {
    pub fn for_tests() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: None,
            db_max_connections: 1,
            db_min_connections: 1,
            jwt_secret: "test-secret".to_string(),
            event_bus_capacity: NonZeroUsize::new(16).unwrap(),
            content_cache_ttl: site_content_core::CONTENT_CACHE_TTL,
            log_level: "debug".to_string(),
        }
    }
}
