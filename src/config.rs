use crate::error::config::ConfigError;

/// Default minimum population per bulk entity pool.
pub const DEFAULT_MINIMUM_POOL_SIZE: usize = 10;

/// Default TTL for the aggregated data-pools snapshot (1 hour).
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 3600;

/// Default cron expression for the background growth loop (every 30 seconds).
pub const DEFAULT_GROWTH_CRON: &str = "*/30 * * * * *";

pub struct Config {
    /// Base URL of the remote FlashFood backend, e.g. `http://localhost:1310`.
    pub backend_url: String,
    pub valkey_url: String,
    /// Address the HTTP surface listens on, e.g. `0.0.0.0:8080`.
    pub listen_address: String,
    pub minimum_pool_size: usize,
    pub cache_ttl_seconds: u64,
    pub growth_cron: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            backend_url: require("BACKEND_URL")?,
            valkey_url: require("VALKEY_URL")?,
            listen_address: std::env::var("LISTEN_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            minimum_pool_size: parse_or("MINIMUM_POOL_SIZE", DEFAULT_MINIMUM_POOL_SIZE)?,
            cache_ttl_seconds: parse_or("CACHE_TTL_SECONDS", DEFAULT_CACHE_TTL_SECONDS)?,
            growth_cron: std::env::var("GROWTH_CRON")
                .unwrap_or_else(|_| DEFAULT_GROWTH_CRON.to_string()),
        })
    }
}

fn require(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn parse_or<T: std::str::FromStr>(var: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(raw) => raw.parse().map_err(|e: T::Err| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
