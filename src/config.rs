//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export DATABASE_URL="sqlite://urls.db"
//! export LISTEN="127.0.0.1:8080"
//! ```
//!
//! ## Optional Variables
//!
//! - `DATABASE_URL` - SQLite database (default: `sqlite://urls.db`, created if missing)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_ACQUIRE_TIMEOUT` - Seconds to wait for a pooled connection (default: 30)
//! - `REQUEST_TIMEOUT_SECONDS` - Per-request deadline (default: 10)
//! - `MAX_CREATE_ATTEMPTS` - Collision retries before giving up (default: 256)
//! - `RATE_LIMIT_ENABLED` - Per-IP rate limiting (default: `true`)
//! - `RATE_LIMIT_PERIOD_SECONDS` - Seconds between token refills (default: 2)
//! - `RATE_LIMIT_BURST` - Bucket size (default: 100)

use anyhow::Result;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::application::services::DEFAULT_MAX_CREATE_ATTEMPTS;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds.
    pub db_acquire_timeout: u64,
    /// Deadline applied to each HTTP request in seconds.
    pub request_timeout_seconds: u64,
    /// Bound on the collision retry loop of `create`.
    pub max_create_attempts: usize,
    pub rate_limit_enabled: bool,
    /// One request token is replenished every this many seconds, per client IP.
    pub rate_limit_period_seconds: u64,
    pub rate_limit_burst: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://urls.db".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            db_max_connections: 5,
            db_acquire_timeout: 30,
            request_timeout_seconds: 10,
            max_create_attempts: DEFAULT_MAX_CREATE_ATTEMPTS,
            rate_limit_enabled: true,
            rate_limit_period_seconds: 2,
            rate_limit_burst: 100,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable numeric variables fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Currently infallible; kept fallible so required variables can be added.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let database_url = env::var("DATABASE_URL").unwrap_or(defaults.database_url);
        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let rate_limit_enabled = env::var("RATE_LIMIT_ENABLED")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(defaults.rate_limit_enabled);

        Ok(Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", defaults.db_max_connections),
            db_acquire_timeout: parse_var("DB_ACQUIRE_TIMEOUT", defaults.db_acquire_timeout),
            request_timeout_seconds: parse_var(
                "REQUEST_TIMEOUT_SECONDS",
                defaults.request_timeout_seconds,
            ),
            max_create_attempts: parse_var("MAX_CREATE_ATTEMPTS", defaults.max_create_attempts),
            rate_limit_enabled,
            rate_limit_period_seconds: parse_var(
                "RATE_LIMIT_PERIOD_SECONDS",
                defaults.rate_limit_period_seconds,
            ),
            rate_limit_burst: parse_var("RATE_LIMIT_BURST", defaults.rate_limit_burst),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_acquire_timeout == 0 {
            anyhow::bail!("DB_ACQUIRE_TIMEOUT must be greater than 0");
        }
        if self.request_timeout_seconds == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.max_create_attempts == 0 || self.max_create_attempts > 10_000 {
            anyhow::bail!(
                "MAX_CREATE_ATTEMPTS must be between 1 and 10000, got {}",
                self.max_create_attempts
            );
        }

        if self.rate_limit_enabled
            && (self.rate_limit_period_seconds == 0 || self.rate_limit_burst == 0)
        {
            anyhow::bail!("RATE_LIMIT_PERIOD_SECONDS and RATE_LIMIT_BURST must be greater than 0");
        }

        Ok(())
    }

    pub fn db_acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.db_acquire_timeout)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Request timeout: {}s", self.request_timeout_seconds);
        tracing::info!("  Max create attempts: {}", self.max_create_attempts);

        if self.rate_limit_enabled {
            tracing::info!(
                "  Rate limit: 1 per {}s, burst {}",
                self.rate_limit_period_seconds,
                self.rate_limit_burst
            );
        } else {
            tracing::info!("  Rate limit: disabled");
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.database_url = "postgres://localhost/test".to_string();
        assert!(config.validate().is_err());

        config.database_url = "sqlite::memory:".to_string();
        assert!(config.validate().is_ok());

        config.max_create_attempts = 0;
        assert!(config.validate().is_err());

        config.max_create_attempts = 10_001;
        assert!(config.validate().is_err());

        config.max_create_attempts = 16;
        config.request_timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rate_limit_only_checked_when_enabled() {
        let mut config = Config {
            rate_limit_burst: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        config.rate_limit_enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DATABASE_URL", "sqlite://test.db");
            env::set_var("MAX_CREATE_ATTEMPTS", "32");
            env::set_var("RATE_LIMIT_ENABLED", "false");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.database_url, "sqlite://test.db");
        assert_eq!(config.max_create_attempts, 32);
        assert!(!config.rate_limit_enabled);

        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("MAX_CREATE_ATTEMPTS");
            env::remove_var("RATE_LIMIT_ENABLED");
        }
    }

    #[test]
    #[serial]
    fn test_unparsable_number_falls_back_to_default() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DB_MAX_CONNECTIONS", "many");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.db_max_connections, 5);

        unsafe {
            env::remove_var("DB_MAX_CONNECTIONS");
        }
    }
}
