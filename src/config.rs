//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export ENV="local"
//! export STORAGE_PATH="./storage/storage.db"
//! export HTTP_SERVER_ADDRESS="localhost:8080"
//! export HTTP_SERVER_USER="admin"
//! export HTTP_SERVER_PASSWORD="secret"
//! ```
//!
//! ## Required Variables
//!
//! - `STORAGE_PATH` - SQLite database file (created if missing)
//! - `HTTP_SERVER_USER` / `HTTP_SERVER_PASSWORD` - Basic auth credentials for mutating routes
//!
//! ## Optional Variables
//!
//! - `ENV` - `local`, `dev` or `prod` (default: `local`)
//! - `HTTP_SERVER_ADDRESS` - Bind address (default: `localhost:8080`)
//! - `HTTP_SERVER_TIMEOUT` - Read/write timeout in seconds (default: 4)
//! - `HTTP_SERVER_IDLE_TIMEOUT` - Idle connection timeout in seconds (default: 60)
//! - `RUST_LOG` - Overrides the log filter derived from `ENV`

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Deployment environment; selects log format and verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Dev,
    Prod,
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "local" => Ok(Self::Local),
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            other => anyhow::bail!("ENV must be 'local', 'dev' or 'prod', got '{}'", other),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Local => "local",
            Self::Dev => "dev",
            Self::Prod => "prod",
        };
        f.write_str(name)
    }
}

/// HTTP listener settings and basic-auth credentials.
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub address: String,
    /// Applies to reading the request body and to producing the response.
    pub timeout: Duration,
    /// Connections without read or write progress for this long are closed.
    pub idle_timeout: Duration,
    pub user: String,
    pub password: String,
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub env: Environment,
    pub storage_path: String,
    pub http_server: HttpServerConfig,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let env = env::var("ENV")
            .unwrap_or_else(|_| "local".to_string())
            .parse()?;

        let storage_path = env::var("STORAGE_PATH").context("STORAGE_PATH must be set")?;

        let address =
            env::var("HTTP_SERVER_ADDRESS").unwrap_or_else(|_| "localhost:8080".to_string());

        let timeout = load_seconds("HTTP_SERVER_TIMEOUT", 4)?;
        let idle_timeout = load_seconds("HTTP_SERVER_IDLE_TIMEOUT", 60)?;

        let user = env::var("HTTP_SERVER_USER").context("HTTP_SERVER_USER must be set")?;
        let password =
            env::var("HTTP_SERVER_PASSWORD").context("HTTP_SERVER_PASSWORD must be set")?;

        Ok(Self {
            env,
            storage_path,
            http_server: HttpServerConfig {
                address,
                timeout,
                idle_timeout,
                user,
                password,
            },
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `storage_path`, `user` or `password` is empty
    /// - `address` is not in `host:port` form
    /// - a timeout is zero
    pub fn validate(&self) -> Result<()> {
        if self.storage_path.is_empty() {
            anyhow::bail!("STORAGE_PATH must not be empty");
        }

        if !self.http_server.address.contains(':') {
            anyhow::bail!(
                "HTTP_SERVER_ADDRESS must be in format 'host:port', got '{}'",
                self.http_server.address
            );
        }

        if self.http_server.timeout.is_zero() {
            anyhow::bail!("HTTP_SERVER_TIMEOUT must be greater than 0");
        }

        if self.http_server.idle_timeout.is_zero() {
            anyhow::bail!("HTTP_SERVER_IDLE_TIMEOUT must be greater than 0");
        }

        if self.http_server.user.is_empty() || self.http_server.password.is_empty() {
            anyhow::bail!("HTTP_SERVER_USER and HTTP_SERVER_PASSWORD must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary (without the password).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.env);
        tracing::info!("  Storage: {}", self.storage_path);
        tracing::info!("  Listen address: {}", self.http_server.address);
        tracing::info!("  Timeout: {}s", self.http_server.timeout.as_secs());
        tracing::info!("  Idle timeout: {}s", self.http_server.idle_timeout.as_secs());
        tracing::info!("  Basic auth user: {}", self.http_server.user);
    }
}

/// Reads a whole number of seconds, falling back to `default` when unset.
fn load_seconds(name: &str, default: u64) -> Result<Duration> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map(Duration::from_secs)
            .with_context(|| format!("{name} must be a whole number of seconds, got '{value}'")),
        Err(_) => Ok(Duration::from_secs(default)),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
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
