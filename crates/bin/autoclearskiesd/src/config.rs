//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `autoclearskies.toml` in the working directory (or the path in
//! `AUTOCLEARSKIES_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use serde::Deserialize;

use autoclearskies_adapter_storage_postgres_sqlx::Config as DatabaseConfig;

const DEFAULT_CONFIG_PATH: &str = "autoclearskies.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// `PostgreSQL` settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from the config file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, if an
    /// override holds an unparseable number, or if validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("AUTOCLEARSKIES_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("AUTOCLEARSKIES_HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("AUTOCLEARSKIES_PORT") {
            self.server.port = parse_number("AUTOCLEARSKIES_PORT", &val)?;
        }
        if let Some(val) = lookup("AUTOCLEARSKIES_DB_HOST") {
            self.database.host = val;
        }
        if let Some(val) = lookup("AUTOCLEARSKIES_DB_PORT") {
            self.database.port = parse_number("AUTOCLEARSKIES_DB_PORT", &val)?;
        }
        if let Some(val) = lookup("AUTOCLEARSKIES_DB_USER") {
            self.database.user = val;
        }
        if let Some(val) = lookup("AUTOCLEARSKIES_DB_PASS") {
            self.database.password = val;
        }
        if let Some(val) = lookup("AUTOCLEARSKIES_DB_NAME") {
            self.database.database = val;
        }
        if let Some(val) = lookup("AUTOCLEARSKIES_DB_MAX_CONNECTIONS") {
            self.database.max_connections =
                parse_number("AUTOCLEARSKIES_DB_MAX_CONNECTIONS", &val)?;
        }
        if let Some(val) = lookup("AUTOCLEARSKIES_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.database.port == 0 {
            return Err(ConfigError::Validation(
                "database port must be non-zero".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "database pool needs at least one connection".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: value.to_string(),
    })
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "autoclearskiesd=info,autoclearskies=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// An environment override is not a valid number.
    #[error("{var} must be a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
