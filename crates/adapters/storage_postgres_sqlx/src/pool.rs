//! `PostgreSQL` connection pool setup.

use std::time::Duration;

use serde::Deserialize;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

use crate::error::StorageError;

/// Connection settings for the measurement database.
///
/// Every field has a default, so a partial TOML section is enough.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server hostname or IP address.
    pub host: String,
    /// Server TCP port.
    pub port: u16,
    /// Role used to authenticate.
    pub user: String,
    /// Password for `user`.
    pub password: String,
    /// Database holding the `misc_measurements` table.
    pub database: String,
    /// Upper bound on simultaneously open connections.
    pub max_connections: u32,
    /// How long an operation waits for a free connection before failing.
    pub acquire_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "test".to_string(),
            database: "autoclearskiesdb".to_string(),
            max_connections: 5,
            acquire_timeout_secs: 30,
        }
    }
}

// Keeps the password out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .finish()
    }
}

impl Config {
    /// Connection options for a single session. TLS is disabled.
    #[must_use]
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
            .ssl_mode(PgSslMode::Disable)
    }

    /// Pool sizing: at most `max_connections` open at once, and callers wait
    /// up to `acquire_timeout_secs` for one to free up.
    #[must_use]
    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
    }

    /// Build a [`Database`] from this configuration.
    ///
    /// The pool connects lazily: no connection is opened until the first
    /// operation, so the service can start before the database is up.
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn build(self) -> Database {
        let pool = self
            .pool_options()
            .connect_lazy_with(self.connect_options());

        tracing::debug!(
            host = %self.host,
            port = self.port,
            database = %self.database,
            max_connections = self.max_connections,
            "postgres pool created"
        );

        Database { pool }
    }
}

/// Holds the `PostgreSQL` connection pool and provides access to it.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Wrap a pool built elsewhere, e.g. one connected from a URL in tests
    /// or tooling rather than from a [`Config`].
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round-trip a trivial query to confirm the server answers.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if no connection can be acquired or the
    /// query fails.
    pub async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close every pooled connection and wait for them to be released.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
