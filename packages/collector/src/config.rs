//! Environment-based configuration.

use anyhow::{Context, Result};

/// Collector configuration, loaded once at startup.
pub struct Config {
    /// Postgres connection URL for the product store
    pub database_url: String,

    /// Optional user-agent override for outgoing requests
    pub user_agent: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            user_agent: std::env::var("COLLECTOR_USER_AGENT").ok(),
        })
    }
}
