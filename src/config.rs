// src/config.rs
use anyhow::{Context, Result};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the remote job-board store.
///
/// `api_key` is the store's public service key, sent on every request next
/// to the per-caller bearer token.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl StoreConfig {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load configuration from the environment
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("HIREWIRE_STORE_URL")
            .context("HIREWIRE_STORE_URL environment variable not set")?;
        let api_key = std::env::var("HIREWIRE_STORE_KEY")
            .context("HIREWIRE_STORE_KEY environment variable not set")?;

        Ok(Self::new(&base_url, &api_key))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
