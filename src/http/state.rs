use anyhow::Result;
use std::sync::Arc;

use crate::config::Config;
use crate::openai::build_http_client;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded service configuration
    pub config: Arc<Config>,

    /// Outbound HTTP client, built once with the configured request
    /// timeout and shared across turns
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let http = build_http_client(&config.openai)?;
        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }
}
