//! Shared application state.

use chrono::{DateTime, Utc};
use kata_core::ServiceConfig;
use kata_extract::ExtractOptions;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: ServiceConfig,
    /// Problems found by `ServiceConfig::validate` at startup.
    pub config_errors: Vec<String>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        let config_errors = config.validate();
        Self {
            config,
            config_errors,
            started_at: Utc::now(),
        }
    }

    /// Extraction options from configured defaults.
    pub fn default_options(&self) -> ExtractOptions {
        self.config.extract.into()
    }
}
