//! Service configuration resolved from environment variables and defaults.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

pub const SERVICE_NAME: &str = "kata";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix shared by every versioned API route.
pub const API_PREFIX: &str = "/api/v1";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:3001";
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 10_000;
pub const DEFAULT_MAX_BATCH_SIZE: usize = 100;

/// Default tuning for combined keyword/phrase extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractDefaults {
    pub max_keywords: usize,
    pub max_bigrams: usize,
    pub min_length: usize,
}

impl Default for ExtractDefaults {
    fn default() -> Self {
        Self {
            max_keywords: 7,
            max_bigrams: 3,
            min_length: 3,
        }
    }
}

/// Top-level kata service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Interface the HTTP server binds to.
    pub host: String,
    /// HTTP server port.
    pub port: u16,
    /// Origins allowed by the CORS layer (`*` allows any).
    pub cors_origins: Vec<String>,
    /// Maximum ticket text length, in characters.
    pub max_text_length: usize,
    /// Maximum number of texts accepted by one batch request.
    pub max_batch_size: usize,
    pub extract: ExtractDefaults,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            cors_origins: split_origins(DEFAULT_CORS_ORIGINS),
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            extract: ExtractDefaults::default(),
        }
    }
}

impl ServiceConfig {
    /// Create configuration from process environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let cors_origins = lookup("CORS_ORIGINS")
            .map(|v| split_origins(&v))
            .unwrap_or(defaults.cors_origins);

        Ok(Self {
            host: lookup("API_HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "API_PORT", defaults.port)?,
            cors_origins,
            max_text_length: parse_var(&lookup, "MAX_TEXT_LENGTH", defaults.max_text_length)?,
            max_batch_size: parse_var(&lookup, "MAX_BATCH_SIZE", defaults.max_batch_size)?,
            extract: ExtractDefaults {
                max_keywords: parse_var(&lookup, "KATA_MAX_KEYWORDS", defaults.extract.max_keywords)?,
                max_bigrams: parse_var(&lookup, "KATA_MAX_BIGRAMS", defaults.extract.max_bigrams)?,
                min_length: parse_var(&lookup, "KATA_MIN_LENGTH", defaults.extract.min_length)?,
            },
        })
    }

    /// Check numeric ranges. An empty list means the configuration is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_text_length == 0 {
            errors.push(format!(
                "Invalid max text length: {} (must be > 0)",
                self.max_text_length
            ));
        }
        if self.max_batch_size == 0 {
            errors.push(format!(
                "Invalid max batch size: {} (must be > 0)",
                self.max_batch_size
            ));
        }
        if self.extract.max_keywords == 0 && self.extract.max_bigrams == 0 {
            errors.push("KATA_MAX_KEYWORDS and KATA_MAX_BIGRAMS cannot both be 0".to_string());
        }
        if self.cors_origins.is_empty() {
            errors.push("CORS_ORIGINS must list at least one origin".to_string());
        }

        errors
    }

    /// `host:port` string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => {
            let value = raw
                .trim()
                .parse::<T>()
                .map_err(|e| Error::Config(format!("{key}={raw:?}: {e}")))?;
            debug!("{} overridden from environment", key);
            Ok(value)
        }
        None => Ok(default),
    }
}
