//! Kata Core: service configuration and shared error types.

pub mod config;
pub mod error;

pub use config::{ExtractDefaults, ServiceConfig, API_PREFIX, SERVICE_NAME, SERVICE_VERSION};
pub use error::{Error, Result};
