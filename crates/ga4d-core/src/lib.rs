//! Core types and configuration for the GA4 property discovery tools.
//!
//! Holds the environment-driven [`AppConfig`], the canonical
//! [`DiscoveredPropertyRow`] produced by the discovery pipeline, and the
//! keyword [`categorize`] classifier shared by every output sink.

use thiserror::Error;

mod app_config;
mod config;
mod property;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use property::{
    categorize, Category, DiscoveredPropertyRow, DEFAULT_CURRENCY_CODE, DEFAULT_TIME_ZONE,
};

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
