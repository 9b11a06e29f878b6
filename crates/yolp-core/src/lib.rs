//! Shared configuration for the YOLP client crates.

pub mod config;
pub mod settings;

pub use config::{load_settings, load_settings_from_env};
pub use settings::{YolpSettings, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
