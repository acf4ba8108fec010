//! Storefront error types.

use std::path::PathBuf;

use fithaven_commerce::assistant::AssistantError;
use fithaven_commerce::CommerceError;
use thiserror::Error;

/// Errors raised while setting up or driving storefront sessions.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Config file could not be read or written.
    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to serialize TOML config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// Config parsed but holds values the storefront cannot use.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Global logger could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Commerce(#[from] CommerceError),

    #[error(transparent)]
    Assistant(#[from] AssistantError),
}

/// Result alias for storefront operations.
pub type Result<T> = std::result::Result<T, StorefrontError>;
