//! Startup error taxonomy.
//!
//! Only startup can fail. Once the loop runs, a blocked move is a
//! [`crate::entities::MoveOutcome`] and an out-of-range tile query is simply
//! impassable.

use std::path::PathBuf;
use thiserror::Error;

/// Problems with the world configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// A texture the world needs could not be resolved
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset `{name}` not found at {path}")]
    Missing { name: String, path: PathBuf },

    #[error("asset `{name}` requested with empty size")]
    EmptySize { name: String },
}

/// Anything that aborts the program before the first frame
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error("failed to install log subscriber: {0}")]
    Logging(String),
}
