//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("appsettings.json file not found at: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to resolve executable directory: {0}")]
    Locate(std::io::Error),
    #[error("failed to read config file: {0}")]
    ReadFile(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to parse config: duplicate key '{0}'")]
    DuplicateKey(String),
}
