//! Error types for the CLI

use thiserror::Error;

use crate::config::ConfigError;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// None of the requested types could be generated
    #[error("Nothing to generate: {0}")]
    NothingGenerated(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}
