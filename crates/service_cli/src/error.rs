//! Error types for the CLI.

use thiserror::Error;

/// CLI error.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid command-line or configuration value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used by every command.
pub type Result<T> = std::result::Result<T, CliError>;
