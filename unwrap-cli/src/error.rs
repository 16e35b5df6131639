//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Encoding label not recognized
    UnknownEncoding(String),
    /// Input bytes are not valid in the chosen encoding
    MalformedInput {
        /// Input file path
        path: String,
        /// Encoding name
        encoding: String,
    },
    /// Output text cannot be represented in the chosen encoding
    UnmappableOutput(String),
    /// Configuration error
    ConfigError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::UnknownEncoding(label) => write!(f, "Unknown encoding: {label}"),
            CliError::MalformedInput { path, encoding } => {
                write!(f, "Malformed {encoding} input in {path}")
            }
            CliError::UnmappableOutput(encoding) => {
                write!(f, "Output cannot be represented in {encoding}")
            }
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
