//! Error types for the pipe driver.

use std::io;

/// Error type for driver configuration and streaming failures.
///
/// The chip engines themselves are total; everything that can go wrong
/// lives out here in the driver.
#[derive(thiserror::Error, Debug)]
pub enum PipeError {
    /// Bad command-line argument or register configuration
    #[error("{0}")]
    Config(String),

    /// Stream read/write failure
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<String> for PipeError {
    fn from(msg: String) -> Self {
        PipeError::Config(msg)
    }
}

impl From<&str> for PipeError {
    fn from(msg: &str) -> Self {
        PipeError::Config(msg.to_string())
    }
}

/// Result type for driver operations
pub type Result<T> = std::result::Result<T, PipeError>;
