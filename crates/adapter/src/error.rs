//! Error types for the MCP adapter.

use mcp_http_tools::HttpToolsError;
use thiserror::Error;

/// Main error type for the adapter process.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// Configuration errors (invalid flags, unusable transport options)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Startup errors (logging or listener setup failed)
    #[error("Startup error: {0}")]
    Startup(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<HttpToolsError> for AdapterError {
    fn from(e: HttpToolsError) -> Self {
        match e {
            HttpToolsError::Config(s) => Self::Config(s),
            other => Self::Startup(other.to_string()),
        }
    }
}

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, AdapterError>;
