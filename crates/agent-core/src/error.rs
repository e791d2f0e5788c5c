//! Error types shared across tool boundaries

use thiserror::Error;

/// Result type alias for agent-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for tool and agent operations
#[derive(Error, Debug)]
pub enum Error {
    /// Parameters handed to a tool did not match its input schema
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No tool registered under the requested name
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Tool processing failed
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

impl Error {
    /// Build an `InvalidInput` error from a serde failure
    pub fn invalid_params(err: &serde_json::Error) -> Self {
        Self::InvalidInput(format!("Invalid parameters: {err}"))
    }
}
