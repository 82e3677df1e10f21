//! Error types for the `sqlkit` command.

use std::path::PathBuf;

use sqlkit_core::SerializeError;

/// Errors that can occur while rendering a query document.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The input could not be read.
    #[error("Failed to read '{path}': {source}")]
    Read {
        /// Path of the input, `-` for stdin.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The input is not a JSON-encoded query.
    #[error("Invalid query document: {0}")]
    Decode(#[from] serde_json::Error),

    /// The query decoded but cannot be rendered.
    #[error("Invalid query: {0}")]
    Serialize(#[from] SerializeError),
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
