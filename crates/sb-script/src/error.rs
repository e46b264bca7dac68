//! Error types for script loading.

use thiserror::Error;

/// Result type for script operations.
pub type ScriptResult<T> = Result<T, ScriptError>;

/// Errors that can occur while loading or resolving a script document.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// Failed to read a script file.
    #[error("failed to read script file: {0}")]
    Io(#[from] std::io::Error),

    /// Script document is not valid JSON.
    #[error("invalid script document: {0}")]
    Json(#[from] serde_json::Error),

    /// A portrait name in the document could not be resolved to a handle.
    #[error("portrait not found: {0}")]
    PortraitNotFound(String),
}
