//! Result and error types for Revelar.

use thiserror::Error;

/// Result type for Revelar operations
pub type RevelarResult<T> = Result<T, RevelarError>;

/// Errors that can occur in Revelar
#[derive(Debug, Error)]
pub enum RevelarError {
    /// Animation engine is not loaded or reachable
    #[error("Animation engine unavailable: {message}")]
    EngineUnavailable {
        /// Error message
        message: String,
    },

    /// Animation engine rejected a submitted tween
    #[error("Animation engine rejected tween for {target}: {message}")]
    EngineError {
        /// Diagnostic label of the target element
        target: String,
        /// Error message
        message: String,
    },

    /// Element carries more than one directional modifier class
    #[error("Element {target} carries conflicting direction classes: {classes:?}")]
    ConflictingDirections {
        /// Diagnostic label of the target element
        target: String,
        /// The co-occurring modifier classes
        classes: Vec<String>,
    },

    /// Unknown easing curve name
    #[error("Unknown easing curve: {name}")]
    UnknownEase {
        /// The unrecognized curve name
        name: String,
    },

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
