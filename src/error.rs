//! Error types for phingrun
//!
//! Each variant maps to one failure cause so callers can react to the
//! cause instead of collapsing everything into one message.

use thiserror::Error;

/// Main error type for phing operations
#[derive(Error, Debug)]
pub enum PhingError {
    /// No usable phing executable on the search path
    #[error("'{binary}' does not appear to be installed on this system")]
    ToolNotFound { binary: String },

    /// Build-definition file absent from the project root
    #[error("No build file found: {path}")]
    BuildFileMissing { path: String },

    /// Failed to spawn the phing process
    #[error("Failed to spawn command: {command}")]
    SpawnFailed { command: String, error: String },

    /// Listing output did not match the expected two-section shape
    #[error("Unrecognized target listing output")]
    ParseMismatch,

    /// Selection index does not point into the discovered target list
    #[error("Selection index {index} out of range (have {len} targets)")]
    TargetOutOfRange { index: usize, len: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for phing operations
pub type PhingResult<T> = Result<T, PhingError>;
