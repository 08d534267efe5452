//! Error types for the UI crate.

use thiserror::Error;

/// UI-specific errors.
#[derive(Debug, Error)]
pub enum UiError {
    /// The windowing/GUI backend failed.
    #[error("gui error: {0}")]
    Gui(String),
}

/// Result type for UI operations.
pub type Result<T> = std::result::Result<T, UiError>;
