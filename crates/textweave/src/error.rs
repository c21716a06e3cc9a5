//! Error types for textweave.
//!
//! The reconstruction core is deliberately infallible: every input shape
//! (empty, single detection, all-low-confidence, ragged columns) produces a
//! structurally valid result rather than an error, because OCR input is
//! inherently noisy and layout reconstruction should not conflate recognition
//! error with layout ambiguity. The only fallible surface in this crate is
//! configuration validation.
use thiserror::Error;

/// Result type alias using `LayoutError`.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Error type for all textweave operations.
#[derive(Debug, Clone, Error)]
pub enum LayoutError {
    /// A clustering parameter was out of range (e.g. a confidence threshold
    /// outside `[0, 1]` or a negative vertical threshold).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl LayoutError {
    /// Create an `InvalidConfiguration` error with the given message.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}
