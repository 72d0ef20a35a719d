//! Error types for the roster extraction library.
//!
//! The parser itself never fails on noisy real-world input — degradation is
//! expressed through the shape of [`crate::roster::ParsedRoster`]. Errors
//! exist only at the two contract boundaries: collaborator JSON that is
//! structurally malformed, and parser configuration that is out of range.

/// Result type alias for roster library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the library's contract boundaries.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Collaborator handed over input that violates the OCR result contract
    #[error("Malformed OCR input: {0}")]
    MalformedInput(String),

    /// Parser configuration rejected by validation
    #[error("Invalid parser configuration: {0}")]
    InvalidConfig(String),

    /// JSON error while decoding collaborator input
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
