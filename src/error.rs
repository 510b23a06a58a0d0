//! Error types for the one-shot renderer

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing the image
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure talking to the phrase API
    #[error("Network error: {0}")]
    Network(String),

    /// The phrase API answered with something we could not interpret
    #[error("Unexpected API response: {0}")]
    Response(String),

    /// Failed to create or write the output file
    #[error("I/O error: {0}")]
    Io(String),

    /// PNG serialization failed
    #[error("Encoding failed: {0}")]
    Encode(String),
}
