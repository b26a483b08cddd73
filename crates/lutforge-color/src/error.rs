//! Error types for log format lookup and LUT synthesis.

use thiserror::Error;

/// Color pipeline error.
#[derive(Debug, Error)]
pub enum ColorError {
    /// The requested log format name is not in the registry.
    #[error("unknown log format: {name}; available: {available}")]
    UnknownFormat {
        /// The name that failed to resolve.
        name: String,
        /// Comma-separated canonical names of the registry.
        available: String,
    },

    /// The requested adaptation method name is not recognized.
    #[error("unknown chromatic adaptation method: {0}")]
    UnknownAdaptation(String),

    /// LUT operation failed.
    #[error("LUT error: {0}")]
    Lut(#[from] lutforge_lut::LutError),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
