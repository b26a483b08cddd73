//! Error types for the operation layer.

use thiserror::Error;

/// Result type for operations.
pub type OpsResult<T> = Result<T, OpsError>;

/// Errors raised by the operation entry points.
///
/// These are the structural failures that abort a whole call. Per-item
/// batch failures never surface here; they become error-status
/// [`crate::ResultRecord`]s instead.
#[derive(Debug, Error)]
pub enum OpsError {
    /// Both inputs are directories; at most one side may vary per batch.
    #[error("both inputs cannot be directories; at most one may be")]
    InvalidInputCombination,

    /// A file path was given where a directory is required, or vice versa.
    #[error("invalid output target: {0}")]
    InvalidOutputTarget(String),

    /// Format registry or synthesis failure.
    #[error(transparent)]
    Color(#[from] lutforge_color::ColorError),

    /// LUT parsing or table failure.
    #[error(transparent)]
    Lut(#[from] lutforge_lut::LutError),

    /// Unreadable or unwritable path.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid directory scan pattern.
    #[error("glob pattern error: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Worker pool construction failed.
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
