//! Error types for JSONL output.

use thiserror::Error;

/// Errors that can occur while writing JSONL files.
///
/// There is no retry policy. Any failure terminates the run and surfaces to
/// the caller as-is.
#[derive(Error, Debug)]
pub enum JsonlWriteError {
    /// IO error during directory creation or file write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
