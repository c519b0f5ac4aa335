//! Scramble error types.

use scrambled_stream::StreamError;
use thiserror::Error;

/// Errors from scramble operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScrambleError {
    /// Cube size outside the accepted range.
    #[error("cube size must be at least 1, got {size}")]
    InvalidCubeSize {
        /// The rejected cube size.
        size: u32,
    },

    /// A draw over an empty range was requested.
    #[error("draw stream error: {0}")]
    Stream(#[from] StreamError),
}
