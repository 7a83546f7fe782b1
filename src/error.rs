//! Error taxonomy shared by every module of the crate.
//!
//! All operations validate their preconditions up front and return one of
//! these variants before doing any work. Nothing is retried or recovered
//! internally.

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required sequence argument was absent.
    #[error("required sequence is absent")]
    NullInput,

    /// An operation that needs at least one element received none.
    #[error("sequence is empty")]
    EmptySequence,

    /// An index lies outside `[0, len)`.
    #[error("index {index} is out of range for a sequence of length {len}")]
    InvalidIndex { index: usize, len: usize },

    /// A fill sequence does not match the requested element count.
    #[error("expected {expected} fill values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A display pattern is neither 0..=3 characters long nor `"/0+"`.
    #[error("unsupported display pattern {pattern:?}")]
    UnsupportedPattern { pattern: String },

    /// An integer fold left the range of its accumulator type.
    #[error("integer overflow while folding sequence")]
    Overflow,

    /// Reserved for statistics that need more samples than were supplied.
    #[error("insufficient data set: {0}")]
    InsufficientDataSet(String),

    /// Reserved for mode computation over data without a repeated value.
    #[error("data set has no mode")]
    NoMode,

    /// A filesystem query failed for `path`.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The platform cannot provide the requested well-known location.
    #[error("{0} is not available on this platform")]
    Unavailable(&'static str),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Error {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
