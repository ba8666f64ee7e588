//! Error types for token sequence operations.
//!
//! Indexed access is the only container operation that can fail; the
//! remaining variants belong to the configuration and output layers.

use thiserror::Error;

/// Result type alias for token sequence operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by `tokseq`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Index outside `[0, len)` on checked element access.
    #[error("index {index} out of range for sequence of length {len}")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Sequence length at the time of the access.
        len: usize,
    },

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// Output could not be written.
    #[error("I/O error: {message}")]
    Io {
        /// Kind of the underlying I/O failure.
        kind: std::io::ErrorKind,
        /// Description of the failure.
        message: String,
    },
}

impl Error {
    /// Returns `true` for the out-of-range access error.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Returns `true` when output failed because the reader went away.
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io { kind, .. } if *kind == std::io::ErrorKind::BrokenPipe)
    }

    /// Short machine-readable name of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => "out_of_range",
            Self::Config { .. } => "config",
            Self::Io { .. } => "io",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}
