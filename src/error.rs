//! Error types for the analysis pipeline

use std::collections::TryReserveError;
use std::fmt;
use thiserror::Error;

/// Why a line of the word list was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
    /// A byte that is neither `A`..`Z` nor a newline
    InvalidByte(u8),
    /// A line with no letters, when empty lines are rejected
    EmptyLine,
    /// Content after the last newline, when trailing fragments are rejected
    MissingNewline,
}

impl fmt::Display for Malformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidByte(byte) if byte.is_ascii_graphic() => {
                write!(f, "invalid character '{}'", char::from(*byte))
            }
            Self::InvalidByte(byte) => write!(f, "invalid byte {byte:#04x}"),
            Self::EmptyLine => write!(f, "empty line"),
            Self::MissingNewline => write!(f, "missing final newline"),
        }
    }
}

/// Every way a run of the pipeline can fail
///
/// All variants are terminal: the first error stops the run and no
/// partial report is produced.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The input could not be opened or read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input contained a line that is not a valid word
    #[error("Malformed input in line {line}: {reason}")]
    MalformedInput { line: usize, reason: Malformation },

    /// A buffer could not grow
    #[error("Memory allocation failed: {0}")]
    AllocationFailure(#[from] TryReserveError),

    /// A word in the collection held a byte outside `A`..`Z`
    #[error("Internal error: word {index} is not a valid word")]
    InvalidWordEncountered { index: usize },

    /// A ranking held fewer than five distinct letters
    #[error("Internal error: ranking has only {found} distinct letters, need 5")]
    InsufficientAlphabet { found: usize },
}

impl AnalysisError {
    /// Exit status the command-line tool reports for this error
    ///
    /// Usage errors use 255, which the binary handles itself.
    #[must_use]
    pub const fn exit_status(&self) -> u8 {
        match self {
            Self::AllocationFailure(_) => 254,
            Self::Io(_) => 253,
            Self::MalformedInput { .. } => 252,
            Self::InvalidWordEncountered { .. } | Self::InsufficientAlphabet { .. } => 1,
        }
    }

    /// Whether this error indicates a bug rather than bad input
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::InvalidWordEncountered { .. } | Self::InsufficientAlphabet { .. }
        )
    }
}

/// A convenience `Result` type alias using the crate's `AnalysisError` type.
pub type Result<T> = std::result::Result<T, AnalysisError>;
