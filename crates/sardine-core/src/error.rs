//! Error types for the fortune oracle.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Configuration errors that prevent an oracle session from starting.
///
/// Interaction races (drawing twice, opening a second tin) are not errors;
/// they surface as [`crate::Outcome::Ignored`].
#[derive(Debug, Error)]
pub enum OracleError {
    /// The fortune list has no entries.
    #[error("fortune list is empty")]
    EmptyFortuneList,

    /// A fortune entry contains only whitespace.
    #[error("fortune at index {0} is blank")]
    BlankFortune(usize),

    /// The fortune file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The fortune file is not valid JSON of the expected shape.
    #[error("invalid fortune file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A tin or fish index read from data is out of range.
    #[error("{kind} index {index} is out of range")]
    OutOfRange {
        /// "tin" or "fish".
        kind: &'static str,
        /// The rejected 0-based index.
        index: usize,
    },
}
