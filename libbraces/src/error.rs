//! Error types for balance checking.

use thiserror::Error;

/// Result type for balance-check operations.
pub type Result<T> = std::result::Result<T, CheckError>;

/// Error type for balance checking.
///
/// The two structural variants end the scan immediately at the offending
/// character. Read failures get their own variant so callers can tell an
/// unreadable file apart from an unbalanced one.
#[derive(Error, Debug)]
pub enum CheckError {
    /// A closing bracket arrived with nothing open.
    #[error("Unexpected {ch} at line {line} col {col}")]
    UnexpectedClosing {
        ch: char,
        /// 1-based line of the closing bracket.
        line: usize,
        /// 1-based column of the closing bracket.
        col: usize,
    },

    /// A closing bracket did not pair with the most recent opener.
    // sic: "fo" - callers match this wording verbatim.
    #[error("Mismatched {ch} at line {line} col {col}. Expected closing fo {open} from line {open_line}")]
    Mismatched {
        ch: char,
        /// 1-based line of the closing bracket.
        line: usize,
        /// 1-based column of the closing bracket.
        col: usize,
        /// The opener that was actually on top of the stack.
        open: char,
        /// 1-based line where that opener appeared.
        open_line: usize,
    },

    /// The target file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
