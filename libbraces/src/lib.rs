//! Lexical bracket balance checker.
//!
//! A lightweight check that a source file's `()`, `{}`, and `[]` pairs are
//! properly nested and closed, with best-effort skipping of same-line string
//! literals and `//` line comments. It is a single forward scan, not a full
//! lexer: escaped quotes, multi-line strings, and block comments are not
//! understood.
//!
//! # Checking Pipeline
//!
//! The checker operates in three phases:
//!
//! 1. **Scanner**: Splits source text into scan lines, keeping original
//!    content for previews.
//!
//! 2. **Code Lexer**: Filters each line down to code characters, skipping
//!    string literals and line comments.
//!
//! 3. **Checker**: Matches brackets with a last-in-first-out stack of
//!    open-bracket records.

mod checker;
mod error;
mod lexer;
mod scanner;

pub use checker::{Balance, OpenBracket, Unclosed};
pub use error::{CheckError, Result};

use std::path::Path;

/// Check bracket balance in a source string.
///
/// # Example
///
/// ```
/// use libbraces::{check, Balance};
///
/// assert_eq!(check("fn main() {}").unwrap(), Balance::Balanced);
/// ```
pub fn check(source: &str) -> Result<Balance> {
    // Phase 1: Split source into lines
    let lines = scanner::scan(source);

    // Phase 2: Filter lines down to code characters
    let chars = lexer::code_chars(&lines);

    // Phase 3: Match brackets with a stack
    checker::check_balance(&lines, &chars)
}

/// Read a file and check its bracket balance.
///
/// Read failures surface as [`CheckError::Io`] carrying the path, distinct
/// from the structural bracket errors.
pub fn check_file(path: &Path) -> Result<Balance> {
    let source = std::fs::read_to_string(path).map_err(|e| CheckError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    check(&source)
}
