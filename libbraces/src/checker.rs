//! Phase 3: Balance Checker
//!
//! The checker runs the code characters through a last-in-first-out stack of
//! open-bracket records. At every point the stack, top to bottom, mirrors the
//! nesting order of the brackets still open. A closing bracket either pops a
//! matching opener or ends the scan with a structural error; openers left on
//! the stack at end of input become the unclosed report.

use crate::error::{CheckError, Result};
use crate::lexer::CodeChar;
use crate::scanner::ScanLine;

/// Number of characters of the source line shown in an unclosed preview.
const PREVIEW_LEN: usize = 50;

/// Map a closing bracket to the opener it requires.
fn opening_for(ch: char) -> Option<char> {
    match ch {
        ')' => Some('('),
        '}' => Some('{'),
        ']' => Some('['),
        _ => None,
    }
}

fn is_opening(ch: char) -> bool {
    matches!(ch, '(' | '{' | '[')
}

/// A still-open bracket at some point during the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenBracket {
    pub ch: char,
    /// 1-based line where the opener appeared.
    pub line: usize,
    /// 1-based column where the opener appeared.
    pub col: usize,
}

/// An opener left on the stack at end of scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unclosed {
    pub ch: char,
    pub line: usize,
    pub col: usize,
    /// Trimmed prefix of the opener's source line.
    pub preview: String,
}

/// Outcome of a scan that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Balance {
    /// Every bracket closed in nesting order.
    Balanced,
    /// Openers left unclosed, most recently opened first.
    Unclosed(Vec<Unclosed>),
}

/// Run the balance check over the code characters.
///
/// Stops at the first unexpected or mismatched closing bracket; no further
/// characters are examined after an error.
pub fn check_balance(lines: &[ScanLine], chars: &[CodeChar]) -> Result<Balance> {
    let mut stack: Vec<OpenBracket> = Vec::new();

    for cc in chars {
        if is_opening(cc.ch) {
            stack.push(OpenBracket {
                ch: cc.ch,
                line: cc.line,
                col: cc.col,
            });
        } else if let Some(expected_open) = opening_for(cc.ch) {
            let top = match stack.pop() {
                Some(open) => open,
                None => {
                    return Err(CheckError::UnexpectedClosing {
                        ch: cc.ch,
                        line: cc.line,
                        col: cc.col,
                    });
                }
            };
            if top.ch != expected_open {
                return Err(CheckError::Mismatched {
                    ch: cc.ch,
                    line: cc.line,
                    col: cc.col,
                    open: top.ch,
                    open_line: top.line,
                });
            }
        }
    }

    if stack.is_empty() {
        return Ok(Balance::Balanced);
    }

    let unclosed = stack
        .iter()
        .rev()
        .map(|open| Unclosed {
            ch: open.ch,
            line: open.line,
            col: open.col,
            preview: line_preview(lines, open.line),
        })
        .collect();

    Ok(Balance::Unclosed(unclosed))
}

/// First `PREVIEW_LEN` characters of the 1-based line, whitespace trimmed.
fn line_preview(lines: &[ScanLine], line: usize) -> String {
    lines
        .get(line - 1)
        .map(|sl| sl.text.trim().chars().take(PREVIEW_LEN).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::code_chars;
    use crate::scanner::scan;

    fn run(source: &str) -> Result<Balance> {
        let lines = scan(source);
        let chars = code_chars(&lines);
        check_balance(&lines, &chars)
    }

    #[test]
    fn test_balanced_pairs() {
        assert_eq!(run("([{}])").unwrap(), Balance::Balanced);
    }

    #[test]
    fn test_unexpected_closing() {
        match run(")") {
            Err(CheckError::UnexpectedClosing { ch, line, col }) => {
                assert_eq!(ch, ')');
                assert_eq!(line, 1);
                assert_eq!(col, 1);
            }
            other => panic!("expected UnexpectedClosing, got {:?}", other),
        }
    }

    #[test]
    fn test_mismatched_records_opener() {
        match run("{\n)") {
            Err(CheckError::Mismatched {
                ch,
                line,
                col,
                open,
                open_line,
            }) => {
                assert_eq!(ch, ')');
                assert_eq!(line, 2);
                assert_eq!(col, 1);
                assert_eq!(open, '{');
                assert_eq!(open_line, 1);
            }
            other => panic!("expected Mismatched, got {:?}", other),
        }
    }

    #[test]
    fn test_unclosed_most_recent_first() {
        match run("{\n  (").unwrap() {
            Balance::Unclosed(entries) => {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries[0].ch, '(');
                assert_eq!(entries[0].line, 2);
                assert_eq!(entries[1].ch, '{');
                assert_eq!(entries[1].line, 1);
            }
            other => panic!("expected Unclosed, got {:?}", other),
        }
    }

    #[test]
    fn test_preview_trims_whitespace() {
        match run("   ( after   ").unwrap() {
            Balance::Unclosed(entries) => {
                assert_eq!(entries[0].preview, "( after");
            }
            other => panic!("expected Unclosed, got {:?}", other),
        }
    }

    #[test]
    fn test_preview_truncates_long_lines() {
        let source = format!("({}", "x".repeat(80));
        match run(&source).unwrap() {
            Balance::Unclosed(entries) => {
                assert_eq!(entries[0].preview.chars().count(), PREVIEW_LEN);
                assert!(entries[0].preview.starts_with("(xxx"));
            }
            other => panic!("expected Unclosed, got {:?}", other),
        }
    }
}
