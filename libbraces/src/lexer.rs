//! Phase 2: Code Lexer
//!
//! The code lexer walks each scan line character by character and yields only
//! the characters that count as code, each tagged with a 1-based position.
//! It maintains:
//! - A string-literal state machine for `'`, `"`, and backtick delimiters.
//!   The state resets at the start of each line, so a string opened on one
//!   line and closed on a later line is not recognized.
//! - The `//` line-comment cutoff, which discards the rest of the line.
//!
//! Escaped quotes and block comments are not handled.

use crate::scanner::ScanLine;

/// A character that survived string and comment filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeChar {
    pub ch: char,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub col: usize,
}

/// Whether a character opens or closes a string literal.
fn is_quote(ch: char) -> bool {
    matches!(ch, '\'' | '"' | '`')
}

/// Filter scan lines down to code characters.
pub fn code_chars(lines: &[ScanLine]) -> Vec<CodeChar> {
    let mut out = Vec::new();

    for sl in lines {
        let mut in_string = false;
        let mut string_char: Option<char> = None;
        let chars: Vec<char> = sl.text.chars().collect();

        for (j, &ch) in chars.iter().enumerate() {
            if is_quote(ch) {
                if !in_string {
                    in_string = true;
                    string_char = Some(ch);
                } else if Some(ch) == string_char {
                    in_string = false;
                }
                // A different quote inside a string is ordinary text.
                // Quotes are never emitted as code.
                continue;
            }

            if in_string {
                continue;
            }

            if ch == '/' && chars.get(j + 1) == Some(&'/') {
                // Rest of line is a comment.
                break;
            }

            out.push(CodeChar {
                ch,
                line: sl.line_num + 1,
                col: j + 1,
            });
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan;

    fn lex(source: &str) -> String {
        code_chars(&scan(source)).iter().map(|cc| cc.ch).collect()
    }

    #[test]
    fn test_plain_code_passes_through() {
        assert_eq!(lex("a(b)"), "a(b)");
    }

    #[test]
    fn test_string_contents_skipped() {
        assert_eq!(lex("\"(hidden)\" x"), " x");
    }

    #[test]
    fn test_quote_chars_never_emitted() {
        assert_eq!(lex("'' \"\" ``"), "  ");
    }

    #[test]
    fn test_other_quote_inside_string_is_text() {
        // The apostrophe does not close the double-quoted string.
        assert_eq!(lex("\"don't (\" x"), " x");
    }

    #[test]
    fn test_line_comment_cutoff() {
        assert_eq!(lex("a // (b)"), "a ");
    }

    #[test]
    fn test_comment_marker_inside_string_ignored() {
        assert_eq!(lex("\"http://x\" ("), " (");
    }

    #[test]
    fn test_string_state_resets_per_line() {
        // The string opened on line 1 is forgotten on line 2, so the
        // bracket on line 2 counts as code.
        assert_eq!(lex("\"open\n)"), ")");
    }

    #[test]
    fn test_positions_are_one_based() {
        let chars = code_chars(&scan("x\n ("));
        let open = chars.iter().find(|cc| cc.ch == '(').unwrap();
        assert_eq!(open.line, 2);
        assert_eq!(open.col, 2);
    }
}
