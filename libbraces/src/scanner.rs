//! Phase 1: Scanner
//!
//! The scanner splits raw source text into scan lines. Original line content
//! is kept as-is so the checker can show it in unclosed-bracket previews.

/// A single line after the scanning phase.
#[derive(Debug, Clone)]
pub struct ScanLine {
    /// Line content, without the trailing newline.
    pub text: String,
    /// Zero-based line number for position reporting.
    pub line_num: usize,
}

/// Split source text into scan lines.
pub fn scan(source: &str) -> Vec<ScanLine> {
    source
        .lines()
        .enumerate()
        .map(|(line_num, text)| ScanLine {
            text: text.to_string(),
            line_num,
        })
        .collect()
}
