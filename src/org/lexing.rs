//! Lexing
//!
//!     Org content is line structured: every block decision is made on whole lines. Lexing is
//!     therefore only two small things:
//!
//!         1. Classifying a line into a [LineKind]. See [line_classification].
//!         2. Measuring a line's indentation, with tabs expanded. See [patterns::indent_of].
//!
//!     Both are context free. Whether a line continues a paragraph, opens a nested list or
//!     closes a block is decided later by the block model, which compares kinds and indents
//!     against the blocks that are currently open.
//!
//!     The regular expressions shared by classification, list-marker rewriting and block
//!     markers live in [patterns].

pub mod line_classification;
pub mod patterns;

pub use line_classification::{
    classify_by_cascade, classify_line, DelimitedKind, LineClassifier, LineKind,
};
pub use patterns::indent_of;

/// Splits source text into lines without their terminators.
///
/// Accepts `\n` and `\r\n`. A trailing newline does not produce an extra empty line.
pub fn split_lines(source: &str) -> Vec<String> {
    source.lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_both_terminators() {
        assert_eq!(split_lines("a\r\nb\nc\n"), vec!["a", "b", "c"]);
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n\n"), vec!["", ""]);
    }
}
