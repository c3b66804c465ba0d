//! Line Classification
//!
//! Maps one source line to its [LineKind] by testing the line patterns in a fixed priority
//! order. Classification looks at the line text only: the same line always gets the same kind,
//! wherever it appears in the document.
//!
//! Letter-initial lines short-circuit to [LineKind::Paragraph]. None of the patterns in the
//! cascade can match a line that starts with a letter (they all open with whitespace, `#`, `[`,
//! a bullet or a digit), so the shortcut never changes the answer.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::patterns;

/// The kind of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    Blank,
    Ignored,
    Paragraph,
    UnorderedItem,
    OrderedItem,
    DefinitionItem,
    FootnoteDef,
    Verse,
    Quote,
    Center,
    Example,
    Src,
    Html,
    Comment,
}

impl LineKind {
    /// The delimited block this line opens, if any.
    pub fn delimited(self) -> Option<DelimitedKind> {
        match self {
            LineKind::Verse => Some(DelimitedKind::Verse),
            LineKind::Quote => Some(DelimitedKind::Quote),
            LineKind::Center => Some(DelimitedKind::Center),
            LineKind::Example => Some(DelimitedKind::Example),
            LineKind::Src => Some(DelimitedKind::Src),
            LineKind::Html => Some(DelimitedKind::Html),
            LineKind::Comment => Some(DelimitedKind::Comment),
            _ => None,
        }
    }
}

/// Blocks bounded by `#+BEGIN_X` / `#+END_X` markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DelimitedKind {
    Verse,
    Quote,
    Center,
    Example,
    Src,
    Html,
    Comment,
}

impl DelimitedKind {
    /// Cascade order.
    pub const ALL: [DelimitedKind; 7] = [
        DelimitedKind::Verse,
        DelimitedKind::Quote,
        DelimitedKind::Center,
        DelimitedKind::Example,
        DelimitedKind::Src,
        DelimitedKind::Html,
        DelimitedKind::Comment,
    ];

    /// The word following `#+BEGIN_` / `#+END_`.
    pub fn keyword(self) -> &'static str {
        match self {
            DelimitedKind::Verse => "VERSE",
            DelimitedKind::Quote => "QUOTE",
            DelimitedKind::Center => "CENTER",
            DelimitedKind::Example => "EXAMPLE",
            DelimitedKind::Src => "SRC",
            DelimitedKind::Html => "HTML",
            DelimitedKind::Comment => "COMMENT",
        }
    }

    pub fn line_kind(self) -> LineKind {
        match self {
            DelimitedKind::Verse => LineKind::Verse,
            DelimitedKind::Quote => LineKind::Quote,
            DelimitedKind::Center => LineKind::Center,
            DelimitedKind::Example => LineKind::Example,
            DelimitedKind::Src => LineKind::Src,
            DelimitedKind::Html => LineKind::Html,
            DelimitedKind::Comment => LineKind::Comment,
        }
    }

    /// Verbatim blocks keep every body line as-is and are never tokenized.
    pub fn is_verbatim(self) -> bool {
        matches!(
            self,
            DelimitedKind::Example | DelimitedKind::Src | DelimitedKind::Html | DelimitedKind::Comment
        )
    }

    /// Markup-bearing blocks run their body through the inline tokenizer on close.
    pub fn has_markup(self) -> bool {
        !self.is_verbatim()
    }
}

/// Classify a line. Total: unmatched lines are paragraphs.
pub fn classify_line(line: &str) -> LineKind {
    if line.chars().next().is_some_and(char::is_alphabetic) {
        return LineKind::Paragraph;
    }
    classify_by_cascade(line)
}

/// The full pattern cascade, without the letter shortcut.
pub fn classify_by_cascade(line: &str) -> LineKind {
    if patterns::BLANK.is_match(line) {
        return LineKind::Blank;
    }
    if patterns::IGNORED.is_match(line) {
        return LineKind::Ignored;
    }
    if patterns::DEFINITION_ITEM.is_match(line) {
        return LineKind::DefinitionItem;
    }
    if patterns::UNORDERED_ITEM.is_match(line) {
        return LineKind::UnorderedItem;
    }
    if patterns::ORDERED_ITEM.is_match(line) {
        return LineKind::OrderedItem;
    }
    if patterns::FOOTNOTE_DEF.is_match(line) {
        return LineKind::FootnoteDef;
    }
    for kind in DelimitedKind::ALL {
        if patterns::begin_marker(kind).is_match(line) {
            return kind.line_kind();
        }
    }
    LineKind::Paragraph
}

/// Classifier with a single-entry memo.
///
/// The driver classifies the same line more than once (once when it arrives, again when a list
/// item rewrites it and routes it to a fresh child); remembering the last answer skips the
/// repeated cascade. Only the most recent line is kept.
#[derive(Debug, Default)]
pub struct LineClassifier {
    last: Option<(String, LineKind)>,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classify(&mut self, line: &str) -> LineKind {
        if let Some((cached, kind)) = &self.last {
            if cached == line {
                return *kind;
            }
        }
        let kind = classify_line(line);
        trace!(?kind, line, "classified line");
        self.last = Some((line.to_string(), kind));
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", LineKind::Blank)]
    #[case("   \t", LineKind::Blank)]
    #[case("# a comment", LineKind::Ignored)]
    #[case("#", LineKind::Ignored)]
    #[case("#+TITLE: Notes", LineKind::Ignored)]
    #[case("- term :: definition", LineKind::DefinitionItem)]
    #[case("  + term ::", LineKind::DefinitionItem)]
    #[case("- item", LineKind::UnorderedItem)]
    #[case("  * nested item", LineKind::UnorderedItem)]
    #[case("1. first", LineKind::OrderedItem)]
    #[case("12) twelfth", LineKind::OrderedItem)]
    #[case("[fn:note] body", LineKind::FootnoteDef)]
    #[case("[1] body", LineKind::FootnoteDef)]
    #[case("#+BEGIN_VERSE", LineKind::Verse)]
    #[case("#+begin_quote", LineKind::Quote)]
    #[case("#+BEGIN_CENTER", LineKind::Center)]
    #[case("  #+BEGIN_EXAMPLE", LineKind::Example)]
    #[case("#+BEGIN_SRC rust", LineKind::Src)]
    #[case("#+BEGIN_HTML", LineKind::Html)]
    #[case("#+BEGIN_COMMENT", LineKind::Comment)]
    #[case("Plain prose", LineKind::Paragraph)]
    #[case("  indented prose", LineKind::Paragraph)]
    #[case("*bold* start", LineKind::Paragraph)]
    #[case("[[http://example.com][link]] first", LineKind::Paragraph)]
    #[case("#+END_SRC", LineKind::Paragraph)]
    #[case("-no space", LineKind::Paragraph)]
    fn classifies(#[case] line: &str, #[case] expected: LineKind) {
        assert_eq!(classify_line(line), expected);
    }

    #[test]
    fn letter_shortcut_agrees_with_cascade() {
        let lines = [
            "a",
            "Some text :: with a delimiter",
            "word - item",
            "x1. not a list",
            "fn:1 not a footnote",
            "BEGIN_SRC",
            "Élan",
            "日本語",
        ];
        for line in lines {
            assert_eq!(classify_by_cascade(line), LineKind::Paragraph, "{line:?}");
            assert_eq!(classify_line(line), classify_by_cascade(line), "{line:?}");
        }
    }

    #[test]
    fn memo_does_not_change_result() {
        let mut classifier = LineClassifier::new();
        assert_eq!(classifier.classify("- a"), LineKind::UnorderedItem);
        assert_eq!(classifier.classify("- a"), LineKind::UnorderedItem);
        assert_eq!(classifier.classify("text"), LineKind::Paragraph);
        assert_eq!(classifier.classify("- a"), LineKind::UnorderedItem);
    }

    #[test]
    fn verbatim_kinds() {
        assert!(DelimitedKind::Src.is_verbatim());
        assert!(DelimitedKind::Comment.is_verbatim());
        assert!(DelimitedKind::Verse.has_markup());
        assert!(DelimitedKind::Center.has_markup());
    }
}
