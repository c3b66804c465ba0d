//! Shared line patterns
//!
//!     Every regular expression the classifier and the block model need lives here, compiled
//!     once. Block-level code never builds its own line patterns; it asks this module, so the
//!     grammar is readable in one place.
//!
//!     Delimited block markers are case-insensitive (`#+begin_src` and `#+BEGIN_SRC` are the
//!     same marker) and may be indented.

use once_cell::sync::Lazy;
use regex::Regex;

use super::line_classification::DelimitedKind;

pub static BLANK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*$").unwrap());

/// Comment lines (`# ...`) and keyword lines (`#+TITLE: ...`).
pub static IGNORED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*#(?:\s|$)|^\s*#\+[A-Za-z_]+:").unwrap());

pub static DEFINITION_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[+*-]\s+.*?\s::(?:\s|$)").unwrap());

pub static UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[+*-] ").unwrap());

pub static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+[.)] ").unwrap());

pub static FOOTNOTE_DEF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\[(?:fn:)?[^\[\]\s]+\]").unwrap());

/// Captures the footnote name of a definition line, without the `fn:` prefix.
pub static FOOTNOTE_DEF_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\[(?:fn:)?([^\[\]\s]+)\]").unwrap());

/// Captures `(indent)(marker)` of an unordered item.
pub static UNORDERED_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\s*)([+*-] )").unwrap());

/// Captures `(indent)(marker)` of an ordered item, counter-reset cookie included.
pub static ORDERED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)(\d+[.)](?:\s+\[@\d+\])? )").unwrap());

/// Captures `(indent)(marker and term)` of a definition item.
pub static DEFINITION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)([+*-]\s+.*?\s::)").unwrap());

/// Captures the term of a definition item.
pub static DEFINITION_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[+*-]\s+(.*?)\s+::(?:\s|$)").unwrap());

/// Captures `(number)` and the optional `[@N]` counter reset of an ordered item.
pub static ORDERED_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d+)[.)](?:\s+\[@(\d+)\])?").unwrap());

/// Strips the comment hash of an ignored line.
pub static IGNORED_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*#(?: |$)").unwrap());

/// Captures the indent before the bracket tag opening a footnote definition.
pub static FOOTNOTE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\s*)\[.*?\]").unwrap());

/// Captures the language of a `#+BEGIN_SRC` line.
pub static SRC_LANGUAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*#\+BEGIN_SRC\s+([A-Za-z0-9_+-]+)").unwrap());

static BEGIN_MARKERS: Lazy<Vec<(DelimitedKind, Regex)>> = Lazy::new(|| {
    DelimitedKind::ALL
        .iter()
        .map(|kind| (*kind, marker_regex("BEGIN", *kind)))
        .collect()
});

static END_MARKERS: Lazy<Vec<(DelimitedKind, Regex)>> = Lazy::new(|| {
    DelimitedKind::ALL
        .iter()
        .map(|kind| (*kind, marker_regex("END", *kind)))
        .collect()
});

fn marker_regex(edge: &str, kind: DelimitedKind) -> Regex {
    Regex::new(&format!(r"(?i)^\s*#\+{}_{}\b", edge, kind.keyword())).unwrap()
}

fn lookup(markers: &'static [(DelimitedKind, Regex)], kind: DelimitedKind) -> &'static Regex {
    markers
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, re)| re)
        .unwrap_or_else(|| unreachable!("every delimited kind has markers"))
}

pub fn begin_marker(kind: DelimitedKind) -> &'static Regex {
    lookup(&BEGIN_MARKERS, kind)
}

pub fn end_marker(kind: DelimitedKind) -> &'static Regex {
    lookup(&END_MARKERS, kind)
}

/// Width of the leading whitespace of `line`, with each tab counted as `tab_width` columns.
pub fn indent_of(line: &str, tab_width: usize) -> usize {
    line.chars()
        .take_while(|c| c.is_whitespace())
        .map(|c| if c == '\t' { tab_width } else { 1 })
        .sum()
}

/// Replaces the span captured by group 2 of `marker` with the same number of spaces.
///
/// Keeps the column of whatever follows the marker, so content nested under a list item
/// measures the same indent it had in the source. Lines the pattern doesn't match are
/// returned unchanged.
pub fn blank_marker(line: &str, marker: &Regex) -> String {
    match marker.captures(line).and_then(|caps| caps.get(2)) {
        Some(m) => {
            let width = m.as_str().chars().count();
            let mut out = String::with_capacity(line.len());
            out.push_str(&line[..m.start()]);
            out.push_str(&" ".repeat(width));
            out.push_str(&line[m.end()..]);
            out
        }
        None => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_expands_tabs() {
        assert_eq!(indent_of("    x", 8), 4);
        assert_eq!(indent_of("\tx", 8), 8);
        assert_eq!(indent_of("\t  x", 4), 6);
        assert_eq!(indent_of("x", 4), 0);
        assert_eq!(indent_of("", 4), 0);
    }

    #[test]
    fn blank_marker_keeps_columns() {
        assert_eq!(blank_marker("- a", &UNORDERED_MARKER), "  a");
        assert_eq!(blank_marker("  + b", &UNORDERED_MARKER), "    b");
        assert_eq!(blank_marker("10. ten", &ORDERED_MARKER), "    ten");
        assert_eq!(blank_marker("1. [@5] x", &ORDERED_MARKER), "        x");
        assert_eq!(
            blank_marker("- term :: body", &DEFINITION_MARKER),
            "          body"
        );
    }

    #[test]
    fn blank_marker_leaves_unmatched_lines() {
        assert_eq!(blank_marker("plain", &UNORDERED_MARKER), "plain");
    }

    #[test]
    fn delimited_markers_are_case_insensitive() {
        assert!(begin_marker(DelimitedKind::Src).is_match("#+begin_src rust"));
        assert!(begin_marker(DelimitedKind::Src).is_match("  #+BEGIN_SRC"));
        assert!(end_marker(DelimitedKind::Src).is_match("#+End_Src"));
        assert!(!begin_marker(DelimitedKind::Src).is_match("#+BEGIN_SRCX"));
        assert!(!end_marker(DelimitedKind::Quote).is_match("#+END_SRC"));
    }

    #[test]
    fn src_language_is_first_word() {
        let caps = SRC_LANGUAGE.captures("#+BEGIN_SRC emacs-lisp :tangle yes").unwrap();
        assert_eq!(&caps[1], "emacs-lisp");
        assert!(SRC_LANGUAGE.captures("#+BEGIN_SRC").is_none());
    }

    #[test]
    fn ordered_number_reads_counter_reset() {
        let caps = ORDERED_NUMBER.captures("1. [@5] x").unwrap();
        assert_eq!(&caps[1], "1");
        assert_eq!(&caps[2], "5");
        let caps = ORDERED_NUMBER.captures("  3) three").unwrap();
        assert_eq!(&caps[1], "3");
        assert!(caps.get(2).is_none());
    }

    #[test]
    fn definition_title_stops_at_delimiter() {
        let caps = DEFINITION_TITLE.captures("- /term/ :: body :: more").unwrap();
        assert_eq!(&caps[1], "/term/");
    }
}
