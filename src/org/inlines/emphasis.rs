//! Recursive emphasis scanner
//!
//! One regular expression finds, in a single match, the unmarked prefix and the next
//! emphasized span. The span is delimited by the same marker character on both sides and its
//! body neither starts nor ends with whitespace, so `* foo *` stays literal while
//! `*a fine day*` is bold. A body may not end with a backslash and never crosses a newline.
//!
//! The regex crate has no backreferences, so "the same marker on both sides" is spelled out as
//! one alternative per marker, each with its own body group. Alternation is leftmost-first, so
//! the one-character body is tried before the longer form: `*a* *b*` is two spans, not one.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::org::ast::{EmphKind, InlineContent, InlineNode};

const BODY: &str = r"[^\s\\]|[^\s].*?[^\s\\]";

/// Markers in the order of their alternatives (capture groups 2 to 7).
const MARKERS: [char; 6] = ['/', '*', '~', '=', '+', '_'];

static EMPHASIS: Lazy<Regex> = Lazy::new(|| {
    let alternatives: Vec<String> = MARKERS
        .iter()
        .map(|marker| {
            let m = regex::escape(&marker.to_string());
            format!("{m}({BODY}){m}")
        })
        .collect();
    Regex::new(&format!(r"^(?s:(.*?))(?:{})", alternatives.join("|"))).unwrap()
});

/// Tokenize `text` into raw runs and emphasis spans, recursing into the bodies of italic,
/// bold, underline and strike spans. Code and verbatim bodies are kept literally.
pub(super) fn scan(text: &str) -> InlineContent {
    let mut out = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let Some(caps) = EMPHASIS.captures(rest) else {
            break;
        };
        let end = caps.get(0).map_or(rest.len(), |m| m.end());

        if let Some(prefix) = caps.get(1).filter(|m| !m.as_str().is_empty()) {
            out.push(InlineNode::raw(prefix.as_str()));
        }
        if let Some((marker, body)) = emphasized(&caps) {
            out.push(node_for(marker, body));
        }

        rest = &rest[end..];
    }

    if !rest.is_empty() {
        out.push(InlineNode::raw(rest));
    }
    out
}

fn emphasized<'t>(caps: &Captures<'t>) -> Option<(char, &'t str)> {
    MARKERS
        .iter()
        .enumerate()
        .find_map(|(i, marker)| caps.get(i + 2).map(|body| (*marker, body.as_str())))
}

fn node_for(marker: char, body: &str) -> InlineNode {
    match marker {
        '=' => InlineNode::Code(body.to_string()),
        '~' => InlineNode::Verbatim(body.to_string()),
        '/' => InlineNode::emph(EmphKind::Italic, scan(body)),
        '*' => InlineNode::emph(EmphKind::Bold, scan(body)),
        '+' => InlineNode::emph(EmphKind::Strike, scan(body)),
        '_' => InlineNode::emph(EmphKind::Underline, scan(body)),
        other => unreachable!("no emphasis marker {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(text: &str) -> InlineNode {
        InlineNode::raw(text)
    }

    #[test]
    fn plain_text_is_one_raw_run() {
        assert_eq!(scan("nothing to see"), vec![raw("nothing to see")]);
        assert!(scan("").is_empty());
    }

    #[test]
    fn bold_recurses_into_italic() {
        assert_eq!(
            scan("*bold /and italic/*"),
            vec![InlineNode::emph(
                EmphKind::Bold,
                vec![
                    raw("bold "),
                    InlineNode::emph(EmphKind::Italic, vec![raw("and italic")]),
                ]
            )]
        );
    }

    #[test]
    fn whitespace_bounded_markers_stay_literal() {
        assert_eq!(scan("* foo *"), vec![raw("* foo *")]);
        assert_eq!(scan("a * b"), vec![raw("a * b")]);
    }

    #[test]
    fn multi_word_body() {
        assert_eq!(
            scan("what *a fine day* it is"),
            vec![
                raw("what "),
                InlineNode::emph(EmphKind::Bold, vec![raw("a fine day")]),
                raw(" it is"),
            ]
        );
    }

    #[test]
    fn code_and_verbatim_do_not_recurse() {
        assert_eq!(
            scan("run =*x*= or ~/y/~"),
            vec![
                raw("run "),
                InlineNode::Code("*x*".to_string()),
                raw(" or "),
                InlineNode::Verbatim("/y/".to_string()),
            ]
        );
    }

    #[test]
    fn single_character_body() {
        assert_eq!(
            scan("_u_ and +s+"),
            vec![
                InlineNode::emph(EmphKind::Underline, vec![raw("u")]),
                raw(" and "),
                InlineNode::emph(EmphKind::Strike, vec![raw("s")]),
            ]
        );
    }

    #[test]
    fn whitespace_between_spans_is_kept() {
        assert_eq!(
            scan("*a* *b*"),
            vec![
                InlineNode::emph(EmphKind::Bold, vec![raw("a")]),
                raw(" "),
                InlineNode::emph(EmphKind::Bold, vec![raw("b")]),
            ]
        );
    }

    #[test]
    fn escaped_closing_marker_is_not_a_close() {
        assert_eq!(scan(r"*a\*"), vec![raw(r"*a\*")]);
    }

    #[test]
    fn body_does_not_cross_lines() {
        assert_eq!(scan("*a\nb*"), vec![raw("*a\nb*")]);
        assert_eq!(
            scan("x\n/y/"),
            vec![raw("x\n"), InlineNode::emph(EmphKind::Italic, vec![raw("y")])]
        );
    }
}
