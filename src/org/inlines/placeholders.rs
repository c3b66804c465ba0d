//! Link and footnote-reference pre-extraction
//!
//! Before the emphasis scan, every link and footnote reference is cut out of the text and
//! replaced by a placeholder token, so URLs like `http://x.com/a_b` are opaque to the scanner.
//! After the scan the tokens are resolved back into nodes.
//!
//! A token is `{prefix}{n}\u{E000}`. The prefix is grown until it does not occur in the input,
//! `n` counts up from 1 within one tokenizer call, and the private-use terminator keeps digits
//! that follow a link from running into the counter.
//!
//! Passes run in decreasing specificity:
//!
//!     1. `[[url][description]]`, the url holding no brackets
//!     2. `[[url]]`, the url doubling as description
//!     3. `[fn:NAME]` footnote references
//!     4. bare urls with a recognized protocol, `https://x.com`, ending before any token
//!        the earlier passes left in their way

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::org::ast::{InlineContent, InlineNode, Link};

const TERMINATOR: char = '\u{E000}';

static DESCRIBED_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[\[([^\[\]]*)\]\[(.*?)\]\]").unwrap());

static PLAIN_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[([^\[\]]*)\]\]").unwrap());

static FOOTNOTE_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[fn:([^\]\s:]+)\]").unwrap());

#[derive(Debug, Clone)]
enum Extracted {
    Link(Link),
    FootnoteRef(String),
}

#[derive(Debug, Clone)]
struct Entry {
    extracted: Extracted,
    /// The source text the token replaced.
    literal: String,
}

#[derive(Debug)]
enum Segment<'a> {
    Text(&'a str),
    Token(&'a Entry),
}

/// Per-call placeholder table.
#[derive(Debug)]
pub(super) struct Placeholders {
    prefix: String,
    entries: Vec<Entry>,
}

impl Placeholders {
    /// Start a table for `text`, growing `base` until it is absent from the text.
    pub(super) fn new(text: &str, base: &str) -> Self {
        let mut prefix = base.to_string();
        if prefix.is_empty() {
            prefix.push_str("OrgLinkToken");
        }
        while text.contains(&prefix) {
            prefix.push('X');
        }
        Self {
            prefix,
            entries: Vec::new(),
        }
    }

    pub(super) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run every extraction pass over `text`, returning the masked text.
    pub(super) fn extract(&mut self, text: &str, bare_url: Option<&Regex>) -> String {
        let text = DESCRIBED_LINK.replace_all(text, |caps: &Captures| {
            self.mint(
                Extracted::Link(Link::new(&caps[1], &caps[2])),
                &caps[0],
            )
        });
        let text = PLAIN_LINK.replace_all(&text, |caps: &Captures| {
            self.mint(Extracted::Link(Link::new(&caps[1], &caps[1])), &caps[0])
        });
        let text = FOOTNOTE_REF.replace_all(&text, |caps: &Captures| {
            self.mint(Extracted::FootnoteRef(caps[1].to_string()), &caps[0])
        });
        match bare_url {
            Some(re) => re
                .replace_all(&text, |caps: &Captures| self.mint_bare_url(&caps[0]))
                .into_owned(),
            None => text.into_owned(),
        }
    }

    /// Resolve tokens in a scanned forest. Raw runs are split into text, links and footnote
    /// references; code and verbatim leaves get the literal source back.
    pub(super) fn resolve(&self, content: InlineContent) -> InlineContent {
        let mut out = Vec::with_capacity(content.len());
        for node in content {
            match node {
                InlineNode::Raw(text) => {
                    for segment in self.segments(&text) {
                        out.push(match segment {
                            Segment::Text(t) => InlineNode::raw(t),
                            Segment::Token(entry) => match &entry.extracted {
                                Extracted::Link(link) => InlineNode::Link(link.clone()),
                                Extracted::FootnoteRef(name) => {
                                    InlineNode::FootnoteRef(name.clone())
                                }
                            },
                        });
                    }
                }
                InlineNode::Code(text) => out.push(InlineNode::Code(self.restore(&text))),
                InlineNode::Verbatim(text) => out.push(InlineNode::Verbatim(self.restore(&text))),
                InlineNode::Emph { kind, children } => {
                    out.push(InlineNode::emph(kind, self.resolve(children)))
                }
                other => out.push(other),
            }
        }
        out
    }

    fn mint(&mut self, extracted: Extracted, literal: &str) -> String {
        self.entries.push(Entry {
            extracted,
            literal: literal.to_string(),
        });
        format!("{}{}{}", self.prefix, self.entries.len(), TERMINATOR)
    }

    /// A bare url stops where an earlier token starts, the rest of the match stays in the text.
    fn mint_bare_url(&mut self, matched: &str) -> String {
        let (url, rest) = match matched.find(&self.prefix) {
            Some(at) => matched.split_at(at),
            None => (matched, ""),
        };
        let token = self.mint(Extracted::Link(Link::new(url, url)), url);
        token + rest
    }

    fn restore(&self, text: &str) -> String {
        self.segments(text)
            .into_iter()
            .map(|segment| match segment {
                Segment::Text(t) => t,
                Segment::Token(entry) => entry.literal.as_str(),
            })
            .collect()
    }

    fn segments<'a>(&'a self, text: &'a str) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();
        let mut plain_start = 0;
        let mut search = 0;

        while let Some(found) = text[search..].find(&self.prefix) {
            let start = search + found;
            let digits_start = start + self.prefix.len();
            let digits_end = digits_start
                + text[digits_start..]
                    .bytes()
                    .take_while(|b| b.is_ascii_digit())
                    .count();

            let entry = if digits_end > digits_start
                && text[digits_end..].starts_with(TERMINATOR)
            {
                text[digits_start..digits_end]
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| self.entries.get(i))
            } else {
                None
            };

            match entry {
                Some(entry) => {
                    if plain_start < start {
                        segments.push(Segment::Text(&text[plain_start..start]));
                    }
                    segments.push(Segment::Token(entry));
                    plain_start = digits_end + TERMINATOR.len_utf8();
                    search = plain_start;
                }
                None => {
                    search = start + self.prefix.chars().next().map_or(1, char::len_utf8);
                }
            }
        }

        if plain_start < text.len() {
            segments.push(Segment::Text(&text[plain_start..]));
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_grows_until_absent() {
        let placeholders = Placeholders::new("mentions OrgLinkToken here", "OrgLinkToken");
        assert_eq!(placeholders.prefix, "OrgLinkTokenX");

        let placeholders = Placeholders::new("plain", "OrgLinkToken");
        assert_eq!(placeholders.prefix, "OrgLinkToken");
    }

    #[test]
    fn links_are_masked_in_order() {
        let mut placeholders = Placeholders::new("", "T");
        let masked = placeholders.extract("[[a][b]] [[c]] [fn:1]", None);
        assert_eq!(masked, "T1\u{E000} T2\u{E000} T3\u{E000}");
        assert_eq!(placeholders.entries.len(), 3);
        assert_eq!(placeholders.entries[1].literal, "[[c]]");
    }

    #[test]
    fn plain_link_does_not_swallow_a_described_one() {
        let mut placeholders = Placeholders::new("", "T");
        let masked = placeholders.extract("[[a]] and [[b][c]]", None);
        let resolved = placeholders.resolve(vec![InlineNode::raw(masked)]);
        assert_eq!(
            resolved,
            vec![
                InlineNode::Link(Link::new("a", "a")),
                InlineNode::raw(" and "),
                InlineNode::Link(Link::new("b", "c")),
            ]
        );
    }

    #[test]
    fn digits_after_a_token_are_not_part_of_it() {
        let mut placeholders = Placeholders::new("", "T");
        let masked = placeholders.extract("[[a]]42", None);
        let resolved = placeholders.resolve(vec![InlineNode::raw(masked)]);
        assert_eq!(
            resolved,
            vec![
                InlineNode::Link(Link::new("a", "a")),
                InlineNode::raw("42"),
            ]
        );
    }

    #[test]
    fn code_gets_literal_source_back() {
        let mut placeholders = Placeholders::new("", "T");
        let masked = placeholders.extract("[[x]]", None);
        let resolved = placeholders.resolve(vec![InlineNode::Code(masked)]);
        assert_eq!(resolved, vec![InlineNode::Code("[[x]]".to_string())]);
    }

    #[test]
    fn unknown_token_numbers_stay_text() {
        let placeholders = Placeholders::new("", "T");
        let text = "T9\u{E000}";
        assert_eq!(
            placeholders.resolve(vec![InlineNode::raw(text)]),
            vec![InlineNode::raw(text)]
        );
    }
}
