//! Inline AST nodes
//!
//! The text of markup-bearing blocks (paragraphs, verse, quote, center, footnote bodies and
//! definition-list terms) is turned into a forest of these nodes by the
//! [inline tokenizer](crate::org::inlines).
//!
//! Emphasis nodes recurse: their children cover the emphasized span exactly. Code and
//! verbatim spans are leaves holding literal text.

use serde::{Deserialize, Serialize};

/// Sequence of inline nodes covering a span of text.
pub type InlineContent = Vec<InlineNode>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineNode {
    /// Text with no markup.
    Raw(String),
    /// Recursive emphasis span.
    Emph {
        kind: EmphKind,
        children: InlineContent,
    },
    /// `=code=`, kept literally.
    Code(String),
    /// `~verbatim~`, kept literally.
    Verbatim(String),
    Link(Link),
    /// `[fn:NAME]` appearing inside text.
    FootnoteRef(String),
}

impl InlineNode {
    pub fn raw(text: impl Into<String>) -> Self {
        InlineNode::Raw(text.into())
    }

    pub fn emph(kind: EmphKind, children: InlineContent) -> Self {
        InlineNode::Emph { kind, children }
    }

    /// Returns the literal text of leaf nodes.
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            InlineNode::Raw(text) | InlineNode::Code(text) | InlineNode::Verbatim(text) => {
                Some(text)
            }
            _ => None,
        }
    }

    /// Returns nested content for emphasis nodes.
    pub fn children(&self) -> Option<&InlineContent> {
        match self {
            InlineNode::Emph { children, .. } => Some(children),
            _ => None,
        }
    }

    pub fn node_type(&self) -> &'static str {
        match self {
            InlineNode::Raw(_) => "Raw",
            InlineNode::Emph { kind, .. } => kind.node_type(),
            InlineNode::Code(_) => "Code",
            InlineNode::Verbatim(_) => "Verbatim",
            InlineNode::Link(_) => "Link",
            InlineNode::FootnoteRef(_) => "FootnoteRef",
        }
    }
}

/// Concatenated visible text of an inline forest, markers dropped.
///
/// Links contribute their description, footnote references their name in brackets.
pub fn plain_text(content: &[InlineNode]) -> String {
    let mut out = String::new();
    push_plain_text(content, &mut out);
    out
}

fn push_plain_text(content: &[InlineNode], out: &mut String) {
    for node in content {
        match node {
            InlineNode::Raw(text) | InlineNode::Code(text) | InlineNode::Verbatim(text) => {
                out.push_str(text)
            }
            InlineNode::Emph { children, .. } => push_plain_text(children, out),
            InlineNode::Link(link) => out.push_str(&link.description),
            InlineNode::FootnoteRef(name) => {
                out.push('[');
                out.push_str(name);
                out.push(']');
            }
        }
    }
}

/// The recursive emphasis kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmphKind {
    Italic,
    Bold,
    Underline,
    Strike,
}

impl EmphKind {
    pub fn marker(self) -> char {
        match self {
            EmphKind::Italic => '/',
            EmphKind::Bold => '*',
            EmphKind::Underline => '_',
            EmphKind::Strike => '+',
        }
    }

    pub fn node_type(self) -> &'static str {
        match self {
            EmphKind::Italic => "Italic",
            EmphKind::Bold => "Bold",
            EmphKind::Underline => "Underline",
            EmphKind::Strike => "Strike",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub description: String,
    pub kind: LinkKind,
}

impl Link {
    pub fn new(url: impl Into<String>, description: impl Into<String>) -> Self {
        let url = url.into();
        let kind = LinkKind::of(&url);
        Self {
            url,
            description: description.into(),
            kind,
        }
    }
}

/// Link classification derived from the shape of the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkKind {
    Http,
    Ftp,
    File,
    Mail,
    /// `#custom-id` targets inside the document.
    Id,
    /// Any other `protocol:` link.
    Protocol,
    /// Plain text target, searched for in the document.
    Search,
}

impl LinkKind {
    pub fn of(url: &str) -> Self {
        let lower = url.to_ascii_lowercase();
        if lower.starts_with("http:") || lower.starts_with("https:") {
            LinkKind::Http
        } else if lower.starts_with("ftp:") {
            LinkKind::Ftp
        } else if lower.starts_with("file:") || url.starts_with("./") || url.starts_with("../") {
            LinkKind::File
        } else if lower.starts_with("mailto:") {
            LinkKind::Mail
        } else if url.starts_with('#') {
            LinkKind::Id
        } else if url.contains(':') {
            LinkKind::Protocol
        } else {
            LinkKind::Search
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_kinds_follow_url_shape() {
        assert_eq!(LinkKind::of("http://x.com"), LinkKind::Http);
        assert_eq!(LinkKind::of("HTTPS://x.com"), LinkKind::Http);
        assert_eq!(LinkKind::of("ftp://host/file"), LinkKind::Ftp);
        assert_eq!(LinkKind::of("file:notes.org"), LinkKind::File);
        assert_eq!(LinkKind::of("../notes.org"), LinkKind::File);
        assert_eq!(LinkKind::of("mailto:me@x.com"), LinkKind::Mail);
        assert_eq!(LinkKind::of("#intro"), LinkKind::Id);
        assert_eq!(LinkKind::of("doi:10.1000/182"), LinkKind::Protocol);
        assert_eq!(LinkKind::of("Some heading"), LinkKind::Search);
    }

    #[test]
    fn plain_text_drops_markers() {
        let content = vec![
            InlineNode::raw("a "),
            InlineNode::emph(EmphKind::Bold, vec![InlineNode::raw("b")]),
            InlineNode::Code("c".to_string()),
            InlineNode::Link(Link::new("http://x", "d")),
            InlineNode::FootnoteRef("1".to_string()),
        ];
        assert_eq!(plain_text(&content), "a bcd[1]");
    }
}
