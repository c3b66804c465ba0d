//! Treeviz formatter for AST nodes
//!
//! Treeviz is a visual representation of the AST, designed for document trees. It features a
//! one line per node format, which enables quick scanning of the tree.
//!
//! So the format is :
//! <prefix><connector> <icon> <label> (truncated to 30 characters)
//!
//! Example:
//!
//! ⧉ Document (2 blocks, 1 footnotes)
//! ├─ ☰ 2 items
//! │ ├─ • one
//! │ │ └─ ¶ one
//! │ │   └─ ◦ one
//! │ └─ • two
//! ...
//!
//! Icons
//!     Blocks:
//!         Document: ⧉
//!         Paragraph: ¶
//!         Lists: ☰
//!         ListItem, OrderedItem: •
//!         DefinitionItem: ≔
//!         Term: ⊤
//!         Delimited blocks: 𝒱
//!         Verbatim line: ↵
//!         IgnoredLine: #
//!         FootnoteDefinition, Footnote: ³
//!         Footnotes: ‡
//!     Inlines:
//!         Raw: ◦
//!         Italic: 𝐼
//!         Bold: 𝐁
//!         Underline: _
//!         Strike: ~
//!         Code: ƒ
//!         Verbatim: ⌨
//!         Link: ⊕
//!         FootnoteRef: ³

use crate::org::ast::{snapshot_from_document, AstSnapshot, Document};
use crate::org::config::OutputConfig;

use super::registry::{FormatError, Formatter};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

/// Get the icon for a node type
fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Paragraph" => "¶",
        "UnorderedList" | "OrderedList" | "DefinitionList" => "☰",
        "ListItem" | "OrderedItem" => "•",
        "DefinitionItem" => "≔",
        "Term" => "⊤",
        "VerseBlock" | "QuoteBlock" | "CenterBlock" | "ExampleBlock" | "SrcBlock"
        | "HtmlBlock" | "CommentBlock" => "𝒱",
        "Line" => "↵",
        "IgnoredLine" => "#",
        "FootnoteDefinition" | "Footnote" | "FootnoteRef" => "³",
        "Footnotes" => "‡",
        "Raw" => "◦",
        "Italic" => "𝐼",
        "Bold" => "𝐁",
        "Underline" => "_",
        "Strike" => "~",
        "Code" => "ƒ",
        "Verbatim" => "⌨",
        "Link" => "⊕",
        _ => "○",
    }
}

/// One-line label: the node label with newlines flattened, or the node type when empty.
fn label_of(snapshot: &AstSnapshot) -> String {
    let label = snapshot.label.replace('\n', "↵");
    if label.is_empty() {
        truncate(&snapshot.node_type, 30)
    } else {
        truncate(&label, 30)
    }
}

/// Build treeviz output from an AstSnapshot
fn format_snapshot(
    snapshot: &AstSnapshot,
    prefix: &str,
    child_index: usize,
    child_count: usize,
) -> String {
    let mut output = String::new();

    let is_last = child_index + 1 == child_count;
    let connector = if is_last { "└─" } else { "├─" };
    let icon = get_icon(&snapshot.node_type);

    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        icon,
        label_of(snapshot)
    ));

    if !snapshot.children.is_empty() {
        let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        let child_count = snapshot.children.len();

        for (i, child) in snapshot.children.iter().enumerate() {
            output.push_str(&format_snapshot(child, &child_prefix, i, child_count));
        }
    }

    output
}

fn format_document_snapshot(snapshot: &AstSnapshot) -> String {
    let icon = get_icon(&snapshot.node_type);
    let mut output = format!("{} {}\n", icon, snapshot.label);

    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        output.push_str(&format_snapshot(child, "", i, child_count));
    }

    output
}

pub fn to_treeviz_str(doc: &Document) -> String {
    format_document_snapshot(&snapshot_from_document(doc))
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &'static str {
        "treeviz"
    }

    fn description(&self) -> &'static str {
        "Visual tree representation with indentation and Unicode icons"
    }

    fn render(&self, doc: &Document, _output: &OutputConfig) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::org::parsing::parse_document;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 30), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }

    #[test]
    fn test_list_tree() {
        let doc = parse_document("- one\n- *two*\n");
        insta::assert_snapshot!(to_treeviz_str(&doc), @r"
        ⧉ Document (1 blocks, 0 footnotes)
        └─ ☰ 2 items
          ├─ • one
          │ └─ ¶ one
          │   └─ ◦ one
          └─ • two
            └─ ¶ two
              └─ 𝐁 Bold
                └─ ◦ two
        ");
    }

    #[test]
    fn test_verbatim_lines_and_footnotes() {
        let doc = parse_document("#+BEGIN_SRC sh\nls -l\n#+END_SRC\n\nSee[fn:1].\n\n[fn:1] A note.\n");
        let output = to_treeviz_str(&doc);
        assert!(output.contains("├─ 𝒱 sh (1 lines)"));
        assert!(output.contains("│ └─ ↵ ls -l"));
        assert!(output.contains("└─ ‡ 1 footnotes"));
        assert!(output.contains("└─ ³ 1"));
    }
}
