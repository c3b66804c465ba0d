//! HTML renderer
//!
//! A [Visitor] that writes one HTML element per node:
//!
//!     Document            <div class='org_content'>
//!     UnorderedList       <ul>, items as <li>
//!     OrderedList         <ol>, with start='N' unless it starts at 1
//!     DefinitionList      <dl>, items as <dt> term and <dd> body
//!     Paragraph           <p>
//!     Verse               <pre class='verse'>
//!     Quote               <blockquote>
//!     Center              <center>
//!     Example             <pre>, escaped lines
//!     Src                 <pre class='src lang-X'>, escaped lines
//!     Html                the lines, untouched
//!     IgnoredLine         <!-- comment -->
//!     Comment, FootnoteDefinition: nothing in place; bodies go to the footnote section
//!
//! Footnote references render as a superscript ordinal linking to the footnote section. When
//! enabled, the section is the last child of the content div.

use crate::org::ast::{
    visit_inlines, AstNode, DefinitionItem, DefinitionList, DelimitedBlock, Document, EmphKind,
    FootnoteDefinition, FootnoteRegistry, IgnoredLine, InlineNode, ListItem, OrderedItem,
    OrderedList, Paragraph, UnorderedList, Visitor,
};
use crate::org::config::OutputConfig;
use crate::org::lexing::DelimitedKind;
use html_escape::{encode_single_quoted_attribute, encode_text};

use super::registry::{FormatError, Formatter};

/// Render a document, footnote section included.
pub fn to_html(doc: &Document) -> String {
    render(doc, true)
}

fn render(doc: &Document, show_footnotes: bool) -> String {
    let mut renderer = HtmlRenderer::new(&doc.footnotes, show_footnotes);
    doc.accept(&mut renderer);
    renderer.out
}

struct HtmlRenderer<'a> {
    out: String,
    footnotes: &'a FootnoteRegistry,
    show_footnotes: bool,
    /// Inside a footnote definition block, whose body belongs to the footnote section.
    muted: bool,
}

impl<'a> HtmlRenderer<'a> {
    fn new(footnotes: &'a FootnoteRegistry, show_footnotes: bool) -> Self {
        Self {
            out: String::new(),
            footnotes,
            show_footnotes,
            muted: false,
        }
    }

    fn push(&mut self, s: &str) {
        self.out.push_str(s);
    }

    fn push_text(&mut self, s: &str) {
        self.out.push_str(&encode_text(s));
    }

    fn push_lines(&mut self, lines: &[String]) {
        for line in lines {
            self.push_text(line);
            self.push("\n");
        }
    }

    fn footnote_section(&mut self) {
        let footnotes = self.footnotes;
        let defined: Vec<_> = footnotes
            .iter()
            .filter_map(|(name, footnote)| footnote.body.as_ref().map(|b| (name, footnote, b)))
            .collect();
        if defined.is_empty() {
            return;
        }
        self.push("<section class='org-footnotes'>\n");
        for (name, footnote, body) in defined {
            let name = encode_single_quoted_attribute(name);
            self.push(&format!(
                "<p class='org-footnote'><a id='fndef_{name}' class='org-inline-fnref' \
                 href='#fnref_{name}'><sup>{}</sup></a>&nbsp;:&nbsp;",
                footnote.ordinal
            ));
            visit_inlines(self, body);
            self.push("</p>\n");
        }
        self.push("</section>\n");
    }
}

fn emph_tag(kind: EmphKind) -> (&'static str, &'static str) {
    match kind {
        EmphKind::Italic => ("em", "org-inline-italic"),
        EmphKind::Bold => ("strong", "org-inline-bold"),
        EmphKind::Underline => ("u", "org-inline-underline"),
        EmphKind::Strike => ("del", "org-inline-strike"),
    }
}

impl Visitor for HtmlRenderer<'_> {
    fn visit_document(&mut self, _document: &Document) {
        self.push("<div class='org_content'>\n");
    }
    fn leave_document(&mut self, _document: &Document) {
        if self.show_footnotes {
            self.footnote_section();
        }
        self.push("</div>\n");
    }

    fn visit_unordered_list(&mut self, _list: &UnorderedList) {
        self.push("<ul>\n");
    }
    fn leave_unordered_list(&mut self, _list: &UnorderedList) {
        self.push("</ul>\n");
    }

    fn visit_ordered_list(&mut self, list: &OrderedList) {
        if list.start == 1 {
            self.push("<ol>\n");
        } else {
            self.push(&format!("<ol start='{}'>\n", list.start));
        }
    }
    fn leave_ordered_list(&mut self, _list: &OrderedList) {
        self.push("</ol>\n");
    }

    fn visit_definition_list(&mut self, _list: &DefinitionList) {
        self.push("<dl>\n");
    }
    fn leave_definition_list(&mut self, _list: &DefinitionList) {
        self.push("</dl>\n");
    }

    fn visit_list_item(&mut self, _item: &ListItem) {
        self.push("<li>\n");
    }
    fn leave_list_item(&mut self, _item: &ListItem) {
        self.push("</li>\n");
    }

    fn visit_ordered_item(&mut self, _item: &OrderedItem) {
        self.push("<li>\n");
    }
    fn leave_ordered_item(&mut self, _item: &OrderedItem) {
        self.push("</li>\n");
    }

    fn visit_definition_item(&mut self, _item: &DefinitionItem) {
        self.push("<dt>");
    }
    fn visit_definition_body(&mut self, _item: &DefinitionItem) {
        self.push("</dt>\n<dd>\n");
    }
    fn leave_definition_item(&mut self, _item: &DefinitionItem) {
        self.push("</dd>\n");
    }

    fn visit_paragraph(&mut self, _paragraph: &Paragraph) {
        self.push("<p>\n");
    }
    fn leave_paragraph(&mut self, _paragraph: &Paragraph) {
        self.push("\n</p>\n");
    }

    fn visit_ignored_line(&mut self, line: &IgnoredLine) {
        // "--" is not allowed inside a comment.
        let content = line.content.replace("--", "- -");
        self.push(&format!("<!-- {} -->\n", encode_text(&content)));
    }

    fn visit_footnote_definition(&mut self, _footnote: &FootnoteDefinition) {
        self.muted = true;
    }
    fn leave_footnote_definition(&mut self, _footnote: &FootnoteDefinition) {
        self.muted = false;
    }

    fn visit_delimited_block(&mut self, block: &DelimitedBlock) {
        match block.kind {
            DelimitedKind::Verse => self.push("<pre class='verse'>\n"),
            DelimitedKind::Quote => self.push("<blockquote>\n"),
            DelimitedKind::Center => self.push("<center>\n"),
            DelimitedKind::Example => {
                self.push("<pre>\n");
                self.push_lines(&block.lines);
                self.push("</pre>\n");
            }
            DelimitedKind::Src => {
                match &block.language {
                    Some(language) => self.push(&format!(
                        "<pre class='src lang-{}'>\n",
                        encode_single_quoted_attribute(language)
                    )),
                    None => self.push("<pre class='src'>\n"),
                }
                self.push_lines(&block.lines);
                self.push("</pre>\n");
            }
            DelimitedKind::Html => {
                for line in &block.lines {
                    self.push(line);
                    self.push("\n");
                }
            }
            DelimitedKind::Comment => {}
        }
    }

    fn leave_delimited_block(&mut self, block: &DelimitedBlock) {
        match block.kind {
            DelimitedKind::Verse => self.push("\n</pre>\n"),
            DelimitedKind::Quote => self.push("\n</blockquote>\n"),
            DelimitedKind::Center => self.push("\n</center>\n"),
            _ => {}
        }
    }

    fn visit_inline(&mut self, node: &InlineNode) {
        if self.muted {
            return;
        }
        match node {
            InlineNode::Raw(text) => self.push_text(text),
            InlineNode::Emph { kind, .. } => {
                let (tag, class) = emph_tag(*kind);
                self.push(&format!("<{tag} class='{class}'>"));
            }
            InlineNode::Code(text) => {
                self.push("<code class='org-inline-code'>");
                self.push_text(text);
                self.push("</code>");
            }
            InlineNode::Verbatim(text) => {
                self.push("<samp class='org-inline-samp'>");
                self.push_text(text);
                self.push("</samp>");
            }
            InlineNode::Link(link) => {
                self.push(&format!(
                    "<a class='org-inline-link' href='{}'>",
                    encode_single_quoted_attribute(&link.url)
                ));
                self.push_text(&link.description);
                self.push("</a>");
            }
            InlineNode::FootnoteRef(name) => {
                let ordinal = self.footnotes.ordinal(name).unwrap_or(0);
                let name = encode_single_quoted_attribute(name);
                self.push(&format!(
                    "<a id='fnref_{name}' class='org-inline-fnref' href='#fndef_{name}'>\
                     <sup>{ordinal}</sup></a>"
                ));
            }
        }
    }

    fn leave_inline(&mut self, node: &InlineNode) {
        if self.muted {
            return;
        }
        if let InlineNode::Emph { kind, .. } = node {
            let (tag, _) = emph_tag(*kind);
            self.push(&format!("</{tag}>"));
        }
    }
}

/// HTML output; `output.show_footnotes` controls the footnote section.
pub struct HtmlFormatter;

impl Formatter for HtmlFormatter {
    fn name(&self) -> &'static str {
        "html"
    }

    fn description(&self) -> &'static str {
        "HTML fragment with a footnote section"
    }

    fn render(&self, doc: &Document, output: &OutputConfig) -> Result<String, FormatError> {
        Ok(render(doc, output.show_footnotes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::org::parsing::parse_document;

    #[test]
    fn paragraph_with_emphasis_and_link() {
        let doc = parse_document("A *bold* [[http://x.com?a=1&b=2][link]] & more\n");
        insta::assert_snapshot!(to_html(&doc), @r"
        <div class='org_content'>
        <p>
        A <strong class='org-inline-bold'>bold</strong> <a class='org-inline-link' href='http://x.com?a=1&amp;b=2'>link</a> &amp; more
        </p>
        </div>
        ");
    }

    #[test]
    fn ordered_list_keeps_start() {
        let doc = parse_document("3. three\n4. four\n");
        let html = to_html(&doc);
        assert!(html.contains("<ol start='3'>"));
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn definition_list_uses_dt_dd() {
        let doc = parse_document("- /term/ :: meaning\n");
        let html = to_html(&doc);
        assert!(html.contains(
            "<dl>\n<dt><em class='org-inline-italic'>term</em></dt>\n<dd>\n<p>\nmeaning\n</p>\n</dd>\n</dl>"
        ));
    }

    #[test]
    fn src_block_is_escaped() {
        let doc = parse_document("#+BEGIN_SRC rust\nlet x = a < b;\n#+END_SRC\n");
        let html = to_html(&doc);
        assert!(html.contains("<pre class='src lang-rust'>\nlet x = a &lt; b;\n</pre>"));
    }

    #[test]
    fn html_block_passes_through() {
        let doc = parse_document("#+BEGIN_HTML\n<b>raw</b>\n#+END_HTML\n");
        assert!(to_html(&doc).contains("<b>raw</b>\n"));
    }

    #[test]
    fn footnotes_link_both_ways() {
        let doc = parse_document("Text[fn:n].\n\n[fn:n] The /note/.\n");
        let html = to_html(&doc);
        assert!(html.contains("<a id='fnref_n' class='org-inline-fnref' href='#fndef_n'><sup>1</sup></a>"));
        assert!(html.contains("<section class='org-footnotes'>"));
        assert_eq!(html.matches("The <em class='org-inline-italic'>note</em>.").count(), 1);

        let output = OutputConfig {
            show_footnotes: false,
            ..OutputConfig::default()
        };
        let without = HtmlFormatter.render(&doc, &output).unwrap();
        assert!(!without.contains("org-footnotes"));
    }

    #[test]
    fn comments_render_as_html_comments() {
        let doc = parse_document("# a -- b\n");
        assert!(to_html(&doc).contains("<!-- a - - b -->"));
    }
}
