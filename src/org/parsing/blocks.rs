//! Block model
//!
//!     Every block that is still open during a parse is an [OpenBlock]. The driver talks to it
//!     through three operations:
//!
//!         accept:   may this block absorb the line itself? Never mutates.
//!         consume:  absorb the line. Containers answer with a [Delegation] when the line
//!                   belongs to a fresh child, which the driver pushes and feeds.
//!         finalize: the block will take no more lines. Markup-bearing blocks tokenize their
//!                   text here and the open block turns into its AST node.
//!
//!     The grammar lives in the accept rules:
//!
//!         Root        everything.
//!         List        an item line of its own kind at exactly its own indent.
//!         Item        blank lines and lines indented deeper than its list.
//!         Paragraph   paragraph lines until the first blank line. Past indent 0, continuation
//!                     lines must be indented deeper than the paragraph.
//!         Ignored     blank lines after its one line.
//!         Footnote    any line until a blank ends it, then blank lines only.
//!         Delimited   anything until its end marker.
//!
//!     A rejected line makes the driver close the block and offer the line to its parent,
//!     which is how dedents and sibling blocks are found.

use regex::Regex;
use tracing::warn;

use crate::org::ast::{
    Block, DefinitionItem, DefinitionList, DelimitedBlock, FootnoteDefinition,
    FootnoteRegistry, IgnoredLine, InlineContent, ListItem, OrderedItem, OrderedList, Paragraph,
    UnorderedList,
};
use crate::org::inlines::InlineTokenizer;
use crate::org::lexing::patterns::{self, blank_marker, indent_of};
use crate::org::lexing::{DelimitedKind, LineClassifier, LineKind};

/// What blocks need from the parse while they consume and close.
pub(crate) struct BlockContext<'a> {
    pub tab_width: usize,
    pub tokenizer: &'a InlineTokenizer,
    pub footnotes: &'a mut FootnoteRegistry,
    pub classifier: &'a mut LineClassifier,
}

impl BlockContext<'_> {
    fn indent_of(&self, line: &str) -> usize {
        indent_of(line, self.tab_width)
    }

    /// Tokenize and record the footnote references found.
    fn tokenize(&mut self, text: &str) -> InlineContent {
        let content = self.tokenizer.tokenize(text);
        self.footnotes.note_references(&content);
        content
    }
}

/// A fresh child and the line it must consume first.
#[derive(Debug)]
pub(crate) struct Delegation {
    pub block: OpenBlock,
    pub line: String,
}

/// A block that has been finalized, ready to be adopted by its parent.
#[derive(Debug)]
pub(crate) enum Closed {
    Root(Vec<Block>),
    Block(Block),
    Item(ClosedItem),
}

#[derive(Debug)]
pub(crate) enum ClosedItem {
    Unordered(ListItem),
    Ordered(OrderedItem),
    Definition(DefinitionItem),
}

#[derive(Debug)]
pub(crate) enum OpenBlock {
    Root(Vec<Block>),
    List(OpenList),
    Item(OpenItem),
    Paragraph(OpenParagraph),
    Ignored(Option<String>),
    Footnote(OpenFootnote),
    Delimited(OpenDelimited),
}

#[derive(Debug)]
pub(crate) struct OpenList {
    indent: usize,
    items: ListItems,
}

#[derive(Debug)]
enum ListItems {
    Unordered(Vec<ListItem>),
    Ordered { start: u32, items: Vec<OrderedItem> },
    Definition(Vec<DefinitionItem>),
}

#[derive(Debug)]
pub(crate) struct OpenItem {
    marker: ItemMarker,
    list_indent: usize,
    started: bool,
    children: Vec<Block>,
}

#[derive(Debug)]
enum ItemMarker {
    Unordered,
    Ordered(u32),
    Definition(InlineContent),
}

#[derive(Debug)]
pub(crate) struct OpenParagraph {
    indent: usize,
    lines: Vec<String>,
    ended: bool,
}

#[derive(Debug)]
pub(crate) struct OpenFootnote {
    name: String,
    indent: usize,
    lines: Vec<String>,
    ended: bool,
}

#[derive(Debug)]
pub(crate) struct OpenDelimited {
    kind: DelimitedKind,
    indent: usize,
    lines: Vec<String>,
    language: Option<String>,
    ended: bool,
}

impl OpenBlock {
    pub(crate) fn root() -> Self {
        OpenBlock::Root(Vec::new())
    }

    /// Name used in logs.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            OpenBlock::Root(_) => "Root",
            OpenBlock::List(list) => match list.items {
                ListItems::Unordered(_) => "UnorderedList",
                ListItems::Ordered { .. } => "OrderedList",
                ListItems::Definition(_) => "DefinitionList",
            },
            OpenBlock::Item(item) => match item.marker {
                ItemMarker::Unordered => "ListItem",
                ItemMarker::Ordered(_) => "OrderedItem",
                ItemMarker::Definition(_) => "DefinitionItem",
            },
            OpenBlock::Paragraph(_) => "Paragraph",
            OpenBlock::Ignored(_) => "IgnoredLine",
            OpenBlock::Footnote(_) => "FootnoteDefinition",
            OpenBlock::Delimited(d) => d.kind.keyword(),
        }
    }

    pub(crate) fn accept(&self, line: &str, kind: LineKind, tab_width: usize) -> bool {
        match self {
            OpenBlock::Root(_) => true,
            OpenBlock::List(list) => {
                kind == list.item_kind() && indent_of(line, tab_width) == list.indent
            }
            OpenBlock::Item(item) => {
                kind == LineKind::Blank || indent_of(line, tab_width) > item.list_indent
            }
            OpenBlock::Paragraph(p) => {
                if kind == LineKind::Blank {
                    return true;
                }
                if p.ended || kind != LineKind::Paragraph {
                    return false;
                }
                p.indent == 0 || indent_of(line, tab_width) > p.indent
            }
            OpenBlock::Ignored(content) => content.is_none() || kind == LineKind::Blank,
            OpenBlock::Footnote(f) => match kind {
                LineKind::Blank => true,
                _ => !f.ended,
            },
            OpenBlock::Delimited(d) => !d.ended,
        }
    }

    pub(crate) fn consume(
        &mut self,
        line: &str,
        kind: LineKind,
        ctx: &mut BlockContext<'_>,
    ) -> Option<Delegation> {
        match self {
            OpenBlock::Root(_) => delegate(line.to_string(), kind, 0, ctx),
            OpenBlock::List(list) => Some(Delegation {
                block: OpenBlock::Item(list.new_item(line, ctx)),
                line: line.to_string(),
            }),
            OpenBlock::Item(item) => {
                if item.started {
                    return delegate(line.to_string(), kind, item.list_indent, ctx);
                }
                item.started = true;
                let rewritten = blank_marker(line, item.marker_pattern());
                let kind = ctx.classifier.classify(&rewritten);
                delegate(rewritten, kind, item.list_indent, ctx)
            }
            OpenBlock::Paragraph(p) => {
                if kind == LineKind::Blank {
                    p.ended = true;
                } else {
                    p.lines.push(line.to_string());
                }
                None
            }
            OpenBlock::Ignored(content) => {
                if content.is_none() && kind != LineKind::Blank {
                    *content = Some(patterns::IGNORED_PREFIX.replace(line, "").into_owned());
                }
                None
            }
            OpenBlock::Footnote(f) => {
                match kind {
                    LineKind::Blank => f.ended = true,
                    LineKind::Ignored => {}
                    _ => f.lines.push(line.to_string()),
                }
                None
            }
            OpenBlock::Delimited(d) => {
                d.consume(line, kind);
                None
            }
        }
    }

    pub(crate) fn finalize(self, ctx: &mut BlockContext<'_>) -> Closed {
        match self {
            OpenBlock::Root(children) => Closed::Root(children),
            OpenBlock::List(list) => Closed::Block(list.into_block()),
            OpenBlock::Item(item) => Closed::Item(item.into_item()),
            OpenBlock::Paragraph(p) => {
                let inlines = ctx.tokenize(&unindented(&p.lines));
                Closed::Block(Block::Paragraph(Paragraph::new(p.indent, p.lines, inlines)))
            }
            OpenBlock::Ignored(content) => Closed::Block(Block::IgnoredLine(IgnoredLine::new(
                content.unwrap_or_default(),
            ))),
            OpenBlock::Footnote(f) => {
                let text = unindented(&f.lines);
                let body = patterns::FOOTNOTE_TAG.replace(&text, "$1");
                let content = ctx.tokenizer.tokenize(body.trim_start());
                ctx.footnotes.define(&f.name, content.clone());
                ctx.footnotes.note_references(&content);
                Closed::Block(Block::FootnoteDefinition(FootnoteDefinition {
                    name: f.name,
                    indent: f.indent,
                    lines: f.lines,
                    inlines: content,
                }))
            }
            OpenBlock::Delimited(d) => {
                if !d.ended {
                    warn!(
                        kind = d.kind.keyword(),
                        lines = d.lines.len(),
                        "block runs to the end of the input without an end marker"
                    );
                }
                let inlines = d
                    .kind
                    .has_markup()
                    .then(|| ctx.tokenize(&d.lines.join("\n")));
                Closed::Block(Block::Delimited(DelimitedBlock {
                    kind: d.kind,
                    indent: d.indent,
                    lines: d.lines,
                    inlines,
                    language: d.language,
                    terminated: d.ended,
                }))
            }
        }
    }

    /// Take ownership of a finalized child.
    ///
    /// Panics when the child can't belong here. The accept rules make that impossible, so it
    /// means the grammar itself is broken.
    pub(crate) fn adopt(&mut self, child: Closed) {
        match (self, child) {
            (OpenBlock::Root(children), Closed::Block(block))
            | (OpenBlock::Item(OpenItem { children, .. }), Closed::Block(block)) => {
                children.push(block)
            }
            (OpenBlock::List(list), Closed::Item(item)) => list.push(item),
            (parent, child) => unreachable!("{} cannot adopt {:?}", parent.name(), child),
        }
    }
}

/// Open the block a non-blank line starts, inside a container whose paragraphs sit at
/// `owner_indent`. Blank lines open nothing.
fn delegate(
    line: String,
    kind: LineKind,
    owner_indent: usize,
    ctx: &mut BlockContext<'_>,
) -> Option<Delegation> {
    let indent = ctx.indent_of(&line);
    let block = match kind {
        LineKind::Blank => return None,
        LineKind::Paragraph => OpenBlock::Paragraph(OpenParagraph {
            indent: owner_indent,
            lines: Vec::new(),
            ended: false,
        }),
        LineKind::Ignored => OpenBlock::Ignored(None),
        LineKind::UnorderedItem => OpenBlock::List(OpenList {
            indent,
            items: ListItems::Unordered(Vec::new()),
        }),
        LineKind::OrderedItem => OpenBlock::List(OpenList {
            indent,
            items: ListItems::Ordered {
                start: ordered_number(&line),
                items: Vec::new(),
            },
        }),
        LineKind::DefinitionItem => OpenBlock::List(OpenList {
            indent,
            items: ListItems::Definition(Vec::new()),
        }),
        LineKind::FootnoteDef => OpenBlock::Footnote(OpenFootnote {
            name: patterns::FOOTNOTE_DEF_NAME
                .captures(&line)
                .map(|caps| caps[1].to_string())
                .unwrap_or_default(),
            indent,
            lines: Vec::new(),
            ended: false,
        }),
        LineKind::Verse
        | LineKind::Quote
        | LineKind::Center
        | LineKind::Example
        | LineKind::Src
        | LineKind::Html
        | LineKind::Comment => {
            let Some(delimited) = kind.delimited() else {
                unreachable!("{kind:?} is a delimited kind");
            };
            OpenBlock::Delimited(OpenDelimited {
                kind: delimited,
                indent,
                lines: Vec::new(),
                language: None,
                ended: false,
            })
        }
    };
    Some(Delegation { block, line })
}

/// The `[@N]` counter reset of an ordered item line, else its literal number.
fn ordered_number(line: &str) -> u32 {
    patterns::ORDERED_NUMBER
        .captures(line)
        .and_then(|caps| {
            caps.get(2)
                .or_else(|| caps.get(1))
                .and_then(|m| m.as_str().parse().ok())
        })
        .unwrap_or(1)
}

/// Lines joined for tokenizing, each stripped of its leading whitespace.
fn unindented(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| line.trim_start())
        .collect::<Vec<_>>()
        .join("\n")
}

impl OpenList {
    fn item_kind(&self) -> LineKind {
        match self.items {
            ListItems::Unordered(_) => LineKind::UnorderedItem,
            ListItems::Ordered { .. } => LineKind::OrderedItem,
            ListItems::Definition(_) => LineKind::DefinitionItem,
        }
    }

    fn new_item(&self, line: &str, ctx: &mut BlockContext<'_>) -> OpenItem {
        let marker = match self.items {
            ListItems::Unordered(_) => ItemMarker::Unordered,
            ListItems::Ordered { .. } => ItemMarker::Ordered(ordered_number(line)),
            ListItems::Definition(_) => {
                let title = patterns::DEFINITION_TITLE
                    .captures(line)
                    .map(|caps| caps[1].to_string())
                    .unwrap_or_default();
                ItemMarker::Definition(ctx.tokenize(&title))
            }
        };
        OpenItem {
            marker,
            list_indent: self.indent,
            started: false,
            children: Vec::new(),
        }
    }

    fn push(&mut self, item: ClosedItem) {
        let kind = self.item_kind();
        match (&mut self.items, item) {
            (ListItems::Unordered(items), ClosedItem::Unordered(item)) => items.push(item),
            (ListItems::Ordered { items, .. }, ClosedItem::Ordered(item)) => items.push(item),
            (ListItems::Definition(items), ClosedItem::Definition(item)) => items.push(item),
            (_, item) => unreachable!("{:?} cannot join a {:?} list", item, kind),
        }
    }

    fn into_block(self) -> Block {
        let indent = self.indent;
        match self.items {
            ListItems::Unordered(items) => Block::UnorderedList(UnorderedList { indent, items }),
            ListItems::Ordered { start, items } => Block::OrderedList(OrderedList {
                indent,
                start,
                items,
            }),
            ListItems::Definition(items) => {
                Block::DefinitionList(DefinitionList { indent, items })
            }
        }
    }
}

impl OpenItem {
    fn marker_pattern(&self) -> &'static Regex {
        match self.marker {
            ItemMarker::Unordered => &*patterns::UNORDERED_MARKER,
            ItemMarker::Ordered(_) => &*patterns::ORDERED_MARKER,
            ItemMarker::Definition(_) => &*patterns::DEFINITION_MARKER,
        }
    }

    fn into_item(self) -> ClosedItem {
        match self.marker {
            ItemMarker::Unordered => ClosedItem::Unordered(ListItem::new(self.children)),
            ItemMarker::Ordered(number) => {
                ClosedItem::Ordered(OrderedItem::new(number, self.children))
            }
            ItemMarker::Definition(title) => {
                ClosedItem::Definition(DefinitionItem::new(title, self.children))
            }
        }
    }
}

impl OpenDelimited {
    fn consume(&mut self, line: &str, kind: LineKind) {
        if patterns::begin_marker(self.kind).is_match(line) {
            self.treat_begin(line);
        } else if patterns::end_marker(self.kind).is_match(line) {
            self.ended = true;
        } else if self.kind.is_verbatim() || kind != LineKind::Ignored {
            self.lines.push(line.to_string());
        }
    }

    fn treat_begin(&mut self, line: &str) {
        if self.kind == DelimitedKind::Src && self.language.is_none() {
            self.language = patterns::SRC_LANGUAGE
                .captures(line)
                .map(|caps| caps[1].to_string());
        }
    }
}
