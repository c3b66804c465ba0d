//! Footnote registry
//!
//! Owned by the [Document](super::Document). Maps a footnote name to its display ordinal and
//! its tokenized body.
//!
//! Ordinals are handed out at first mention, whether the first mention is a reference in the
//! text or the definition itself, starting at 1. Blocks are closed in document order, so this is
//! document order. A reference that never gets a definition keeps an entry with no body. A name
//! defined twice keeps its first ordinal and takes the last body.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use super::elements::inlines::{InlineContent, InlineNode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footnote {
    pub ordinal: usize,
    pub body: Option<InlineContent>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FootnoteRegistry {
    by_name: HashMap<String, Footnote>,
    /// Names in ordinal order.
    order: Vec<String>,
}

impl FootnoteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reference to `name`, returning its ordinal.
    pub fn reference(&mut self, name: &str) -> usize {
        self.entry(name).ordinal
    }

    /// Record the definition of `name`, returning its ordinal.
    pub fn define(&mut self, name: &str, body: InlineContent) -> usize {
        let entry = self.entry(name);
        if entry.body.is_some() {
            warn!(name, "footnote defined more than once, keeping the last definition");
        }
        entry.body = Some(body);
        entry.ordinal
    }

    /// Record every footnote reference found in `content`, recursing into emphasis.
    pub fn note_references(&mut self, content: &[InlineNode]) {
        for node in content {
            match node {
                InlineNode::FootnoteRef(name) => {
                    self.reference(name);
                }
                InlineNode::Emph { children, .. } => self.note_references(children),
                _ => {}
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Footnote> {
        self.by_name.get(name)
    }

    pub fn ordinal(&self, name: &str) -> Option<usize> {
        self.get(name).map(|f| f.ordinal)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Footnote)> {
        self.order
            .iter()
            .filter_map(|name| self.by_name.get(name).map(|f| (name.as_str(), f)))
    }

    fn entry(&mut self, name: &str) -> &mut Footnote {
        let order = &mut self.order;
        self.by_name.entry(name.to_string()).or_insert_with(|| {
            order.push(name.to_string());
            Footnote {
                ordinal: order.len(),
                body: None,
            }
        })
    }
}
