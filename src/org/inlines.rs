//! Inline tokenizer
//!
//!     Turns the text of a markup-bearing block into an inline forest: raw runs, emphasis
//!     spans, code and verbatim leaves, links and footnote references.
//!
//!     Tokenizing is two phases:
//!
//!         1. Pre-extraction. Links and footnote references are replaced by placeholder
//!            tokens so nothing inside them is read as emphasis. See [placeholders].
//!         2. Emphasis scan. A single regex walks the masked text, recursing into emphasized
//!            bodies. See [emphasis].
//!
//!     Finally the placeholder tokens left in the forest are resolved back into link and
//!     footnote-reference nodes.
//!
//!     Every call owns its placeholder table, so tokenizing the same text twice gives the
//!     same forest.

mod emphasis;
mod placeholders;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::org::ast::InlineContent;
use crate::org::config::ParserConfig;

use placeholders::Placeholders;

static DEFAULT_TOKENIZER: Lazy<InlineTokenizer> =
    Lazy::new(|| InlineTokenizer::new(&ParserConfig::default()));

/// Tokenize `text` with the default configuration.
pub fn tokenize(text: &str) -> InlineContent {
    DEFAULT_TOKENIZER.tokenize(text)
}

/// Inline tokenizer bound to one configuration.
#[derive(Debug, Clone)]
pub struct InlineTokenizer {
    bare_url: Option<Regex>,
    placeholder_prefix: String,
}

impl InlineTokenizer {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            bare_url: bare_url_regex(&config.url_protocols),
            placeholder_prefix: config.link_placeholder_prefix.clone(),
        }
    }

    pub fn tokenize(&self, text: &str) -> InlineContent {
        let mut placeholders = Placeholders::new(text, &self.placeholder_prefix);
        let masked = placeholders.extract(text, self.bare_url.as_ref());
        let scanned = emphasis::scan(&masked);
        if placeholders.is_empty() {
            scanned
        } else {
            placeholders.resolve(scanned)
        }
    }
}

impl Default for InlineTokenizer {
    fn default() -> Self {
        Self::new(&ParserConfig::default())
    }
}

/// `(?i)(?:http|https|...):[^\s]+`, or `None` when no protocol is configured.
fn bare_url_regex(protocols: &[String]) -> Option<Regex> {
    if protocols.is_empty() {
        return None;
    }
    let alternation = protocols
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");
    match Regex::new(&format!(r"(?i)(?:{alternation}):[^\s]+")) {
        Ok(re) => Some(re),
        Err(err) => {
            warn!(%err, "bare url recognition disabled");
            None
        }
    }
}
