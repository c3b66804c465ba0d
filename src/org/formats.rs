//! Output format implementations for AST serialization
//!
//! This module contains the formats a parsed [Document](crate::org::ast::Document) can be
//! written to:
//! - html: the rendered fragment, footnote section included
//! - treeviz: one line per node, for eyeballing the tree
//! - json, yaml: the AST snapshot as structured data

pub mod html;
pub mod registry;
pub mod structured;
pub mod treeviz;

pub use html::{to_html, HtmlFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use structured::{JsonFormatter, YamlFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
