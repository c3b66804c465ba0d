//! # orgtext
//!
//! A parser for org-style wiki content: lists, paragraphs, delimited blocks, footnotes and
//! inline emphasis, producing a tree that renderers walk.
//!
//! ```rust,ignore
//! use orgtext::org::formats::to_html;
//! use orgtext::org::parsing::parse_document;
//!
//! let doc = parse_document("- a *bold* item\n- [[http://example.com][a link]]\n");
//! println!("{}", to_html(&doc));
//! ```
//!
//! ## Testing
//!
//! For testing guidelines, see the [testing module](org::testing).

pub mod org;
