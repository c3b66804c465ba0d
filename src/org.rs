//! Main module for orgtext library functionality
//!
//!     Source text flows one way:
//!
//!         [lexing] -> [parsing] -> [ast] -> [formats]
//!
//!     with [inlines] called by the parser whenever a markup-bearing block closes, and [config]
//!     supplying the knobs. [testing] holds the helpers the integration tests are written with.

pub mod ast;
pub mod config;
pub mod formats;
pub mod inlines;
pub mod lexing;
pub mod parsing;
pub mod testing;
