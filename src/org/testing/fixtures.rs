//! Sample documents for tests
//!
//!     The `.org` files under `tests/fixtures/` are the vetted samples every document level
//!     test should start from. Hand-written inline sources are fine for a single construct, but
//!     anything that exercises several blocks together belongs in a fixture, so a change to the
//!     markup rules only needs the samples updated in one place.
//!
//!     ```rust,ignore
//!     use orgtext::org::testing::Fixture;
//!
//!     let doc = Fixture::named("lists").parse();
//!     let source = Fixture::named("footnotes").source();
//!     for fixture in Fixture::all() { ... }
//!     ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::org::ast::Document;
use crate::org::parsing::parse_document;

const FIXTURE_DIR: &str = "tests/fixtures";
const EXTENSION: &str = "org";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    name: String,
    path: PathBuf,
}

impl Fixture {
    fn dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join(FIXTURE_DIR)
    }

    /// The fixture `tests/fixtures/<name>.org`
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            path: Self::dir().join(format!("{name}.{EXTENSION}")),
        }
    }

    /// Every fixture, sorted by name
    pub fn all() -> Vec<Self> {
        let entries = fs::read_dir(Self::dir())
            .unwrap_or_else(|e| panic!("Cannot read {}: {}", FIXTURE_DIR, e));
        let mut fixtures: Vec<Self> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == EXTENSION))
            .filter_map(|path| {
                let name = path.file_stem()?.to_str()?.to_string();
                Some(Self { name, path })
            })
            .collect();
        fixtures.sort_by(|a, b| a.name.cmp(&b.name));
        fixtures
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw source, panicking if the file is missing
    pub fn source(&self) -> String {
        fs::read_to_string(&self.path)
            .unwrap_or_else(|e| panic!("Cannot read fixture {}: {}", self.path.display(), e))
    }

    /// Source split into lines, terminators removed
    pub fn lines(&self) -> Vec<String> {
        crate::org::lexing::split_lines(&self.source())
    }

    pub fn parse(&self) -> Document {
        parse_document(&self.source())
    }
}
