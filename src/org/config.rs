//! Configuration loading
//!
//! `defaults/orgtext.default.toml` is embedded into the crate so that documentation and
//! runtime behavior stay in sync. Callers layer their own files and overrides on top of the
//! defaults with [`Loader`] before deserializing into [`OrgConfig`].
//!
//! The parser only needs [`ParserConfig`]. It has a `Default` matching the embedded file, so
//! library users that never touch TOML can skip the loader entirely.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/orgtext.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgConfig {
    pub parser: ParserConfig,
    pub output: OutputConfig,
}

/// Knobs consumed by the parser and the inline tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Columns a tab counts for when measuring indentation.
    pub tab_width: usize,
    /// Protocols recognized in bare urls.
    pub url_protocols: Vec<String>,
    /// Base of the placeholder tokens links are swapped for during inline scanning.
    pub link_placeholder_prefix: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            tab_width: 8,
            url_protocols: [
                "http", "https", "ftp", "mailto", "file", "news", "shell", "elisp", "doi",
                "message",
            ]
            .iter()
            .map(|p| p.to_string())
            .collect(),
            link_placeholder_prefix: "OrgLinkToken".to_string(),
        }
    }
}

impl ParserConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tab_width == 0 {
            return Err(invalid("parser.tab_width must be at least 1"));
        }
        let prefix = &self.link_placeholder_prefix;
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(invalid(format!(
                "parser.link_placeholder_prefix must be ASCII letters and digits, got {prefix:?}"
            )));
        }
        if let Some(bad) = self
            .url_protocols
            .iter()
            .find(|p| p.is_empty() || !p.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'))
        {
            return Err(invalid(format!(
                "parser.url_protocols entries must be ASCII words, got {bad:?}"
            )));
        }
        Ok(())
    }
}

/// Output options read by the command line tool and the HTML renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default format name for `convert`.
    pub format: String,
    /// Whether HTML output ends with the footnote section.
    pub show_footnotes: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "html".to_string(),
            show_footnotes: true,
        }
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::Message(message.into())
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder, deserialize and validate the resulting configuration.
    pub fn build(self) -> Result<OrgConfig, ConfigError> {
        let config: OrgConfig = self.builder.build()?.try_deserialize()?;
        config.parser.validate()?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<OrgConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_defaults_match_default_impls() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.parser, ParserConfig::default());
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("parser.tab_width", 4_i64)
            .expect("override to apply")
            .set_override("output.format", "treeviz")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.parser.tab_width, 4);
        assert_eq!(config.output.format, "treeviz");
    }

    #[test]
    fn rejects_zero_tab_width() {
        let err = Loader::new()
            .set_override("parser.tab_width", 0_i64)
            .expect("override to apply")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("tab_width"));
    }

    #[test]
    fn rejects_prefix_with_markup_characters() {
        let config = ParserConfig {
            link_placeholder_prefix: "LINK_".to_string(),
            ..ParserConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_protocol_with_colon() {
        let config = ParserConfig {
            url_protocols: vec!["http:".to_string()],
            ..ParserConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn layers_files_over_defaults() {
        let dir = std::env::temp_dir().join(format!("orgtext-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("custom.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[parser]\ntab_width = 2\n[output]\nshow_footnotes = false").unwrap();

        let config = Loader::new()
            .with_file(&path)
            .with_optional_file(dir.join("missing.toml"))
            .build()
            .expect("config to build");
        assert_eq!(config.parser.tab_width, 2);
        assert_eq!(config.parser.link_placeholder_prefix, "OrgLinkToken");
        assert!(!config.output.show_footnotes);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_required_file_is_an_error() {
        assert!(Loader::new()
            .with_file("/definitely/not/here/orgtext.toml")
            .build()
            .is_err());
    }
}
