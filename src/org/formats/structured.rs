//! Structured data formats
//!
//! Both formats serialize the [AstSnapshot](crate::org::ast::AstSnapshot) of the document,
//! so they carry exactly what treeviz shows, attributes included, in a machine readable form.

use crate::org::ast::{snapshot_from_document, Document};
use crate::org::config::OutputConfig;

use super::registry::{FormatError, Formatter};

/// Pretty-printed JSON snapshot
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn description(&self) -> &'static str {
        "AST snapshot as pretty-printed JSON"
    }

    fn render(&self, doc: &Document, _output: &OutputConfig) -> Result<String, FormatError> {
        serde_json::to_string_pretty(&snapshot_from_document(doc))
            .map_err(|e| FormatError::encode(self.name(), e))
    }
}

/// YAML snapshot
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn description(&self) -> &'static str {
        "AST snapshot as YAML"
    }

    fn render(&self, doc: &Document, _output: &OutputConfig) -> Result<String, FormatError> {
        serde_yaml::to_string(&snapshot_from_document(doc))
            .map_err(|e| FormatError::encode(self.name(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::org::ast::AstSnapshot;
    use crate::org::parsing::parse_document;

    #[test]
    fn json_round_trips_through_snapshot() {
        let doc = parse_document("3. three\n4. four\n");
        let json = JsonFormatter.render(&doc, &OutputConfig::default()).unwrap();
        let snapshot: AstSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, snapshot_from_document(&doc));
        assert_eq!(snapshot.children[0].attributes["start"], "3");
    }

    #[test]
    fn yaml_carries_node_types() {
        let doc = parse_document("#+BEGIN_QUOTE\nsaid\n#+END_QUOTE\n");
        let yaml = YamlFormatter.render(&doc, &OutputConfig::default()).unwrap();
        assert!(yaml.contains("node_type: QuoteBlock"));
        assert!(yaml.contains("terminated:"));
    }
}
