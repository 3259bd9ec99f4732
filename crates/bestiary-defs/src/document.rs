//! The definition document format.
//!
//! A definition document is a single JSON object mapping entity names to
//! `{ "kind": ..., "attributes": { ... } }` records. Parsing is all-or-nothing:
//! a structurally malformed document aborts the whole load with
//! [`DefsError::Malformed`] and no partial result. Whether a `kind` tag
//! actually resolves to a known variant is a semantic question answered later
//! by the kind catalog, not here.
//!
//! Each parse also produces a BLAKE3 fingerprint of the raw source so
//! operators can tell one loaded revision from another in the logs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attributes::AttributeBag;
use crate::DefsError;

// ---------------------------------------------------------------------------
// RawDefinition
// ---------------------------------------------------------------------------

/// One entity definition as it appears in the document: a kind tag plus an
/// optional attribute block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDefinition {
    /// Which kind variant this definition configures (e.g. `"llama"`).
    pub kind: String,
    /// Loosely-typed configuration for the kind. Missing blocks read as empty.
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl RawDefinition {
    /// Convert the raw attribute block into a typed [`AttributeBag`].
    pub fn attribute_bag(&self) -> AttributeBag {
        AttributeBag::from_json(&self.attributes)
    }
}

// ---------------------------------------------------------------------------
// DefinitionDocument
// ---------------------------------------------------------------------------

/// A parsed definition document: entity name to raw definition, in
/// deterministic (sorted) order.
#[derive(Debug, Clone, Default)]
pub struct DefinitionDocument {
    entries: BTreeMap<String, RawDefinition>,
}

impl DefinitionDocument {
    /// Parse a document from JSON source.
    ///
    /// Any structural problem (invalid JSON, wrong top-level shape, a
    /// definition missing its `kind` tag) fails the entire parse.
    pub fn parse(source: &str) -> Result<Self, DefsError> {
        let entries: BTreeMap<String, RawDefinition> =
            serde_json::from_str(source).map_err(|e| DefsError::Malformed {
                details: e.to_string(),
            })?;
        Ok(Self { entries })
    }

    /// Look up a single raw definition by entity name.
    pub fn get(&self, name: &str) -> Option<&RawDefinition> {
        self.entries.get(name)
    }

    /// Iterate definitions in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawDefinition)> {
        self.entries.iter().map(|(name, raw)| (name.as_str(), raw))
    }

    /// Number of definitions in the document.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Fingerprinting
// ---------------------------------------------------------------------------

/// BLAKE3 hex digest of a document's raw source.
///
/// Recorded on every load so a reload of identical content is recognizable
/// in the logs.
pub fn fingerprint(source: &str) -> String {
    blake3::hash(source.as_bytes()).to_hex().to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "fast_llama": {
            "kind": "llama",
            "attributes": { "strength": 9, "color": "BROWN", "is_carrying_chest": true }
        },
        "plain_boss": { "kind": "wither" }
    }"#;

    // -- 1. Well-formed documents parse --------------------------------------

    #[test]
    fn parse_well_formed_document() {
        let doc = DefinitionDocument::parse(SAMPLE).unwrap();
        assert_eq!(doc.len(), 2);

        let llama = doc.get("fast_llama").unwrap();
        assert_eq!(llama.kind, "llama");
        let bag = llama.attribute_bag();
        assert_eq!(bag.get_int("strength", -1), 9);
        assert_eq!(bag.get_str("color", ""), "BROWN");
        assert!(bag.get_bool("is_carrying_chest", false));
    }

    #[test]
    fn missing_attribute_block_reads_as_empty() {
        let doc = DefinitionDocument::parse(SAMPLE).unwrap();
        let boss = doc.get("plain_boss").unwrap();
        assert!(boss.attribute_bag().is_empty());
    }

    #[test]
    fn iteration_is_name_ordered() {
        let doc = DefinitionDocument::parse(SAMPLE).unwrap();
        let names: Vec<&str> = doc.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["fast_llama", "plain_boss"]);
    }

    // -- 2. Malformed documents abort the whole parse ------------------------

    #[test]
    fn invalid_json_is_malformed() {
        let err = DefinitionDocument::parse("{ not json").unwrap_err();
        assert!(matches!(err, DefsError::Malformed { .. }));
    }

    #[test]
    fn wrong_top_level_shape_is_malformed() {
        let err = DefinitionDocument::parse(r#"[1, 2, 3]"#).unwrap_err();
        assert!(matches!(err, DefsError::Malformed { .. }));
    }

    #[test]
    fn definition_without_kind_is_malformed() {
        let err = DefinitionDocument::parse(r#"{ "x": { "attributes": {} } }"#).unwrap_err();
        assert!(matches!(err, DefsError::Malformed { .. }));
    }

    // -- 3. Fingerprints -----------------------------------------------------

    #[test]
    fn fingerprint_is_stable_and_content_addressed() {
        let a = fingerprint(SAMPLE);
        let b = fingerprint(SAMPLE);
        let c = fingerprint("{}");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }
}
