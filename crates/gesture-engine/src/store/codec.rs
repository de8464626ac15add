use serde::{Deserialize, Serialize};

use crate::error::PersistError;
use crate::pattern::descriptor::PatternDescriptor;
use crate::store::registry::SymbolStore;
use crate::store::symbol::{SymbolEntry, DEFAULT_MAX_PATTERNS};

/// On-disk form of the symbol database.
///
/// ```json
/// { "symbols": [ { "symbolName": "leaf", "maxPatterns": 10,
///     "patterns": [ { "normalizedPoints": [[0.0, 0.0], ...],
///                     "directions": [[1.0, 0.0], ...],
///                     "totalDistance": 2.4, "pointCount": 12 } ] } ] }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymbolDatabase {
    #[serde(default)]
    pub symbols: Vec<StoredSymbol>,
}

/// One symbol with its templates, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSymbol {
    pub symbol_name: String,
    #[serde(default = "default_max_patterns")]
    pub max_patterns: usize,
    #[serde(default)]
    pub patterns: Vec<PatternDescriptor>,
}

fn default_max_patterns() -> usize {
    DEFAULT_MAX_PATTERNS
}

impl SymbolDatabase {
    /// Parse a database from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Snapshot a store. Descriptors are stored verbatim, directions included.
    pub fn from_store(store: &SymbolStore) -> Self {
        let symbols = store
            .entries()
            .map(|entry| StoredSymbol {
                symbol_name: entry.name().to_string(),
                max_patterns: entry.max_patterns(),
                patterns: entry.templates().cloned().collect(),
            })
            .collect();
        Self { symbols }
    }

    /// Build a store. Stored directions are trusted as-is, not recomputed,
    /// and every stored template is kept even past `maxPatterns`.
    /// A `maxPatterns` of 0 is read as 1. A later duplicate name replaces
    /// an earlier one.
    pub fn into_store(self, max_patterns: usize) -> SymbolStore {
        let mut store = SymbolStore::with_capacity(max_patterns);
        for symbol in self.symbols {
            store.insert_entry(SymbolEntry::from_stored(
                symbol.symbol_name,
                symbol.max_patterns,
                symbol.patterns,
            ));
        }
        store
    }

    pub fn symbol_names(&self) -> Vec<String> {
        self.symbols.iter().map(|s| s.symbol_name.clone()).collect()
    }
}

impl SymbolStore {
    /// Serialize the whole store.
    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(SymbolDatabase::from_store(self).to_json()?)
    }

    /// Parse a store. New symbols added later get the default capacity.
    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        Ok(SymbolDatabase::from_json(json)?.into_store(DEFAULT_MAX_PATTERNS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn sample_store() -> SymbolStore {
        let mut store = SymbolStore::new();
        store.add_pattern(
            "leaf",
            PatternDescriptor::from_points(&[
                Vec2::new(0.0, 0.0),
                Vec2::new(0.3, 0.9),
                Vec2::new(1.1, 1.7),
            ]),
        );
        store.add_pattern(
            "leaf",
            PatternDescriptor::from_points(&[
                Vec2::new(0.0, 0.1),
                Vec2::new(0.2, 1.0),
                Vec2::new(0.9, 1.3),
                Vec2::new(1.0, 1.9),
            ]),
        );
        store.add_pattern(
            "wave",
            PatternDescriptor::from_points(&[
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(2.0, 0.0),
                Vec2::new(3.0, 1.0),
            ]),
        );
        store
    }

    fn template_at(bend: f32) -> PatternDescriptor {
        PatternDescriptor::from_points(&[
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, bend),
            Vec2::new(2.0, 0.5),
        ])
    }

    #[test]
    fn round_trip_preserves_store() {
        let store = sample_store();
        let json = store.to_json().unwrap();
        let loaded = SymbolStore::from_json(&json).unwrap();

        assert_eq!(loaded.symbols().collect::<Vec<_>>(), vec!["leaf", "wave"]);
        for name in ["leaf", "wave"] {
            let a: Vec<_> = store.get(name).unwrap().templates().collect();
            let b: Vec<_> = loaded.get(name).unwrap().templates().collect();
            assert_eq!(a, b, "templates differ for {name}");
        }
        assert_eq!(loaded, store);
    }

    #[test]
    fn json_uses_documented_field_names() {
        let json = sample_store().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let leaf = &value["symbols"][0];
        assert_eq!(leaf["symbolName"], "leaf");
        assert_eq!(leaf["maxPatterns"], 10);
        let pattern = &leaf["patterns"][0];
        assert_eq!(pattern["pointCount"], 3);
        assert!(pattern["totalDistance"].is_number());
        assert_eq!(pattern["normalizedPoints"][0], serde_json::json!([0.0, 0.0]));
        assert_eq!(pattern["directions"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn stored_directions_are_trusted() {
        let json = r#"{
            "symbols": [
                { "symbolName": "odd", "maxPatterns": 3,
                  "patterns": [ { "normalizedPoints": [[0.0, 0.0], [1.0, 0.0]],
                                  "directions": [[0.0, 1.0]],
                                  "totalDistance": 1.0, "pointCount": 2 } ] }
            ]
        }"#;
        let store = SymbolStore::from_json(json).unwrap();
        let entry = store.get("odd").unwrap();
        assert_eq!(entry.max_patterns(), 3);
        let template = entry.templates().next().unwrap();
        assert_eq!(template.directions, vec![Vec2::new(0.0, 1.0)]);
    }

    #[test]
    fn stored_templates_load_untrimmed() {
        let mut store = SymbolStore::new();
        store.insert_entry(SymbolEntry::from_stored(
            "busy",
            2,
            vec![template_at(0.0), template_at(1.0), template_at(2.0)],
        ));
        let json = store.to_json().unwrap();

        let loaded = SymbolStore::from_json(&json).unwrap();
        assert_eq!(loaded.template_count("busy"), 3);
        assert_eq!(loaded.to_json().unwrap(), json);
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let store = SymbolStore::from_json(r#"{ "symbols": [ { "symbolName": "empty" } ] }"#).unwrap();
        assert_eq!(store.get("empty").unwrap().max_patterns(), DEFAULT_MAX_PATTERNS);
        assert_eq!(store.template_count("empty"), 0);

        let store = SymbolStore::from_json("{}").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            SymbolStore::from_json("{ not json"),
            Err(PersistError::Json(_))
        ));
    }
}
