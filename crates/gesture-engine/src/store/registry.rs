use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::api::types::SymbolMatch;
use crate::pattern::compare::MatchSettings;
use crate::pattern::descriptor::PatternDescriptor;
use crate::store::symbol::{SymbolEntry, DEFAULT_MAX_PATTERNS};

/// All trained symbols, keyed by name.
///
/// Iteration is in name order, which keeps saved files stable and makes
/// tie-breaking in [`SymbolStore::best_match`] deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolStore {
    symbols: BTreeMap<String, SymbolEntry>,
    max_patterns: usize,
    settings: MatchSettings,
}

impl SymbolStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_PATTERNS)
    }

    /// Store whose new entries keep at most `max_patterns` templates.
    pub fn with_capacity(max_patterns: usize) -> Self {
        Self {
            symbols: BTreeMap::new(),
            max_patterns,
            settings: MatchSettings::default(),
        }
    }

    /// Replace the scoring settings used by `best_match` and `rank`.
    pub fn set_match_settings(&mut self, settings: MatchSettings) {
        self.settings = settings;
    }

    pub fn match_settings(&self) -> &MatchSettings {
        &self.settings
    }

    /// Capacity given to entries created by `add_pattern`.
    pub fn max_patterns(&self) -> usize {
        self.max_patterns
    }

    /// Change the capacity of symbols created from now on. Existing
    /// symbols keep their own.
    pub fn set_max_patterns(&mut self, max_patterns: usize) {
        self.max_patterns = max_patterns;
    }

    /// Add a template to `name`, creating the symbol if needed.
    /// Returns the symbol's template count afterwards.
    pub fn add_pattern(&mut self, name: &str, pattern: PatternDescriptor) -> usize {
        let max_patterns = self.max_patterns;
        let entry = self
            .symbols
            .entry(name.to_string())
            .or_insert_with(|| SymbolEntry::new(name, max_patterns));
        entry.add_pattern(pattern);
        entry.template_count()
    }

    /// Insert (or replace) a whole entry, e.g. one read back from disk.
    pub fn insert_entry(&mut self, entry: SymbolEntry) {
        self.symbols.insert(entry.name().to_string(), entry);
    }

    /// Highest-scoring symbol for `input`, or `None` when nothing is trained.
    ///
    /// On equal scores the symbol seen first (in name order) wins.
    pub fn best_match(&self, input: &PatternDescriptor) -> Option<SymbolMatch> {
        let mut best: Option<SymbolMatch> = None;
        for entry in self.symbols.values() {
            let score = entry.best_score(input, &self.settings);
            match &best {
                Some(current) if score <= current.score => {}
                _ => best = Some(SymbolMatch::new(entry.name(), score)),
            }
        }
        best
    }

    /// Every symbol with its best score, highest first.
    pub fn rank(&self, input: &PatternDescriptor) -> Vec<SymbolMatch> {
        let mut ranked: Vec<SymbolMatch> = self
            .symbols
            .values()
            .map(|entry| SymbolMatch::new(entry.name(), entry.best_score(input, &self.settings)))
            .collect();
        // Stable sort: equal scores stay in name order.
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// Delete a symbol and its templates. Returns whether it existed.
    pub fn remove_symbol(&mut self, name: &str) -> bool {
        self.symbols.remove(name).is_some()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.symbols.values()
    }

    pub fn get(&self, name: &str) -> Option<&SymbolEntry> {
        self.symbols.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Number of templates stored for `name` (0 if unknown).
    pub fn template_count(&self, name: &str) -> usize {
        self.symbols.get(name).map_or(0, SymbolEntry::template_count)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn clear(&mut self) {
        self.symbols.clear();
    }

    /// Human-readable listing of every symbol and its templates.
    pub fn summary(&self) -> String {
        let mut out = String::from("=== SYMBOL DATABASE ===\n\n");
        for entry in self.symbols.values() {
            let _ = writeln!(out, "Symbol: {}", entry.name());
            let _ = writeln!(out, "Templates: {}", entry.template_count());
            for (i, template) in entry.templates().enumerate() {
                let _ = writeln!(
                    out,
                    "  Template {}: {} points, distance: {:.2}",
                    i + 1,
                    template.point_count,
                    template.total_distance
                );
            }
            out.push('\n');
        }
        out
    }
}

impl Default for SymbolStore {
    fn default() -> Self {
        Self::new()
    }
}
