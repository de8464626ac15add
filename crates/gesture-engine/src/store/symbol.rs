use std::collections::VecDeque;

use crate::pattern::compare::{compare_with, MatchSettings};
use crate::pattern::descriptor::PatternDescriptor;

/// Default number of templates kept per symbol.
pub const DEFAULT_MAX_PATTERNS: usize = 10;

/// A trained symbol: its name and the most recent templates drawn for it.
///
/// Templates are kept oldest first. Adding past `max_patterns` evicts the
/// oldest, so the entry tracks how the player currently draws the symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolEntry {
    name: String,
    max_patterns: usize,
    templates: VecDeque<PatternDescriptor>,
}

impl SymbolEntry {
    pub fn new(name: impl Into<String>, max_patterns: usize) -> Self {
        let max_patterns = max_patterns.max(1);
        Self {
            name: name.into(),
            max_patterns,
            templates: VecDeque::with_capacity(max_patterns + 1),
        }
    }

    /// Rebuild an entry from stored templates, trimming the oldest ones
    /// if there are more than `max_patterns`.
    pub fn with_templates(
        name: impl Into<String>,
        max_patterns: usize,
        templates: impl IntoIterator<Item = PatternDescriptor>,
    ) -> Self {
        let mut entry = Self::new(name, max_patterns);
        for template in templates {
            entry.add_pattern(template);
        }
        entry
    }

    /// Rebuild an entry exactly as it was saved. Templates are kept even
    /// past `max_patterns`; the next `add_pattern` trims them. A capacity
    /// of 0 is still raised to 1.
    pub fn from_stored(
        name: impl Into<String>,
        max_patterns: usize,
        templates: Vec<PatternDescriptor>,
    ) -> Self {
        let mut entry = Self::new(name, max_patterns);
        entry.templates = templates.into();
        entry
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_patterns(&self) -> usize {
        self.max_patterns
    }

    pub fn templates(&self) -> impl Iterator<Item = &PatternDescriptor> {
        self.templates.iter()
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    /// Append a template, evicting the oldest beyond capacity.
    pub fn add_pattern(&mut self, pattern: PatternDescriptor) {
        self.templates.push_back(pattern);
        while self.templates.len() > self.max_patterns {
            self.templates.pop_front();
        }
    }

    /// Best score of `input` against any of this symbol's templates.
    /// An entry without templates scores 0.
    pub fn best_score(&self, input: &PatternDescriptor, settings: &MatchSettings) -> f32 {
        self.templates
            .iter()
            .map(|template| compare_with(input, template, settings))
            .fold(0.0, f32::max)
    }
}
