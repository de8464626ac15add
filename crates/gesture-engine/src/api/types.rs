use serde::{Deserialize, Serialize};

/// A symbol and how well a stroke matched it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolMatch {
    pub symbol: String,
    pub score: f32,
}

impl SymbolMatch {
    pub fn new(symbol: impl Into<String>, score: f32) -> Self {
        Self {
            symbol: symbol.into(),
            score,
        }
    }
}

/// Notification produced by the recognizer for the host to drain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecognitionEvent {
    /// A stroke was stored as a new template while learning.
    PatternLearned { symbol: String, template_count: usize },
    /// A stroke matched a trained symbol at or above the threshold.
    SymbolMatched { symbol: String, score: f32 },
    /// A stroke matched nothing well enough. `best` is the closest
    /// candidate, absent when no symbols are trained.
    NoMatch { best: Option<SymbolMatch> },
    /// A symbol was deleted.
    SymbolRemoved { symbol: String },
    /// Saving the database failed; the in-memory state is unaffected.
    PersistFailed { reason: String },
}
