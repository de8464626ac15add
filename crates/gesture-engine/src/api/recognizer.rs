use glam::Vec2;

use crate::api::config::RecognizerConfig;
use crate::api::types::RecognitionEvent;
use crate::error::PersistError;
use crate::input::capture::{CaptureResult, StrokeCapture};
use crate::input::queue::{InputEvent, InputQueue};
use crate::pattern::descriptor::PatternDescriptor;
use crate::store::codec::SymbolDatabase;
use crate::store::file::SymbolFile;
use crate::store::registry::SymbolStore;

/// What a completed stroke is used for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognizerMode {
    /// Compare every stroke against all trained symbols.
    Matching,
    /// Store every stroke as a template for `symbol`.
    Learning { symbol: String },
}

/// Owns capture, the symbol store and the optional backing file, and turns
/// completed strokes into [`RecognitionEvent`]s.
///
/// Events accumulate until the host calls [`GestureRecognizer::drain_events`].
pub struct GestureRecognizer {
    config: RecognizerConfig,
    capture: StrokeCapture,
    store: SymbolStore,
    storage: Option<SymbolFile>,
    mode: RecognizerMode,
    events: Vec<RecognitionEvent>,
}

impl GestureRecognizer {
    pub fn new(config: RecognizerConfig) -> Self {
        let store = SymbolStore::with_capacity(config.max_patterns_per_symbol);
        Self::with_store(config, store)
    }

    /// Start from an existing store (e.g. parsed from bundled JSON).
    /// Symbols created from here on use the config's capacity.
    pub fn with_store(config: RecognizerConfig, mut store: SymbolStore) -> Self {
        store.set_max_patterns(config.max_patterns_per_symbol);
        store.set_match_settings(config.match_settings());
        Self {
            capture: StrokeCapture::new(config.min_point_distance, config.min_stroke_points),
            store,
            storage: None,
            mode: RecognizerMode::Matching,
            events: Vec::new(),
            config,
        }
    }

    /// Load the store from `file` and save back to it after every change.
    pub fn with_storage(config: RecognizerConfig, file: SymbolFile) -> Self {
        let file = file.with_max_patterns(config.max_patterns_per_symbol);
        let store = file.load();
        let mut recognizer = Self::with_store(config, store);
        recognizer.storage = Some(file);
        recognizer
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    pub fn store(&self) -> &SymbolStore {
        &self.store
    }

    /// The capture component, for drawing the stroke in progress.
    pub fn capture(&self) -> &StrokeCapture {
        &self.capture
    }

    pub fn mode(&self) -> &RecognizerMode {
        &self.mode
    }

    pub fn is_learning(&self) -> bool {
        matches!(self.mode, RecognizerMode::Learning { .. })
    }

    // -- Mode control --

    /// Switch to learning `symbol`. Blank names are refused and the mode
    /// is left unchanged. Returns whether learning started.
    pub fn start_learning(&mut self, symbol: &str) -> bool {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            log::warn!("refusing to learn a symbol without a name");
            return false;
        }
        log::info!("learning mode started for symbol '{symbol}'");
        self.mode = RecognizerMode::Learning {
            symbol: symbol.to_string(),
        };
        true
    }

    pub fn stop_learning(&mut self) {
        if self.is_learning() {
            log::info!("learning mode stopped");
        }
        self.mode = RecognizerMode::Matching;
    }

    pub fn start_matching(&mut self) {
        self.mode = RecognizerMode::Matching;
        log::info!("matching mode active");
    }

    // -- Input --

    /// Feed every queued pointer event through capture. Each completed
    /// stroke is processed immediately.
    pub fn update(&mut self, input: &InputQueue) {
        for event in input.iter() {
            self.handle_input(*event);
        }
    }

    /// Feed one pointer event through capture.
    pub fn handle_input(&mut self, event: InputEvent) {
        if let CaptureResult::Completed(stroke) = self.capture.handle(event) {
            self.process_stroke(&stroke.points);
        }
    }

    /// Learn or match a finished stroke, depending on the mode.
    /// Strokes with fewer than two points are ignored.
    pub fn process_stroke(&mut self, points: &[Vec2]) -> Option<RecognitionEvent> {
        if points.len() < 2 {
            return None;
        }
        let pattern = PatternDescriptor::from_points(points);
        let event = match &self.mode {
            RecognizerMode::Learning { symbol } => {
                let symbol = symbol.clone();
                self.learn(&symbol, pattern)
            }
            RecognizerMode::Matching => self.check_match(&pattern),
        };
        Some(event)
    }

    // -- Store operations --

    /// Add `pattern` as a template of `symbol` and save.
    pub fn learn(&mut self, symbol: &str, pattern: PatternDescriptor) -> RecognitionEvent {
        log::debug!(
            "template for '{symbol}': {} points, distance {:.3}",
            pattern.point_count,
            pattern.total_distance
        );
        let template_count = self.store.add_pattern(symbol, pattern);
        log::info!("learned template for '{symbol}' ({template_count} total)");

        let event = RecognitionEvent::PatternLearned {
            symbol: symbol.to_string(),
            template_count,
        };
        self.emit(event.clone());
        self.persist();
        event
    }

    /// Compare `pattern` against every trained symbol.
    pub fn check_match(&mut self, pattern: &PatternDescriptor) -> RecognitionEvent {
        if self.store.is_empty() {
            log::info!("no trained symbols to match against");
            let event = RecognitionEvent::NoMatch { best: None };
            self.emit(event.clone());
            return event;
        }

        log::debug!("comparing stroke with {} trained symbols", self.store.len());
        let event = match self.store.best_match(pattern) {
            Some(best) if best.score >= self.config.match_threshold => {
                log::info!("symbol detected: '{}' ({:.1}%)", best.symbol, best.score * 100.0);
                RecognitionEvent::SymbolMatched {
                    symbol: best.symbol,
                    score: best.score,
                }
            }
            best => {
                if let Some(b) = &best {
                    log::info!(
                        "no symbol recognized; closest '{}' ({:.1}%, threshold {:.1}%)",
                        b.symbol,
                        b.score * 100.0,
                        self.config.match_threshold * 100.0
                    );
                }
                RecognitionEvent::NoMatch { best }
            }
        };
        self.emit(event.clone());
        event
    }

    /// Delete a symbol and save. Unknown names are a no-op.
    pub fn remove_symbol(&mut self, symbol: &str) -> bool {
        if !self.store.remove_symbol(symbol) {
            return false;
        }
        log::info!("symbol '{symbol}' removed");
        self.emit(RecognitionEvent::SymbolRemoved {
            symbol: symbol.to_string(),
        });
        self.persist();
        true
    }

    pub fn symbols(&self) -> Vec<String> {
        self.store.symbols().map(str::to_string).collect()
    }

    pub fn template_count(&self, symbol: &str) -> usize {
        self.store.template_count(symbol)
    }

    /// Replace the store with one parsed from JSON. On error the current
    /// store is kept. Returns the number of symbols loaded.
    pub fn load_database_json(&mut self, json: &str) -> Result<usize, PersistError> {
        let mut store = SymbolDatabase::from_json(json)?.into_store(self.config.max_patterns_per_symbol);
        store.set_match_settings(self.config.match_settings());
        self.store = store;
        log::info!("symbol database replaced: {} symbols", self.store.len());
        Ok(self.store.len())
    }

    pub fn export_database_json(&self) -> Result<String, PersistError> {
        self.store.to_json()
    }

    // -- Events --

    /// Take all events produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<RecognitionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Pending events without consuming them.
    pub fn events(&self) -> &[RecognitionEvent] {
        &self.events
    }

    /// Log mode, threshold and every symbol's template count.
    pub fn log_state(&self) {
        log::info!("=== recognizer state ===");
        log::info!("mode: {:?}", self.mode);
        log::info!("threshold: {:.1}%", self.config.match_threshold * 100.0);
        log::info!("trained symbols: {}", self.store.len());
        for entry in self.store.entries() {
            log::info!("  - '{}': {} templates", entry.name(), entry.template_count());
        }
    }

    fn emit(&mut self, event: RecognitionEvent) {
        self.events.push(event);
    }

    fn persist(&mut self) {
        let Some(file) = &self.storage else {
            return;
        };
        if let Err(e) = file.save(&self.store) {
            log::warn!("failed to save symbol database: {e}");
            self.emit(RecognitionEvent::PersistFailed {
                reason: e.to_string(),
            });
        }
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(RecognizerConfig::default())
    }
}
