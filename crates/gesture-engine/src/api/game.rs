use crate::api::config::RecognizerConfig;
use crate::api::recognizer::GestureRecognizer;
use crate::api::types::RecognitionEvent;

/// The contract a game fulfils to react to recognized symbols.
pub trait SymbolGame {
    /// Return recognizer configuration. Called once before init.
    fn config(&self) -> RecognizerConfig {
        RecognizerConfig::default()
    }

    /// Setup initial state: seed templates, choose a mode.
    fn init(&mut self, _recognizer: &mut GestureRecognizer) {}

    /// Called once per event produced during a tick, in order.
    fn on_event(&mut self, recognizer: &mut GestureRecognizer, event: &RecognitionEvent);
}
