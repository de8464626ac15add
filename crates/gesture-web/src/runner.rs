use gesture_engine::{
    GestureRecognizer, InputEvent, InputQueue, PersistError, RecognitionEvent, SymbolGame,
};

/// Generic runner that wires a game to the recognizer.
///
/// Each concrete game creates a `thread_local!` RecognizerRunner through
/// `export_recognizer!`, because wasm-bindgen cannot export generic structs.
pub struct RecognizerRunner<G: SymbolGame> {
    game: G,
    recognizer: GestureRecognizer,
    input: InputQueue,
    initialized: bool,
    /// Events produced since the host last read them.
    pending: Vec<RecognitionEvent>,
}

impl<G: SymbolGame> RecognizerRunner<G> {
    pub fn new(game: G) -> Self {
        let recognizer = GestureRecognizer::new(game.config());
        Self {
            game,
            recognizer,
            input: InputQueue::new(),
            initialized: false,
            pending: Vec::new(),
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.recognizer);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: capture queued input, let the game react to the
    /// resulting events, and keep them for the host.
    pub fn tick(&mut self) {
        if !self.initialized {
            return;
        }

        self.recognizer.update(&self.input);
        self.input.drain();
        self.dispatch_events();
    }

    pub fn recognizer(&self) -> &GestureRecognizer {
        &self.recognizer
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    // ---- Mode control ----

    pub fn start_learning(&mut self, symbol: &str) -> bool {
        self.recognizer.start_learning(symbol)
    }

    pub fn stop_learning(&mut self) {
        self.recognizer.stop_learning();
    }

    pub fn start_matching(&mut self) {
        self.recognizer.start_matching();
    }

    // ---- Database ----

    pub fn load_database(&mut self, json: &str) -> Result<usize, PersistError> {
        self.recognizer.load_database_json(json)
    }

    pub fn export_database(&self) -> Result<String, PersistError> {
        self.recognizer.export_database_json()
    }

    pub fn remove_symbol(&mut self, symbol: &str) -> bool {
        let removed = self.recognizer.remove_symbol(symbol);
        self.dispatch_events();
        removed
    }

    pub fn symbols(&self) -> Vec<String> {
        self.recognizer.symbols()
    }

    pub fn template_count(&self, symbol: &str) -> u32 {
        self.recognizer.template_count(symbol) as u32
    }

    pub fn summary(&self) -> String {
        self.recognizer.store().summary()
    }

    // ---- Event accessors ----

    /// Take every pending event as a JSON array.
    pub fn drain_events_json(&mut self) -> String {
        let events = std::mem::take(&mut self.pending);
        match serde_json::to_string(&events) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("failed to encode recognition events: {e}");
                "[]".to_string()
            }
        }
    }

    pub fn pending_event_count(&self) -> u32 {
        self.pending.len() as u32
    }

    fn dispatch_events(&mut self) {
        for event in self.recognizer.drain_events() {
            self.game.on_event(&mut self.recognizer, &event);
            self.pending.push(event);
        }
        // Events raised by the game's own handlers go out next frame.
    }
}
