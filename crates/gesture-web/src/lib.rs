pub mod runner;

pub use runner::RecognizerRunner;

/// Generate all `#[wasm_bindgen]` exports for a symbol game.
///
/// Generates:
/// - `thread_local!` storage for the RecognizerRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (init, tick, pointer input, mode control,
///   database import/export, event draining)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use gesture_engine::*;
///
/// mod game;
/// use game::MyGame;
///
/// gesture_web::export_recognizer!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: A type implementing `gesture_engine::SymbolGame` with a `new()` constructor
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_recognizer {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::RecognizerRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::RecognizerRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Recognizer not initialized. Call recognizer_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn recognizer_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::RecognizerRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn recognizer_tick() {
            with_runner(|r| r.tick());
        }

        // ---- Pointer input ----

        #[wasm_bindgen]
        pub fn recognizer_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn recognizer_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn recognizer_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn recognizer_pointer_cancel() {
            with_runner(|r| r.push_input(InputEvent::PointerCancel));
        }

        // ---- Mode control ----

        #[wasm_bindgen]
        pub fn recognizer_start_learning(symbol: &str) -> bool {
            with_runner(|r| r.start_learning(symbol))
        }

        #[wasm_bindgen]
        pub fn recognizer_stop_learning() {
            with_runner(|r| r.stop_learning());
        }

        #[wasm_bindgen]
        pub fn recognizer_start_matching() {
            with_runner(|r| r.start_matching());
        }

        // ---- Database ----

        /// Returns the number of symbols loaded, or -1 if the JSON was rejected.
        #[wasm_bindgen]
        pub fn recognizer_load_database(json: &str) -> i32 {
            with_runner(|r| match r.load_database(json) {
                Ok(count) => count as i32,
                Err(e) => {
                    log::warn!("symbol database rejected: {}", e);
                    -1
                }
            })
        }

        /// Returns the database as JSON, or an empty string on failure.
        #[wasm_bindgen]
        pub fn recognizer_export_database() -> String {
            with_runner(|r| match r.export_database() {
                Ok(json) => json,
                Err(e) => {
                    log::warn!("symbol database export failed: {}", e);
                    String::new()
                }
            })
        }

        #[wasm_bindgen]
        pub fn recognizer_remove_symbol(symbol: &str) -> bool {
            with_runner(|r| r.remove_symbol(symbol))
        }

        #[wasm_bindgen]
        pub fn recognizer_symbols() -> js_sys::Array {
            with_runner(|r| {
                r.symbols()
                    .into_iter()
                    .map(|name| wasm_bindgen::JsValue::from_str(&name))
                    .collect()
            })
        }

        #[wasm_bindgen]
        pub fn recognizer_template_count(symbol: &str) -> u32 {
            with_runner(|r| r.template_count(symbol))
        }

        #[wasm_bindgen]
        pub fn recognizer_summary() -> String {
            with_runner(|r| r.summary())
        }

        // ---- Event accessors ----

        #[wasm_bindgen]
        pub fn recognizer_drain_events() -> String {
            with_runner(|r| r.drain_events_json())
        }

        #[wasm_bindgen]
        pub fn recognizer_pending_event_count() -> u32 {
            with_runner(|r| r.pending_event_count())
        }
    };
}
