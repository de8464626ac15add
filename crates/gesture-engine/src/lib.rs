pub mod api;
pub mod error;
pub mod input;
pub mod pattern;
pub mod store;

// Re-export key types at crate root for convenience
pub use api::config::RecognizerConfig;
pub use api::game::SymbolGame;
pub use api::recognizer::{GestureRecognizer, RecognizerMode};
pub use api::target::{SymbolTarget, TargetResponse};
pub use api::types::{RecognitionEvent, SymbolMatch};
pub use error::PersistError;
pub use input::capture::{CaptureResult, CaptureState, Stroke, StrokeCapture};
pub use input::queue::{InputEvent, InputQueue};
pub use pattern::compare::{compare, compare_with, MatchSettings, MatchWeights};
pub use pattern::descriptor::PatternDescriptor;
pub use pattern::resample::resample;
pub use store::codec::SymbolDatabase;
pub use store::file::SymbolFile;
pub use store::registry::SymbolStore;
pub use store::symbol::SymbolEntry;

pub use glam::{Vec2, Vec3};
