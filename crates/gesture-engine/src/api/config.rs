use crate::input::capture::{DEFAULT_MIN_POINT_DISTANCE, DEFAULT_MIN_STROKE_POINTS};
use crate::pattern::compare::{MatchSettings, MatchWeights, DEFAULT_RESAMPLE_CAP};
use crate::store::symbol::DEFAULT_MAX_PATTERNS;

/// Configuration for the recognizer, provided by the game.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizerConfig {
    /// Minimum best score for a stroke to count as a match (default: 0.7).
    pub match_threshold: f32,
    /// Templates kept per symbol; older ones are evicted (default: 10).
    pub max_patterns_per_symbol: usize,
    /// Upper bound on resampled points when comparing shapes (default: 20).
    /// Values below 2 are treated as 2.
    pub resample_cap: usize,
    /// Minimum spacing between captured points in input units (default: 0.05).
    pub min_point_distance: f32,
    /// Strokes with fewer points are dropped at pointer up (default: 3).
    pub min_stroke_points: usize,
    /// Sub-score weights and shape falloff.
    pub weights: MatchWeights,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            match_threshold: 0.7,
            max_patterns_per_symbol: DEFAULT_MAX_PATTERNS,
            resample_cap: DEFAULT_RESAMPLE_CAP,
            min_point_distance: DEFAULT_MIN_POINT_DISTANCE,
            min_stroke_points: DEFAULT_MIN_STROKE_POINTS,
            weights: MatchWeights::default(),
        }
    }
}

impl RecognizerConfig {
    pub fn match_settings(&self) -> MatchSettings {
        MatchSettings {
            weights: self.weights,
            resample_cap: self.resample_cap.max(2),
        }
    }
}
