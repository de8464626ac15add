use gesture_engine::*;

/// Symbols the obstacles of one wave can ask for.
const WAVE_SYMBOLS: [&str; 3] = ["leaf", "wave", "sun"];
const POINTS_PER_TARGET: u32 = 1;

/// Obstacles that are cleared by drawing their symbol.
pub struct EcoWingsSymbols {
    targets: Vec<SymbolTarget>,
    score: u32,
    waves_cleared: u32,
}

impl EcoWingsSymbols {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            score: 0,
            waves_cleared: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn waves_cleared(&self) -> u32 {
        self.waves_cleared
    }

    pub fn remaining_targets(&self) -> usize {
        self.targets.len()
    }

    fn spawn_wave(&mut self) {
        self.targets = WAVE_SYMBOLS
            .iter()
            .map(|symbol| SymbolTarget::new(*symbol, POINTS_PER_TARGET))
            .collect();
    }
}

impl SymbolGame for EcoWingsSymbols {
    fn config(&self) -> RecognizerConfig {
        RecognizerConfig {
            match_threshold: 0.7,
            ..RecognizerConfig::default()
        }
    }

    fn init(&mut self, _recognizer: &mut GestureRecognizer) {
        self.spawn_wave();
        log::info!("EcoWings symbols initialized with {} targets", self.targets.len());
    }

    fn on_event(&mut self, _recognizer: &mut GestureRecognizer, event: &RecognitionEvent) {
        for target in &mut self.targets {
            if let TargetResponse::Hit { points, .. } = target.on_event(event) {
                self.score += points;
            }
        }
        self.targets.retain(|t| !t.is_cleared());

        if self.targets.is_empty() {
            self.waves_cleared += 1;
            log::info!("wave {} cleared, score {}", self.waves_cleared, self.score);
            self.spawn_wave();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(symbol: &str) -> RecognitionEvent {
        RecognitionEvent::SymbolMatched {
            symbol: symbol.into(),
            score: 0.8,
        }
    }

    #[test]
    fn matches_clear_targets_and_respawn_wave() {
        let mut recognizer = GestureRecognizer::default();
        let mut game = EcoWingsSymbols::new();
        game.init(&mut recognizer);
        assert_eq!(game.remaining_targets(), 3);

        game.on_event(&mut recognizer, &matched("Leaf"));
        game.on_event(&mut recognizer, &matched("moon"));
        game.on_event(&mut recognizer, &RecognitionEvent::NoMatch { best: None });
        assert_eq!(game.remaining_targets(), 2);
        assert_eq!(game.score(), 1);

        game.on_event(&mut recognizer, &matched("wave"));
        game.on_event(&mut recognizer, &matched("sun"));
        assert_eq!(game.score(), 3);
        assert_eq!(game.waves_cleared(), 1);
        assert_eq!(game.remaining_targets(), 3);
    }
}
