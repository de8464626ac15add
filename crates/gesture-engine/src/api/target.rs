use crate::api::types::RecognitionEvent;

/// What a target made of a recognition event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetResponse {
    /// The awaited symbol was drawn. `points` is nonzero only the first time.
    Hit { score: f32, points: u32 },
    /// Some other symbol was drawn.
    WrongSymbol,
    /// Event not relevant to this target, or the target is already cleared.
    Ignored,
}

/// A game object that is cleared by drawing one particular symbol.
///
/// Symbol names compare case-insensitively. Points are awarded once.
#[derive(Debug, Clone)]
pub struct SymbolTarget {
    symbol: String,
    points: u32,
    clear_on_hit: bool,
    awarded: bool,
    cleared: bool,
}

impl SymbolTarget {
    pub fn new(symbol: impl Into<String>, points: u32) -> Self {
        Self {
            symbol: symbol.into(),
            points,
            clear_on_hit: true,
            awarded: false,
            cleared: false,
        }
    }

    /// Keep the target alive after a hit (it still awards points only once).
    pub fn persistent(mut self) -> Self {
        self.clear_on_hit = false;
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn set_symbol(&mut self, symbol: impl Into<String>) {
        self.symbol = symbol.into();
        log::debug!("target now waits for '{}'", self.symbol);
    }

    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    /// Clear the target without a hit.
    pub fn clear(&mut self) {
        self.cleared = true;
    }

    pub fn on_event(&mut self, event: &RecognitionEvent) -> TargetResponse {
        if self.cleared {
            return TargetResponse::Ignored;
        }
        let RecognitionEvent::SymbolMatched { symbol, score } = event else {
            return TargetResponse::Ignored;
        };
        if symbol.to_lowercase() != self.symbol.to_lowercase() {
            log::debug!("wrong symbol: expected '{}', got '{symbol}'", self.symbol);
            return TargetResponse::WrongSymbol;
        }

        let points = if self.awarded { 0 } else { self.points };
        self.awarded = true;
        if self.clear_on_hit {
            self.cleared = true;
        }
        log::debug!("target '{}' hit ({:.1}%)", self.symbol, score * 100.0);
        TargetResponse::Hit {
            score: *score,
            points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(symbol: &str) -> RecognitionEvent {
        RecognitionEvent::SymbolMatched {
            symbol: symbol.into(),
            score: 0.9,
        }
    }

    #[test]
    fn hit_is_case_insensitive_and_clears() {
        let mut target = SymbolTarget::new("Leaf", 3);
        assert_eq!(
            target.on_event(&matched("leaf")),
            TargetResponse::Hit { score: 0.9, points: 3 }
        );
        assert!(target.is_cleared());
        assert_eq!(target.on_event(&matched("leaf")), TargetResponse::Ignored);
    }

    #[test]
    fn wrong_symbol_and_other_events() {
        let mut target = SymbolTarget::new("leaf", 1);
        assert_eq!(target.on_event(&matched("wave")), TargetResponse::WrongSymbol);
        assert_eq!(
            target.on_event(&RecognitionEvent::NoMatch { best: None }),
            TargetResponse::Ignored
        );
        assert!(!target.is_cleared());
    }

    #[test]
    fn persistent_target_awards_once() {
        let mut target = SymbolTarget::new("leaf", 5).persistent();
        assert_eq!(
            target.on_event(&matched("LEAF")),
            TargetResponse::Hit { score: 0.9, points: 5 }
        );
        assert_eq!(
            target.on_event(&matched("leaf")),
            TargetResponse::Hit { score: 0.9, points: 0 }
        );
        assert!(!target.is_cleared());
    }

    #[test]
    fn retarget() {
        let mut target = SymbolTarget::new("leaf", 1);
        target.set_symbol("wave");
        assert_eq!(target.symbol(), "wave");
        assert!(matches!(target.on_event(&matched("wave")), TargetResponse::Hit { .. }));
    }
}
