/// Pointer events the recognizer understands.
/// Coordinates are world (or screen) units; the recognizer only cares
/// about their relative positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began at (x, y).
    PointerDown { x: f32, y: f32 },
    /// A touch/cursor moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// A touch/click ended at (x, y).
    PointerUp { x: f32, y: f32 },
    /// The host lost the pointer (focus change, touch cancelled).
    /// Any stroke in progress is abandoned.
    PointerCancel,
}

/// A queue of input events.
/// The host writes events into the queue; the recognizer drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
