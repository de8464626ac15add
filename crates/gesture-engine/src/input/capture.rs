use glam::Vec2;

use crate::input::queue::InputEvent;

/// Default minimum spacing between consecutive captured points.
pub const DEFAULT_MIN_POINT_DISTANCE: f32 = 0.05;

/// Default minimum number of points for a finished stroke to count.
pub const DEFAULT_MIN_STROKE_POINTS: usize = 3;

/// One continuous drag gesture as an ordered point sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stroke {
    pub points: Vec<Vec2>,
}

impl Stroke {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// State of the capture component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    /// Waiting for a pointer down.
    Idle,
    /// A drag is in progress.
    Drawing,
}

/// Result of feeding one pointer event to the capture component.
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureResult {
    /// A drag started with this point.
    Started,
    /// Point appended to the current stroke.
    Accepted,
    /// Point too close to the previous one; dropped.
    Skipped,
    /// The drag ended with enough points.
    Completed(Stroke),
    /// The drag ended (or was cancelled) without producing a stroke.
    Discarded,
    /// Event has no meaning in the current state.
    Ignored,
}

/// Turns pointer down/move/up into strokes.
///
/// Points closer than `min_distance` to the last accepted point are
/// dropped, which keeps fast and slow drawing at a similar density.
/// A stroke with fewer than `min_points` points at pointer up is discarded.
/// The release position is not sampled: a stroke ends at the last point
/// accepted from down or move.
pub struct StrokeCapture {
    points: Vec<Vec2>,
    state: CaptureState,
    min_distance: f32,
    min_points: usize,
}

impl StrokeCapture {
    pub fn new(min_distance: f32, min_points: usize) -> Self {
        Self {
            points: Vec::with_capacity(256),
            state: CaptureState::Idle,
            min_distance,
            min_points,
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state == CaptureState::Drawing
    }

    /// Points of the stroke in progress (for rendering the trail).
    pub fn current_points(&self) -> &[Vec2] {
        &self.points
    }

    /// Dispatch a queued input event to the matching handler.
    pub fn handle(&mut self, event: InputEvent) -> CaptureResult {
        match event {
            InputEvent::PointerDown { x, y } => self.on_pointer_down(Vec2::new(x, y)),
            InputEvent::PointerMove { x, y } => self.on_pointer_move(Vec2::new(x, y)),
            InputEvent::PointerUp { .. } => self.on_pointer_up(),
            InputEvent::PointerCancel => self.cancel(),
        }
    }

    /// Handle pointer down: start a fresh stroke.
    pub fn on_pointer_down(&mut self, pos: Vec2) -> CaptureResult {
        match self.state {
            CaptureState::Idle => {
                self.state = CaptureState::Drawing;
                self.points.clear();
                self.points.push(pos);
                CaptureResult::Started
            }
            CaptureState::Drawing => CaptureResult::Ignored,
        }
    }

    /// Handle pointer move: append the point if it is far enough from the last one.
    pub fn on_pointer_move(&mut self, pos: Vec2) -> CaptureResult {
        if self.state != CaptureState::Drawing {
            return CaptureResult::Ignored;
        }
        self.push_spaced(pos)
    }

    /// Handle pointer up: hand the stroke back if it is long enough.
    pub fn on_pointer_up(&mut self) -> CaptureResult {
        if self.state != CaptureState::Drawing {
            return CaptureResult::Ignored;
        }
        self.state = CaptureState::Idle;

        let points = std::mem::take(&mut self.points);
        if points.len() >= self.min_points {
            log::debug!("stroke completed with {} points", points.len());
            CaptureResult::Completed(Stroke::new(points))
        } else {
            log::debug!("stroke discarded: {} points", points.len());
            CaptureResult::Discarded
        }
    }

    /// Abandon the stroke in progress.
    pub fn cancel(&mut self) -> CaptureResult {
        match self.state {
            CaptureState::Drawing => {
                self.state = CaptureState::Idle;
                self.points.clear();
                CaptureResult::Discarded
            }
            CaptureState::Idle => CaptureResult::Ignored,
        }
    }

    fn push_spaced(&mut self, pos: Vec2) -> CaptureResult {
        let too_close = self
            .points
            .last()
            .is_some_and(|last| last.distance(pos) < self.min_distance);
        if too_close {
            return CaptureResult::Skipped;
        }
        self.points.push(pos);
        CaptureResult::Accepted
    }
}

impl Default for StrokeCapture {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_POINT_DISTANCE, DEFAULT_MIN_STROKE_POINTS)
    }
}
