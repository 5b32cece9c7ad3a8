use swipe_ui_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A raw pointer sample in row-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    /// Event timestamp in milliseconds, monotonic per pointer.
    pub time_ms: i64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, time_ms: i64) -> Self {
        Self {
            id: 0,
            kind,
            position,
            time_ms,
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }
}

/// Lifecycle phase of a recognised pan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// One step of a horizontal pan as delivered to a swipe controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEvent {
    pub phase: DragPhase,
    /// Movement since the previous event of this pan.
    pub translation: Point,
    /// Pointer velocity in logical pixels per second.
    pub velocity: Point,
}

impl DragEvent {
    pub fn began() -> Self {
        Self {
            phase: DragPhase::Began,
            translation: Point::ZERO,
            velocity: Point::ZERO,
        }
    }

    pub fn changed(dx: f32, dy: f32) -> Self {
        Self {
            phase: DragPhase::Changed,
            translation: Point::new(dx, dy),
            velocity: Point::ZERO,
        }
    }

    pub fn ended(velocity: Point) -> Self {
        Self {
            phase: DragPhase::Ended,
            translation: Point::ZERO,
            velocity,
        }
    }

    pub fn cancelled() -> Self {
        Self {
            phase: DragPhase::Cancelled,
            translation: Point::ZERO,
            velocity: Point::ZERO,
        }
    }

    pub fn with_velocity(mut self, velocity: Point) -> Self {
        self.velocity = velocity;
        self
    }

    /// True for the two phases that close a pan.
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, DragPhase::Ended | DragPhase::Cancelled)
    }
}
