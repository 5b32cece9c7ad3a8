//! Single-pointer pan recognition.
//!
//! Turns raw pointer samples into [`DragEvent`]s. The recognizer waits for
//! the pointer to leave the [`DRAG_THRESHOLD`] slop, then asks the caller
//! whether the pan may begin (the swipe controller checks direction and
//! configured slots). A refused pan stays refused until the pointer lifts,
//! so a vertical scroll never turns into a swipe halfway through.

use swipe_ui_graphics::Point;

use crate::gesture_constants::{DRAG_THRESHOLD, MAX_FLING_VELOCITY};
use crate::input::{DragEvent, DragPhase, PointerEvent, PointerEventKind, PointerId};
use crate::velocity_tracker::VelocityTracker;

#[derive(Clone, Copy, Debug, PartialEq)]
enum PanState {
    Idle,
    /// Pointer is down but still inside the slop.
    Pending { pointer: PointerId, origin: Point },
    Panning { pointer: PointerId, last: Point },
    /// Admission was refused; swallow events until the pointer lifts.
    Refused { pointer: PointerId },
}

pub struct PanGestureRecognizer {
    state: PanState,
    tracker: VelocityTracker,
}

impl Default for PanGestureRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PanGestureRecognizer {
    pub fn new() -> Self {
        Self {
            state: PanState::Idle,
            tracker: VelocityTracker::new(),
        }
    }

    /// True between `Began` and the terminal event.
    pub fn is_panning(&self) -> bool {
        matches!(self.state, PanState::Panning { .. })
    }

    /// Feed one pointer sample.
    ///
    /// `should_begin` receives the current velocity and is called at most
    /// once per pointer-down, when the slop is exceeded.
    pub fn on_pointer_event(
        &mut self,
        event: PointerEvent,
        should_begin: impl FnOnce(Point) -> bool,
    ) -> Option<DragEvent> {
        match (self.state, event.kind) {
            (PanState::Idle, PointerEventKind::Down) => {
                self.tracker.reset();
                self.tracker.add_position(event.time_ms, event.position);
                self.state = PanState::Pending {
                    pointer: event.id,
                    origin: event.position,
                };
                None
            }
            (PanState::Idle, _) => None,
            (PanState::Pending { pointer, origin }, PointerEventKind::Move) if pointer == event.id => {
                self.tracker.add_position(event.time_ms, event.position);
                let moved = event.position - origin;
                if moved.x.hypot(moved.y) <= DRAG_THRESHOLD {
                    return None;
                }
                let velocity = self.velocity();
                if should_begin(velocity) {
                    log::trace!("pan began at {:?}", event.position);
                    // Keep `origin` as the reference so the first change
                    // carries the slop distance too.
                    self.state = PanState::Panning {
                        pointer,
                        last: origin,
                    };
                    Some(DragEvent::began().with_velocity(velocity))
                } else {
                    log::trace!("pan refused with velocity {:?}", velocity);
                    self.state = PanState::Refused { pointer };
                    None
                }
            }
            (PanState::Panning { pointer, last }, PointerEventKind::Move) if pointer == event.id => {
                self.tracker.add_position(event.time_ms, event.position);
                self.state = PanState::Panning {
                    pointer,
                    last: event.position,
                };
                Some(DragEvent {
                    phase: DragPhase::Changed,
                    translation: event.position - last,
                    velocity: self.velocity(),
                })
            }
            (PanState::Panning { pointer, last }, PointerEventKind::Up) if pointer == event.id => {
                self.tracker.add_position(event.time_ms, event.position);
                let velocity = self.velocity();
                self.finish();
                Some(DragEvent {
                    phase: DragPhase::Ended,
                    translation: event.position - last,
                    velocity,
                })
            }
            (PanState::Panning { pointer, .. }, PointerEventKind::Cancel) if pointer == event.id => {
                self.finish();
                Some(DragEvent::cancelled())
            }
            (
                PanState::Pending { pointer, .. } | PanState::Refused { pointer },
                PointerEventKind::Up | PointerEventKind::Cancel,
            ) if pointer == event.id => {
                self.finish();
                None
            }
            // Second pointers and repeated downs are ignored.
            _ => None,
        }
    }

    fn velocity(&self) -> Point {
        self.tracker.calculate_velocity_with_max(MAX_FLING_VELOCITY)
    }

    fn finish(&mut self) {
        self.state = PanState::Idle;
        self.tracker.reset();
    }
}

#[cfg(test)]
#[path = "tests/pan_tests.rs"]
mod tests;
