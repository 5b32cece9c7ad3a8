//! Per-row drag state machine.
//!
//! `Idle -> Dragging -> Exiting -> Idle`. Drag events move the snapshot and
//! refresh the overlay; release picks a terminal animation which the host
//! drives through [`SwipeController::on_frame`]. Completion callbacks run
//! from inside `on_frame`, so a host must not hold a borrow of the
//! controller's container across that call if its callbacks reach back in.

use std::rc::Rc;

use swipe_foundation::{DragEvent, DragPhase, PanGestureRecognizer, PointerEvent};
use swipe_ui_graphics::{Color, Point};

use crate::config::SwipeConfig;
use crate::delegate::{SwipeDelegate, SwipeRow};
use crate::overlay::SwipeOverlay;
use crate::registry::SlotRegistry;
use crate::slot::{Icon, Side, Slot, SlotAnimation, SlotPosition};
use crate::terminal::TerminalAnimation;
use crate::triggers::{
    before_trigger, drag_percentage, icon_alpha, icon_center_x, release_duration, Direction,
    TriggerThresholds,
};

/// Public view of the controller's state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipePhase {
    Idle,
    Dragging,
    /// A terminal animation (or the post-slide linger) is running.
    Exiting,
}

enum SwipeState<S, R> {
    Idle,
    Dragging(SwipeOverlay<S>),
    Exiting(SwipeOverlay<S>, TerminalAnimation<R>),
}

pub struct SwipeController<R: SwipeRow> {
    row: R,
    registry: SlotRegistry<R>,
    config: SwipeConfig,
    delegate: Option<Rc<dyn SwipeDelegate<R>>>,
    pan: PanGestureRecognizer,
    state: SwipeState<R::Snapshot, R>,
    direction: Direction,
}

impl<R: SwipeRow> SwipeController<R> {
    pub fn new(row: R) -> Self {
        Self::with_config(row, SwipeConfig::default())
    }

    pub fn with_config(row: R, config: SwipeConfig) -> Self {
        Self {
            row,
            registry: SlotRegistry::new(),
            config: SwipeConfig {
                thresholds: config.thresholds.validated(),
                ..config
            },
            delegate: None,
            pan: PanGestureRecognizer::new(),
            state: SwipeState::Idle,
            direction: Direction::Center,
        }
    }

    pub fn row(&self) -> &R {
        &self.row
    }

    /// Register the action at (`side`, `rank`); a later call for the same
    /// key replaces it.
    ///
    /// # Panics
    ///
    /// When `rank` is not in 1..=4.
    pub fn configure(
        &mut self,
        side: Side,
        rank: u8,
        color: Color,
        icon: Icon,
        animation: SlotAnimation,
        on_complete: impl Fn(&R) + 'static,
    ) {
        self.registry
            .register(side, rank, Slot::new(color, icon, animation, on_complete));
    }

    pub fn configure_at(
        &mut self,
        position: SlotPosition,
        color: Color,
        icon: Icon,
        animation: SlotAnimation,
        on_complete: impl Fn(&R) + 'static,
    ) {
        self.registry
            .register_at(position, Slot::new(color, icon, animation, on_complete));
    }

    pub fn registry(&self) -> &SlotRegistry<R> {
        &self.registry
    }

    pub fn set_delegate(&mut self, delegate: Option<Rc<dyn SwipeDelegate<R>>>) {
        self.delegate = delegate;
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// # Panics
    ///
    /// When `thresholds` are not strictly ascending inside (0, 1).
    pub fn set_thresholds(&mut self, thresholds: TriggerThresholds) {
        self.config.thresholds = thresholds.validated();
    }

    pub fn set_should_drag(&mut self, should_drag: bool) {
        self.config.should_drag = should_drag;
    }

    pub fn set_should_animate_icons(&mut self, should_animate_icons: bool) {
        self.config.should_animate_icons = should_animate_icons;
    }

    pub fn set_default_color(&mut self, default_color: Color) {
        self.config.default_color = default_color;
    }

    pub fn phase(&self) -> SwipePhase {
        match self.state {
            SwipeState::Idle => SwipePhase::Idle,
            SwipeState::Dragging(_) => SwipePhase::Dragging,
            SwipeState::Exiting(..) => SwipePhase::Exiting,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.phase() == SwipePhase::Dragging
    }

    pub fn is_exiting(&self) -> bool {
        self.phase() == SwipePhase::Exiting
    }

    /// True while the host should keep calling [`Self::on_frame`].
    pub fn needs_frame(&self) -> bool {
        self.is_exiting()
    }

    /// Direction of the live drag, `Center` when idle.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn overlay(&self) -> Option<&SwipeOverlay<R::Snapshot>> {
        match &self.state {
            SwipeState::Idle => None,
            SwipeState::Dragging(overlay) | SwipeState::Exiting(overlay, _) => Some(overlay),
        }
    }

    pub fn content_offset(&self) -> f32 {
        self.overlay().map_or(0.0, SwipeOverlay::content_offset)
    }

    /// Current drag percentage in [-1, 1]; 0 when idle.
    pub fn percentage(&self) -> f32 {
        match self.overlay() {
            Some(overlay) => drag_percentage(overlay.content_offset(), self.row_width()),
            None => 0.0,
        }
    }

    /// Slot the current offset activates, ignoring the first-trigger gate.
    pub fn active_position(&self) -> Option<SlotPosition> {
        self.overlay()?;
        self.registry
            .active_position(self.percentage(), &self.config.thresholds)
    }

    /// Kind of the running terminal animation.
    pub fn terminal_animation(&self) -> Option<SlotAnimation> {
        match &self.state {
            SwipeState::Exiting(_, terminal) => Some(terminal.kind()),
            _ => None,
        }
    }

    /// Duration of the running terminal animation, in seconds.
    pub fn terminal_duration(&self) -> Option<f32> {
        match &self.state {
            SwipeState::Exiting(_, terminal) => Some(terminal.duration_secs()),
            _ => None,
        }
    }

    /// Whether a pan with `velocity` may start swiping this row.
    ///
    /// Only horizontal-dominant motion toward a side with at least one
    /// registered slot is admitted, and never while a session is live.
    pub fn should_begin_gesture(&self, velocity: Point) -> bool {
        admits_gesture(
            &self.config,
            &self.registry,
            matches!(self.state, SwipeState::Idle),
            velocity,
        )
    }

    /// Feed a raw pointer sample through the built-in pan recognizer.
    pub fn on_pointer_event(&mut self, event: PointerEvent) {
        let config = &self.config;
        let registry = &self.registry;
        let idle = matches!(self.state, SwipeState::Idle);
        let drag = self
            .pan
            .on_pointer_event(event, |velocity| {
                admits_gesture(config, registry, idle, velocity)
            });
        if let Some(drag) = drag {
            self.handle_drag(drag);
        }
    }

    /// Apply one drag event from the host's pan recognizer.
    pub fn handle_drag(&mut self, event: DragEvent) {
        match event.phase {
            DragPhase::Began => self.begin_drag(),
            DragPhase::Changed => self.drag_changed(event.translation.x),
            DragPhase::Ended | DragPhase::Cancelled => self.end_drag(event.velocity),
        }
    }

    /// Advance the terminal animation to `frame_time_nanos`.
    ///
    /// Runs the armed slot's completion when the animation settles and
    /// tears the session down at the end of the path.
    pub fn on_frame(&mut self, frame_time_nanos: u64) {
        let SwipeState::Exiting(overlay, terminal) = &mut self.state else {
            return;
        };
        let frame = terminal.advance(frame_time_nanos, overlay);

        if let Some(completion) = frame.completion {
            log::debug!("swipe completed, notifying slot");
            completion(&self.row);
        }
        if frame.teardown {
            self.teardown();
        }
    }

    /// Drop any live session immediately, without running completions.
    pub fn teardown(&mut self) {
        if !matches!(self.state, SwipeState::Idle) {
            log::debug!("swipe session torn down");
        }
        self.state = SwipeState::Idle;
        self.direction = Direction::Center;
    }

    fn begin_drag(&mut self) {
        if !self.config.should_drag {
            log::trace!("drag begin ignored: dragging disabled");
            return;
        }
        if !matches!(self.state, SwipeState::Idle) {
            log::trace!("drag begin ignored: phase {:?}", self.phase());
            return;
        }

        let size = self.row.size();
        assert_positive_width(size.width);
        let overlay = SwipeOverlay::new(self.row.snapshot(), size, self.config.default_color);
        self.state = SwipeState::Dragging(overlay);
        self.direction = Direction::Center;
        log::debug!("swipe started on {}x{} row", size.width, size.height);

        if let Some(delegate) = &self.delegate {
            delegate.did_start_swiping(&self.row);
        }
    }

    fn drag_changed(&mut self, dx: f32) {
        if !self.config.should_drag {
            log::trace!("drag change ignored: dragging disabled");
            return;
        }
        let width = self.row_width();
        let SwipeState::Dragging(overlay) = &mut self.state else {
            log::trace!("drag change ignored outside a drag");
            return;
        };

        overlay.content_offset += dx;
        let percentage = drag_percentage(overlay.content_offset, width);
        self.direction = Direction::from_percentage(percentage);
        apply_drag_visuals(
            overlay,
            &self.registry,
            &self.config,
            percentage,
            self.direction,
        );

        if let Some(delegate) = &self.delegate {
            delegate.did_swipe_with_percentage(&self.row, percentage);
        }
    }

    fn end_drag(&mut self, velocity: Point) {
        if !matches!(self.state, SwipeState::Dragging(_)) {
            log::trace!("drag end ignored outside a drag");
            return;
        }
        let SwipeState::Dragging(overlay) = std::mem::replace(&mut self.state, SwipeState::Idle)
        else {
            return;
        };

        let width = self.row_width();
        let first = self.config.thresholds.first;
        let percentage = drag_percentage(overlay.content_offset, width);
        let direction = Direction::from_percentage(percentage);
        let duration = release_duration(velocity.x, width);
        let before = before_trigger(percentage, direction, first);
        let slot = self
            .registry
            .active_slot(percentage, &self.config.thresholds);
        let placement = self.config.icon_placement();

        let terminal = match slot {
            Some(slot) if !before && slot.animation == SlotAnimation::Slide => {
                let target = direction.signum() * width;
                let icon_x = icon_center_x(direction.signum(), direction, first, width, placement);
                TerminalAnimation::slide(&overlay, duration, target, icon_x, slot.callback())
            }
            _ => {
                let icon_x = icon_center_x(0.0, direction, first, width, placement);
                let completion = slot.filter(|_| !before).map(Slot::callback);
                TerminalAnimation::bounce(
                    &overlay,
                    duration,
                    self.config.default_color,
                    icon_x,
                    completion,
                )
            }
        };
        log::debug!(
            "swipe released at {percentage:.3} ({direction:?}): {:?} over {duration:.3}s, armed: {}",
            terminal.kind(),
            terminal.is_armed()
        );

        self.direction = direction;
        self.state = SwipeState::Exiting(overlay, terminal);

        if let Some(delegate) = &self.delegate {
            delegate.did_end_swiping(&self.row);
        }
    }

    fn row_width(&self) -> f32 {
        let width = self.row.size().width;
        assert_positive_width(width);
        width
    }
}

fn assert_positive_width(width: f32) {
    assert!(
        width > 0.0 && width.is_finite(),
        "swipe row must have a positive width, got {width}"
    );
}

fn admits_gesture<R>(
    config: &SwipeConfig,
    registry: &SlotRegistry<R>,
    idle: bool,
    velocity: Point,
) -> bool {
    if !config.should_drag || !idle {
        return false;
    }
    if velocity.x.abs() <= velocity.y.abs() {
        return false;
    }
    // Moving left reveals the right-side slots and vice versa.
    let side = if velocity.x < 0.0 { Side::Right } else { Side::Left };
    registry.has_slot(side)
}

fn apply_drag_visuals<S, R>(
    overlay: &mut SwipeOverlay<S>,
    registry: &SlotRegistry<R>,
    config: &SwipeConfig,
    percentage: f32,
    direction: Direction,
) {
    let first = config.thresholds.first;
    let Some(slot) = registry.active_slot(percentage, &config.thresholds) else {
        overlay.indicator_color = config.default_color;
        return;
    };

    overlay.indicator_color = if before_trigger(percentage, direction, first) {
        config.default_color
    } else {
        slot.color
    };
    overlay.show_icon(&slot.icon);

    let width = overlay.row_size().width;
    if let Some(x) = icon_center_x(percentage, direction, first, width, config.icon_placement()) {
        overlay.place_icon(x);
        overlay.icon_alpha = icon_alpha(percentage, first);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
