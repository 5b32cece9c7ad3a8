//! Headless robot for driving a swipe controller in tests.
//!
//! The robot owns a [`SwipeController`] over a [`TestRow`], feeds it drag or
//! pointer events and steps a simulated 60 FPS frame clock, recording every
//! delegate notification and slot completion along the way.
//!
//! ```
//! use swipe_cell::{SlotAnimation, SlotPosition};
//! use swipe_testing::{SwipeRobot, TestRow};
//!
//! let mut robot = SwipeRobot::new(TestRow::new(1));
//! robot.configure(SlotPosition::Left1, SlotAnimation::Slide);
//! robot.drag_to_percentage(0.5);
//! robot.release(0.0);
//! robot.run_until_idle();
//! assert_eq!(robot.log().completions(), vec![(SlotPosition::Left1, 1)]);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use swipe_cell::{
    Icon, SlotAnimation, SlotPosition, SwipeConfig, SwipeController, SwipeDelegate, SwipePhase,
    SwipeRow,
};
use swipe_foundation::{DragEvent, PointerEvent, PointerEventKind};
use swipe_ui_graphics::{Color, Point, Size};

/// One simulated frame at ~60 FPS.
pub const FRAME_NANOS: u64 = 16_666_667;

/// Hard stop for [`SwipeRobot::run_until_idle`].
const MAX_SIMULATED_NANOS: u64 = 10_000_000_000;

#[derive(Clone, Debug, PartialEq)]
pub struct TestRow {
    pub id: u32,
    pub size: Size,
}

impl TestRow {
    pub const DEFAULT_SIZE: Size = Size::new(320.0, 40.0);

    pub fn new(id: u32) -> Self {
        Self {
            id,
            size: Self::DEFAULT_SIZE,
        }
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }
}

impl SwipeRow for TestRow {
    type Snapshot = String;

    fn size(&self) -> Size {
        self.size
    }

    fn snapshot(&self) -> String {
        format!("row-{}", self.id)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SwipeNotification {
    Started(u32),
    Swiped(u32, f32),
    Ended(u32),
    /// Slot completion with the row id and the frame time it ran at.
    Completed(SlotPosition, u32, u64),
}

/// Delegate plus completion sink shared by the robot and its slots.
#[derive(Default)]
pub struct NotificationLog {
    entries: RefCell<Vec<SwipeNotification>>,
    frame_time_nanos: Cell<u64>,
}

impl NotificationLog {
    pub fn entries(&self) -> Vec<SwipeNotification> {
        self.entries.borrow().clone()
    }

    /// (position, row id) of every completion, in order.
    pub fn completions(&self) -> Vec<(SlotPosition, u32)> {
        self.entries
            .borrow()
            .iter()
            .filter_map(|entry| match entry {
                SwipeNotification::Completed(position, row, _) => Some((*position, *row)),
                _ => None,
            })
            .collect()
    }

    /// Frame time of the first completion.
    pub fn completed_at(&self) -> Option<u64> {
        self.entries.borrow().iter().find_map(|entry| match entry {
            SwipeNotification::Completed(_, _, at) => Some(*at),
            _ => None,
        })
    }

    pub fn percentages(&self) -> Vec<f32> {
        self.entries
            .borrow()
            .iter()
            .filter_map(|entry| match entry {
                SwipeNotification::Swiped(_, percentage) => Some(*percentage),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    fn push(&self, notification: SwipeNotification) {
        log::trace!("robot recorded {notification:?}");
        self.entries.borrow_mut().push(notification);
    }
}

impl SwipeDelegate<TestRow> for NotificationLog {
    fn did_start_swiping(&self, row: &TestRow) {
        self.push(SwipeNotification::Started(row.id));
    }

    fn did_swipe_with_percentage(&self, row: &TestRow, percentage: f32) {
        self.push(SwipeNotification::Swiped(row.id, percentage));
    }

    fn did_end_swiping(&self, row: &TestRow) {
        self.push(SwipeNotification::Ended(row.id));
    }
}

/// Color a robot-configured slot gets, so tests can tell them apart.
pub fn slot_color(position: SlotPosition) -> Color {
    match position {
        SlotPosition::Left1 => Color::GREEN,
        SlotPosition::Left2 => Color::BROWN,
        SlotPosition::Left3 => Color::PURPLE,
        SlotPosition::Left4 => Color::BLUE,
        SlotPosition::Right1 => Color::RED,
        SlotPosition::Right2 => Color::BLACK,
        SlotPosition::Right3 => Color::WHITE,
        SlotPosition::Right4 => Color::rgb(1.0, 0.5, 0.0),
    }
}

pub struct SwipeRobot {
    controller: SwipeController<TestRow>,
    log: Rc<NotificationLog>,
    frame_time_nanos: u64,
    pointer_time_ms: i64,
}

impl SwipeRobot {
    pub fn new(row: TestRow) -> Self {
        Self::with_config(row, SwipeConfig::default())
    }

    pub fn with_config(row: TestRow, config: SwipeConfig) -> Self {
        let log = Rc::new(NotificationLog::default());
        let mut controller = SwipeController::with_config(row, config);
        let delegate: Rc<dyn SwipeDelegate<TestRow>> = log.clone();
        controller.set_delegate(Some(delegate));
        Self {
            controller,
            log,
            frame_time_nanos: 0,
            pointer_time_ms: 0,
        }
    }

    /// Register a slot whose completion is recorded in the log.
    pub fn configure(&mut self, position: SlotPosition, animation: SlotAnimation) {
        let log = Rc::clone(&self.log);
        let icon = Icon::new(format!("{position}"), Size::new(20.0, 20.0));
        self.controller
            .configure_at(position, slot_color(position), icon, animation, move |row| {
                log.push(SwipeNotification::Completed(
                    position,
                    row.id,
                    log.frame_time_nanos.get(),
                ))
            });
    }

    pub fn controller(&self) -> &SwipeController<TestRow> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SwipeController<TestRow> {
        &mut self.controller
    }

    pub fn log(&self) -> &NotificationLog {
        &self.log
    }

    pub fn now_nanos(&self) -> u64 {
        self.frame_time_nanos
    }

    pub fn phase(&self) -> SwipePhase {
        self.controller.phase()
    }

    pub fn width(&self) -> f32 {
        self.controller.row().size.width
    }

    pub fn begin(&mut self) {
        self.controller.handle_drag(DragEvent::began());
    }

    pub fn drag_by(&mut self, dx: f32) {
        self.controller.handle_drag(DragEvent::changed(dx, 0.0));
    }

    /// Begin if needed, then move the row so it sits at `percentage`.
    pub fn drag_to_percentage(&mut self, percentage: f32) {
        if self.controller.phase() == SwipePhase::Idle {
            self.begin();
        }
        let target = percentage * self.width();
        let dx = target - self.controller.content_offset();
        self.drag_by(dx);
    }

    pub fn release(&mut self, velocity_x: f32) {
        self.controller
            .handle_drag(DragEvent::ended(Point::new(velocity_x, 0.0)));
    }

    pub fn cancel(&mut self) {
        self.controller.handle_drag(DragEvent::cancelled());
    }

    /// Deliver one frame and move the clock forward.
    pub fn frame(&mut self) {
        self.log.frame_time_nanos.set(self.frame_time_nanos);
        self.controller.on_frame(self.frame_time_nanos);
        self.frame_time_nanos += FRAME_NANOS;
    }

    /// Step frames until the controller stops asking for them.
    ///
    /// Returns the number of frames delivered.
    pub fn run_until_idle(&mut self) -> usize {
        let started = self.frame_time_nanos;
        let mut frames = 0;
        while self.controller.needs_frame() {
            assert!(
                self.frame_time_nanos - started < MAX_SIMULATED_NANOS,
                "controller never went idle"
            );
            self.frame();
            frames += 1;
        }
        frames
    }

    /// Step frames, sampling the content offset after each one.
    pub fn sample_offsets_until_idle(&mut self) -> Vec<f32> {
        let mut offsets = Vec::new();
        while self.controller.needs_frame() {
            self.frame();
            offsets.push(self.controller.content_offset());
            assert!(offsets.len() < 1_000, "controller never went idle");
        }
        offsets
    }

    pub fn pointer(&mut self, kind: PointerEventKind, x: f32, y: f32) {
        let event = PointerEvent::new(kind, Point::new(x, y), self.pointer_time_ms);
        self.controller.on_pointer_event(event);
    }

    /// Press at `from`, move to `to` in `steps` 10ms moves, then lift.
    pub fn pointer_swipe(&mut self, from: Point, to: Point, steps: u32) {
        self.pointer(PointerEventKind::Down, from.x, from.y);
        for step in 1..=steps.max(1) {
            self.pointer_time_ms += 10;
            let fraction = step as f32 / steps.max(1) as f32;
            let x = from.x + (to.x - from.x) * fraction;
            let y = from.y + (to.y - from.y) * fraction;
            self.pointer(PointerEventKind::Move, x, y);
        }
        self.pointer_time_ms += 10;
        self.pointer(PointerEventKind::Up, to.x, to.y);
        self.pointer_time_ms += 100;
    }
}
