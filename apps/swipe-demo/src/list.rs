//! The list model: integer items, one swipe controller per row.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use anyhow::{bail, Result};
use swipe_cell::{
    Icon, SlotAnimation, SlotPosition, SwipeConfig, SwipeController, SwipeRow, TriggerThresholds,
};
use swipe_foundation::DragEvent;
use swipe_ui_graphics::{Color, Point, Size};

use crate::clock::FrameClock;
use crate::script::Gesture;

pub const ROW_SIZE: Size = Size::new(320.0, 44.0);
const ICON_SIZE: Size = Size::new(24.0, 24.0);
/// Frames `settle` will deliver before giving up on a stuck animation.
const MAX_SETTLE_FRAMES: usize = 600;

#[derive(Clone, Debug, PartialEq)]
pub struct ListRow {
    pub id: u64,
    pub item: i64,
}

impl SwipeRow for ListRow {
    type Snapshot = String;

    fn size(&self) -> Size {
        ROW_SIZE
    }

    fn snapshot(&self) -> String {
        format!("item {}", self.item)
    }
}

/// Receives every slot completion with the row and the slot that fired.
pub trait SwipeCompleteListener {
    fn swipe_did_complete(&self, row: &ListRow, position: SlotPosition);
}

/// Completions are queued while frames run and applied afterwards, so the
/// list is never mutated from inside a controller callback.
#[derive(Default)]
struct CompletionQueue {
    pending: RefCell<VecDeque<(u64, SlotPosition)>>,
}

impl SwipeCompleteListener for CompletionQueue {
    fn swipe_did_complete(&self, row: &ListRow, position: SlotPosition) {
        log::info!("item {} completed {position}", row.item);
        self.pending.borrow_mut().push_back((row.id, position));
    }
}

pub struct SwipeList {
    rows: Vec<SwipeController<ListRow>>,
    completions: Rc<CompletionQueue>,
    next_id: u64,
}

impl SwipeList {
    pub fn new(items: impl IntoIterator<Item = i64>) -> Self {
        let mut list = Self {
            rows: Vec::new(),
            completions: Rc::new(CompletionQueue::default()),
            next_id: 0,
        };
        for item in items {
            let row = list.make_row(item);
            list.rows.push(row);
        }
        list
    }

    pub fn items(&self) -> Vec<i64> {
        self.rows.iter().map(|row| row.row().item).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&SwipeController<ListRow>> {
        self.rows.get(index)
    }

    pub fn needs_frame(&self) -> bool {
        self.rows.iter().any(SwipeController::needs_frame)
    }

    /// Drag row `gesture.row` to its percentage and release it.
    pub fn swipe(&mut self, gesture: Gesture) -> Result<()> {
        let len = self.rows.len();
        let Some(controller) = self.rows.get_mut(gesture.row) else {
            bail!("row {} does not exist, the list has {len} rows", gesture.row);
        };
        if controller.needs_frame() {
            bail!("row {} is still animating", gesture.row);
        }

        controller.handle_drag(DragEvent::began());
        controller.handle_drag(DragEvent::changed(gesture.percentage * ROW_SIZE.width, 0.0));
        log::debug!(
            "row {} at {:.2}, active slot {:?}",
            gesture.row,
            controller.percentage(),
            controller.active_position()
        );
        controller.handle_drag(DragEvent::ended(Point::new(gesture.velocity, 0.0)));
        Ok(())
    }

    /// Deliver one frame to every animating row, then apply completions.
    pub fn on_frame(&mut self, frame_time_nanos: u64) {
        for row in self.rows.iter_mut().filter(|row| row.needs_frame()) {
            row.on_frame(frame_time_nanos);
        }
        self.apply_completions();
    }

    /// Run frames from `clock` until nothing is animating.
    ///
    /// Returns the number of frames delivered.
    pub fn settle(&mut self, clock: &mut impl FrameClock) -> usize {
        let mut frames = 0;
        while self.needs_frame() && frames < MAX_SETTLE_FRAMES {
            self.on_frame(clock.next_frame());
            frames += 1;
        }
        if self.needs_frame() {
            log::warn!("rows still animating after {frames} frames");
        }
        frames
    }

    fn apply_completions(&mut self) {
        loop {
            let next = self.completions.pending.borrow_mut().pop_front();
            let Some((id, position)) = next else {
                break;
            };
            let Some(index) = self.rows.iter().position(|row| row.row().id == id) else {
                log::debug!("completion for removed row {id}");
                continue;
            };
            match position {
                SlotPosition::Left1 => {
                    let item = self.rows[index].row().item.saturating_mul(10);
                    let row = self.make_row(item);
                    self.rows.insert(index + 1, row);
                    log::info!("inserted {item} at {}", index + 1);
                }
                SlotPosition::Right1 => {
                    let removed = self.rows.remove(index);
                    log::info!("deleted item {}", removed.row().item);
                }
                other => log::info!("{other} has no list action"),
            }
        }
    }

    fn make_row(&mut self, item: i64) -> SwipeController<ListRow> {
        let id = self.next_id;
        self.next_id += 1;
        let config = SwipeConfig::default()
            .with_thresholds(TriggerThresholds::new(0.15, 0.40, 0.65, 0.75));
        let mut controller = SwipeController::with_config(ListRow { id, item }, config);

        let actions = [
            (SlotPosition::Left1, Color::GREEN, "check", SlotAnimation::Slide),
            (SlotPosition::Left2, Color::BROWN, "list", SlotAnimation::Slide),
            (SlotPosition::Left3, Color::PURPLE, "clock", SlotAnimation::Slide),
            (SlotPosition::Right1, Color::RED, "cross", SlotAnimation::Bounce),
        ];
        for (position, color, icon, animation) in actions {
            let listener: Rc<dyn SwipeCompleteListener> = self.completions.clone();
            controller.configure_at(
                position,
                color,
                Icon::new(icon, ICON_SIZE),
                animation,
                move |row| listener.swipe_did_complete(row, position),
            );
        }
        controller
    }
}

#[cfg(test)]
#[path = "tests/list_tests.rs"]
mod tests;
