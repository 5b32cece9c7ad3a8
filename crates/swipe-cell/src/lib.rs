//! Swipeable list-row actions
//!
//! A row dragged sideways reveals up to four action slots per side. Each
//! slot carries a color, an icon, a terminal animation and a completion
//! callback. [`SwipeController`] turns the host's drag events into overlay
//! visuals and, on release, either bounces the row home or slides it off
//! screen, invoking the armed slot's callback with the row.
//!
//! ```
//! use std::rc::Rc;
//! use std::cell::Cell;
//! use swipe_cell::{Icon, Side, SlotAnimation, SwipeController, SwipeRow};
//! use swipe_foundation::DragEvent;
//! use swipe_ui_graphics::{Color, Point, Size};
//!
//! #[derive(Clone)]
//! struct Row(u32);
//!
//! impl SwipeRow for Row {
//!     type Snapshot = ();
//!     fn size(&self) -> Size {
//!         Size::new(320.0, 40.0)
//!     }
//!     fn snapshot(&self) {}
//! }
//!
//! let done = Rc::new(Cell::new(false));
//! let mut controller = SwipeController::new(Row(7));
//! let flag = Rc::clone(&done);
//! controller.configure(Side::Left, 1, Color::GREEN, Icon::new("check", Size::new(20.0, 20.0)),
//!     SlotAnimation::Slide, move |_row: &Row| flag.set(true));
//!
//! controller.handle_drag(DragEvent::began());
//! controller.handle_drag(DragEvent::changed(160.0, 0.0));
//! controller.handle_drag(DragEvent::ended(Point::ZERO));
//!
//! let mut frame = 0;
//! while controller.needs_frame() {
//!     controller.on_frame(frame);
//!     frame += 16_666_667;
//! }
//! assert!(done.get());
//! ```

mod config;
mod controller;
mod delegate;
mod overlay;
mod registry;
mod slot;
mod terminal;
mod triggers;

pub use config::SwipeConfig;
pub use controller::{SwipeController, SwipePhase};
pub use delegate::{SwipeDelegate, SwipeRow};
pub use overlay::SwipeOverlay;
pub use registry::SlotRegistry;
pub use slot::{Icon, Side, Slot, SlotAnimation, SlotCallback, SlotPosition};
pub use triggers::*;
