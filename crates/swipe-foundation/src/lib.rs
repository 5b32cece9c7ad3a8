//! Input plumbing for swipeable rows
//!
//! Raw single-pointer events go in, horizontal pan [`DragEvent`]s come out.
//! Hosts that already have a platform pan recognizer can skip
//! [`PanGestureRecognizer`] and build [`DragEvent`]s directly.

pub mod gesture_constants;
mod input;
mod pan;
mod velocity_tracker;

pub use gesture_constants::*;
pub use input::*;
pub use pan::*;
pub use velocity_tracker::*;
