//! Pure math/data for swipeable rows
//!
//! Colors and geometry primitives shared by the animation, input and
//! swipe-cell crates. Nothing in here knows about gestures.

mod color;
mod geometry;

pub use color::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Rect, Size};
}
