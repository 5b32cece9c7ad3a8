//! Animation primitives for swipeable rows
//!
//! Transitions are pull-based: the owner feeds frame timestamps in
//! nanoseconds and reads back the interpolated value. There is no global
//! runtime, so a host drives them from whatever frame clock it has.

mod animation;

pub use animation::*;
