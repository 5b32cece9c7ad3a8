//! Shared gesture constants for consistent touch/pointer handling.
//!
//! Values are in logical pixels. For very high-density touch screens,
//! consider scaling by the device's DPI factor.

/// Drag threshold in logical pixels.
///
/// A pan is not recognised until the pointer has moved more than this
/// distance from where it went down. Below it, the movement is treated as
/// jitter and the row stays put.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Maximum fling velocity in logical pixels per second.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
