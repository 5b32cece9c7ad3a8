//! Easing curves, a damped spring profile and frame-driven transitions.

use swipe_ui_graphics::Color;

/// Nanoseconds per second, for converting host-facing durations.
pub const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for Color {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self.blend(target, fraction)
    }
}

/// Easing functions applied to a linear time fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Ease out using cubic curve.
    EaseOut,
    /// Damped spring that settles exactly at the end of the duration.
    Spring(SpringSpec),
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::Spring(spec) => spec.transform(fraction),
        }
    }
}

/// Cubic bezier curve approximation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric `t` matching the x fraction.
    let mut t = fraction;
    let mut newton_success = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            newton_success = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !newton_success {
        // Binary subdivision when Newton-Raphson did not converge.
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let x = sample_curve(ax, bx, cx, t);
            let delta = x - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

/// ln(1000): the spring envelope decays to 0.1% of the start by the end.
const SPRING_SETTLE_LOG: f32 = 6.907_755;

/// Duration-bounded spring profile.
///
/// Unlike a free-running physics spring, this curve is evaluated over
/// normalized time so the animation always ends when its duration ends.
/// Under-damped values overshoot the target before settling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// 1.0 = critically damped, < 1.0 = under-damped (bouncy).
    pub damping_ratio: f32,
    /// Initial velocity in units of total distance per duration.
    pub initial_velocity: f32,
}

impl SpringSpec {
    pub const fn new(damping_ratio: f32, initial_velocity: f32) -> Self {
        Self {
            damping_ratio,
            initial_velocity,
        }
    }

    /// Snap-back spring used when a row bounces home.
    pub const fn bouncy() -> Self {
        Self::new(0.5, 0.7)
    }

    /// Progress toward the target at the normalized time `fraction`.
    pub fn transform(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }

        let zeta = self.damping_ratio.max(f32::EPSILON);
        let v0 = self.initial_velocity;
        let t = fraction;

        let displacement = if zeta < 1.0 {
            let omega = SPRING_SETTLE_LOG / zeta;
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega * t).exp();
            envelope * ((omega_d * t).cos() + ((zeta * omega - v0) / omega_d) * (omega_d * t).sin())
        } else {
            let omega = SPRING_SETTLE_LOG;
            (-omega * t).exp() * (1.0 + (omega - v0) * t)
        };

        1.0 - displacement
    }
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in nanoseconds.
    pub duration_nanos: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_nanos: u64, easing: Easing) -> Self {
        Self {
            duration_nanos,
            easing,
        }
    }

    /// Create a tween from a duration in seconds.
    pub fn tween_secs(seconds: f32, easing: Easing) -> Self {
        Self::tween(secs_to_nanos(seconds), easing)
    }

    pub fn duration_secs(&self) -> f32 {
        (self.duration_nanos as f64 / NANOS_PER_SECOND) as f32
    }
}

/// Converts seconds to nanoseconds, saturating negatives to zero.
pub fn secs_to_nanos(seconds: f32) -> u64 {
    if seconds <= 0.0 || !seconds.is_finite() {
        return 0;
    }
    (seconds as f64 * NANOS_PER_SECOND).round() as u64
}

/// A single value moving from `start` to `target` under an [`AnimationSpec`].
///
/// The first call to [`Transition::advance`] pins the start time, matching
/// how a frame clock delivers the first callback after scheduling.
#[derive(Debug, Clone)]
pub struct Transition<T: Lerp + Clone> {
    start: T,
    target: T,
    current: T,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    finished: bool,
}

impl<T: Lerp + Clone> Transition<T> {
    pub fn new(start: T, target: T, spec: AnimationSpec) -> Self {
        Self {
            current: start.clone(),
            start,
            target,
            spec,
            start_time_nanos: None,
            finished: false,
        }
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn value(&self) -> &T {
        &self.current
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Eased progress at `frame_time_nanos`; flags the transition finished at the end.
    fn progress_at(&mut self, frame_time_nanos: u64) -> f32 {
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed = frame_time_nanos.saturating_sub(start_time);
        if self.spec.duration_nanos == 0 || elapsed >= self.spec.duration_nanos {
            self.finished = true;
            return 1.0;
        }
        let linear = elapsed as f32 / self.spec.duration_nanos as f32;
        self.spec.easing.transform(linear)
    }

    /// Move the transition to `frame_time_nanos` and return the new value.
    pub fn advance(&mut self, frame_time_nanos: u64) -> &T {
        if self.finished {
            return &self.current;
        }
        let progress = self.progress_at(frame_time_nanos);
        self.current = if self.finished {
            self.target.clone()
        } else {
            self.start.lerp(&self.target, progress)
        };
        &self.current
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
