//! Drag geometry: percentages, trigger zones, icon placement and release timing.

use swipe_animation::SpringSpec;

/// Upper part of the release duration, in seconds.
pub const DURATION_HIGH_LIMIT: f32 = 0.10;
/// Lower part of the release duration, in seconds.
pub const DURATION_LOW_LIMIT: f32 = 0.25;
/// How long the overlay stays after a slide, in seconds, so the host's own
/// row-removal animation plays over it.
pub const SLIDE_TEARDOWN_DELAY: f32 = 0.30;
/// Spring used for the bounce back.
pub const BOUNCE_SPRING: SpringSpec = SpringSpec::bouncy();

/// Drag direction, from the sign of the drag percentage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Center,
    /// Row moved leftward; right-side slots are revealed.
    Left,
    /// Row moved rightward; left-side slots are revealed.
    Right,
}

impl Direction {
    pub fn from_percentage(percentage: f32) -> Self {
        if percentage < 0.0 {
            Direction::Left
        } else if percentage > 0.0 {
            Direction::Right
        } else {
            Direction::Center
        }
    }

    /// Sign of the row offset in this direction.
    pub fn signum(self) -> f32 {
        match self {
            Direction::Center => 0.0,
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// The four ascending activation thresholds, as fractions of the row width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerThresholds {
    pub first: f32,
    pub second: f32,
    pub third: f32,
    pub fourth: f32,
}

impl Default for TriggerThresholds {
    fn default() -> Self {
        Self {
            first: 0.15,
            second: 0.35,
            third: 0.55,
            fourth: 0.75,
        }
    }
}

impl TriggerThresholds {
    /// # Panics
    ///
    /// Unless `0 < first < second < third < fourth < 1`.
    pub fn new(first: f32, second: f32, third: f32, fourth: f32) -> Self {
        Self {
            first,
            second,
            third,
            fourth,
        }
        .validated()
    }

    pub fn with_first(mut self, first: f32) -> Self {
        self.first = first;
        self.validated()
    }

    pub fn with_second(mut self, second: f32) -> Self {
        self.second = second;
        self.validated()
    }

    pub fn with_third(mut self, third: f32) -> Self {
        self.third = third;
        self.validated()
    }

    pub fn with_fourth(mut self, fourth: f32) -> Self {
        self.fourth = fourth;
        self.validated()
    }

    pub fn is_valid(&self) -> bool {
        0.0 < self.first
            && self.first < self.second
            && self.second < self.third
            && self.third < self.fourth
            && self.fourth < 1.0
    }

    pub(crate) fn validated(self) -> Self {
        assert!(
            self.is_valid(),
            "trigger thresholds must satisfy 0 < first < second < third < fourth < 1, got {self:?}"
        );
        self
    }

    /// Magnitude at which each rank may take over. Rank 1 only needs the
    /// drag to point at its side.
    pub(crate) fn activation_gates(&self) -> [f32; 4] {
        [0.0, self.second, self.third, self.fourth]
    }
}

/// `offset / width`, clamped to [-1, 1].
pub fn drag_percentage(offset: f32, width: f32) -> f32 {
    (offset / width).clamp(-1.0, 1.0)
}

/// `percentage * width`, clamped to [-width, width].
pub fn drag_offset(percentage: f32, width: f32) -> f32 {
    (percentage * width).clamp(-width, width)
}

/// True while the drag has not reached the first threshold in its direction.
///
/// A centered drag has crossed nothing and counts as before-trigger.
pub fn before_trigger(percentage: f32, direction: Direction, first: f32) -> bool {
    match direction {
        Direction::Left => percentage > -first,
        Direction::Right => percentage < first,
        Direction::Center => true,
    }
}

/// Icon opacity: ramps from 0 to 1 up to the first threshold, then stays at 1.
pub fn icon_alpha(percentage: f32, first: f32) -> f32 {
    if percentage.abs() < first {
        percentage.abs() / first
    } else {
        1.0
    }
}

/// How the icon moves while the row is dragged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconPlacement {
    /// Track the drag past the first threshold, trailing the row edge.
    Continuous,
    /// Stay parked near the revealed edge.
    Floating,
}

/// Horizontal center of the icon, in row coordinates.
///
/// `None` means "leave the icon where it is", which only happens for a
/// floating icon while the drag is centered.
pub fn icon_center_x(
    percentage: f32,
    direction: Direction,
    first: f32,
    width: f32,
    placement: IconPlacement,
) -> Option<f32> {
    let inset = drag_offset(first / 2.0, width);
    match placement {
        IconPlacement::Continuous => Some(if percentage >= 0.0 && percentage < first {
            inset
        } else if percentage >= first {
            drag_offset(percentage - first / 2.0, width)
        } else if percentage >= -first {
            width - inset
        } else {
            width + drag_offset(percentage + first / 2.0, width)
        }),
        IconPlacement::Floating => match direction {
            Direction::Right => Some(inset),
            Direction::Left => Some(width - inset),
            Direction::Center => None,
        },
    }
}

/// Release animation duration in seconds.
///
/// A still release takes `DURATION_HIGH_LIMIT + DURATION_LOW_LIMIT`; a flick
/// at one row-width per second or faster takes the minimum of 0.20 s.
pub fn release_duration(velocity_x: f32, width: f32) -> f32 {
    let span = DURATION_HIGH_LIMIT - DURATION_LOW_LIMIT;
    let velocity = velocity_x.clamp(-width, width);
    let diff = (velocity / width * span).abs();
    (DURATION_HIGH_LIMIT + DURATION_LOW_LIMIT) - diff
}

#[cfg(test)]
#[path = "tests/triggers_tests.rs"]
mod tests;
