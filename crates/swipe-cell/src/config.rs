use swipe_ui_graphics::Color;

use crate::triggers::{IconPlacement, TriggerThresholds};

/// Per-controller tunables.
///
/// ```
/// use swipe_cell::{SwipeConfig, TriggerThresholds};
///
/// let config = SwipeConfig::default()
///     .with_thresholds(TriggerThresholds::new(0.15, 0.40, 0.65, 0.75))
///     .with_should_animate_icons(false);
/// assert!(config.should_drag);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    pub thresholds: TriggerThresholds,
    /// Master switch; when false no drag is admitted, begun or moved. A
    /// session already in flight still ends and animates normally.
    pub should_drag: bool,
    /// Continuous icon tracking when true, floating icons otherwise.
    pub should_animate_icons: bool,
    /// Indicator color shown before the first threshold and after a bounce.
    pub default_color: Color,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            thresholds: TriggerThresholds::default(),
            should_drag: true,
            should_animate_icons: true,
            default_color: Color::LIGHT_GRAY,
        }
    }
}

impl SwipeConfig {
    /// # Panics
    ///
    /// When `thresholds` are not strictly ascending inside (0, 1).
    pub fn with_thresholds(mut self, thresholds: TriggerThresholds) -> Self {
        self.thresholds = thresholds.validated();
        self
    }

    pub fn with_should_drag(mut self, should_drag: bool) -> Self {
        self.should_drag = should_drag;
        self
    }

    pub fn with_should_animate_icons(mut self, should_animate_icons: bool) -> Self {
        self.should_animate_icons = should_animate_icons;
        self
    }

    pub fn with_default_color(mut self, default_color: Color) -> Self {
        self.default_color = default_color;
        self
    }

    pub fn icon_placement(&self) -> IconPlacement {
        if self.should_animate_icons {
            IconPlacement::Continuous
        } else {
            IconPlacement::Floating
        }
    }
}
