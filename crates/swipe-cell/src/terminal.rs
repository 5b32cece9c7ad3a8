//! Release animations: bounce home or slide off screen.

use swipe_animation::{secs_to_nanos, AnimationSpec, Easing, Transition};
use swipe_ui_graphics::Color;

use crate::overlay::SwipeOverlay;
use crate::slot::{SlotAnimation, SlotCallback};
use crate::triggers::{BOUNCE_SPRING, SLIDE_TEARDOWN_DELAY};

/// Result of one frame of a terminal animation.
pub(crate) struct TerminalFrame<R> {
    /// Callback to run now, before any teardown.
    pub completion: Option<SlotCallback<R>>,
    pub teardown: bool,
}

impl<R> TerminalFrame<R> {
    fn running() -> Self {
        Self {
            completion: None,
            teardown: false,
        }
    }
}

pub(crate) struct TerminalAnimation<R> {
    kind: SlotAnimation,
    offset: Transition<f32>,
    indicator: Option<Transition<Color>>,
    icon_alpha: Transition<f32>,
    icon_x: Option<Transition<f32>>,
    /// Present only when a slot was armed at release.
    completion: Option<SlotCallback<R>>,
    linger_until_nanos: Option<u64>,
}

impl<R> TerminalAnimation<R> {
    /// Spring back to offset 0, fading the icon and restoring `default_color`.
    pub(crate) fn bounce<S>(
        overlay: &SwipeOverlay<S>,
        duration_secs: f32,
        default_color: Color,
        icon_target_x: Option<f32>,
        completion: Option<SlotCallback<R>>,
    ) -> Self {
        let spec = AnimationSpec::tween_secs(duration_secs, Easing::Spring(BOUNCE_SPRING));
        Self {
            kind: SlotAnimation::Bounce,
            offset: Transition::new(overlay.content_offset, 0.0, spec),
            indicator: Some(Transition::new(
                overlay.indicator_color,
                default_color,
                spec,
            )),
            icon_alpha: Transition::new(overlay.icon_alpha, 0.0, spec),
            icon_x: Self::icon_transition(overlay, icon_target_x, spec),
            completion,
            linger_until_nanos: None,
        }
    }

    /// Carry the row to `target_offset` (a full row width), fading the icon.
    pub(crate) fn slide<S>(
        overlay: &SwipeOverlay<S>,
        duration_secs: f32,
        target_offset: f32,
        icon_target_x: Option<f32>,
        completion: SlotCallback<R>,
    ) -> Self {
        let spec = AnimationSpec::tween_secs(duration_secs, Easing::EaseOut);
        Self {
            kind: SlotAnimation::Slide,
            offset: Transition::new(overlay.content_offset, target_offset, spec),
            indicator: None,
            icon_alpha: Transition::new(overlay.icon_alpha, 0.0, spec),
            icon_x: Self::icon_transition(overlay, icon_target_x, spec),
            completion: Some(completion),
            linger_until_nanos: None,
        }
    }

    fn icon_transition<S>(
        overlay: &SwipeOverlay<S>,
        target_x: Option<f32>,
        spec: AnimationSpec,
    ) -> Option<Transition<f32>> {
        overlay.icon.as_ref()?;
        let start_x = overlay.icon_frame.center().x;
        target_x.map(|target_x| Transition::new(start_x, target_x, spec))
    }

    pub(crate) fn kind(&self) -> SlotAnimation {
        self.kind
    }

    pub(crate) fn duration_secs(&self) -> f32 {
        self.offset.spec().duration_secs()
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.completion.is_some()
    }

    pub(crate) fn advance<S>(
        &mut self,
        frame_time_nanos: u64,
        overlay: &mut SwipeOverlay<S>,
    ) -> TerminalFrame<R> {
        if let Some(deadline) = self.linger_until_nanos {
            return TerminalFrame {
                completion: None,
                teardown: frame_time_nanos >= deadline,
            };
        }

        overlay.content_offset = *self.offset.advance(frame_time_nanos);
        if let Some(indicator) = self.indicator.as_mut() {
            overlay.indicator_color = indicator.advance(frame_time_nanos).clamped();
        }
        // The spring overshoots; color and opacity must stay in range.
        overlay.icon_alpha = (*self.icon_alpha.advance(frame_time_nanos)).clamp(0.0, 1.0);
        if let Some(icon_x) = self.icon_x.as_mut() {
            overlay.place_icon(*icon_x.advance(frame_time_nanos));
        }

        if !self.offset.is_finished() {
            return TerminalFrame::running();
        }

        match self.kind {
            SlotAnimation::Bounce => TerminalFrame {
                completion: self.completion.take(),
                teardown: true,
            },
            SlotAnimation::Slide => {
                self.linger_until_nanos =
                    Some(frame_time_nanos + secs_to_nanos(SLIDE_TEARDOWN_DELAY));
                TerminalFrame {
                    completion: self.completion.take(),
                    teardown: false,
                }
            }
        }
    }
}
