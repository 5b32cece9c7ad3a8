//! Visual state of a live swipe.

use swipe_ui_graphics::{Color, Point, Rect, Size};

use crate::slot::Icon;

/// What the host draws while a row is swiped: an indicator background
/// filling the row, an icon holder inside it, and the row snapshot on top
/// shifted by `content_offset`.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeOverlay<S> {
    snapshot: S,
    row_size: Size,
    pub(crate) content_offset: f32,
    pub(crate) indicator_color: Color,
    pub(crate) icon: Option<Icon>,
    pub(crate) icon_frame: Rect,
    pub(crate) icon_alpha: f32,
}

impl<S> SwipeOverlay<S> {
    pub(crate) fn new(snapshot: S, row_size: Size, default_color: Color) -> Self {
        Self {
            snapshot,
            row_size,
            content_offset: 0.0,
            indicator_color: default_color,
            icon: None,
            icon_frame: Rect::ZERO,
            icon_alpha: 0.0,
        }
    }

    pub fn snapshot(&self) -> &S {
        &self.snapshot
    }

    pub fn row_size(&self) -> Size {
        self.row_size
    }

    /// Horizontal offset of the snapshot from its resting position.
    pub fn content_offset(&self) -> f32 {
        self.content_offset
    }

    /// Frame of the snapshot in row coordinates.
    pub fn content_frame(&self) -> Rect {
        Rect::from_size(self.row_size).translate(self.content_offset, 0.0)
    }

    pub fn indicator_color(&self) -> Color {
        self.indicator_color
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    pub fn icon_frame(&self) -> Rect {
        self.icon_frame
    }

    pub fn icon_alpha(&self) -> f32 {
        self.icon_alpha
    }

    /// Swap the icon holder's content; a no-op when the icon is unchanged.
    pub(crate) fn show_icon(&mut self, icon: &Icon) {
        if self.icon.as_ref() != Some(icon) {
            self.icon = Some(icon.clone());
        }
    }

    /// Center the current icon at `center_x` on the row's vertical middle.
    pub(crate) fn place_icon(&mut self, center_x: f32) {
        let size = self.icon.as_ref().map(|icon| icon.size).unwrap_or(Size::ZERO);
        let center = Point::new(center_x, self.row_size.height / 2.0);
        self.icon_frame = Rect::centered_at(center, size).integral();
    }
}
