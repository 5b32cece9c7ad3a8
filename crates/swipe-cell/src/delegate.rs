use swipe_ui_graphics::Size;

/// The host's row, as seen by a swipe controller.
///
/// The value doubles as the row's identity: completion callbacks and
/// delegate methods receive a reference to it.
pub trait SwipeRow {
    /// Picture of the row's current content, drawn over the overlay
    /// while the row is being swiped.
    type Snapshot;

    fn size(&self) -> Size;

    fn snapshot(&self) -> Self::Snapshot;
}

/// Optional drag notifications. Every method defaults to a no-op.
pub trait SwipeDelegate<R> {
    fn did_start_swiping(&self, _row: &R) {}

    fn did_swipe_with_percentage(&self, _row: &R, _percentage: f32) {}

    fn did_end_swiping(&self, _row: &R) {}
}
