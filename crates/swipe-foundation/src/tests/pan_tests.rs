use super::*;

fn down(x: f32, y: f32, t: i64) -> PointerEvent {
    PointerEvent::new(PointerEventKind::Down, Point::new(x, y), t)
}

fn mv(x: f32, y: f32, t: i64) -> PointerEvent {
    PointerEvent::new(PointerEventKind::Move, Point::new(x, y), t)
}

fn up(x: f32, y: f32, t: i64) -> PointerEvent {
    PointerEvent::new(PointerEventKind::Up, Point::new(x, y), t)
}

#[test]
fn movement_inside_slop_does_not_begin() {
    let mut pan = PanGestureRecognizer::new();
    assert_eq!(pan.on_pointer_event(down(10.0, 10.0, 0), |_| true), None);
    let event = pan.on_pointer_event(mv(15.0, 10.0, 8), |_| panic!("asked too early"));
    assert_eq!(event, None);
    assert!(!pan.is_panning());
}

#[test]
fn horizontal_pan_reports_began_changed_ended() {
    let mut pan = PanGestureRecognizer::new();
    pan.on_pointer_event(down(10.0, 20.0, 0), |_| true);

    let began = pan
        .on_pointer_event(mv(30.0, 20.0, 10), |velocity| velocity.x > 0.0)
        .expect("pan should begin");
    assert_eq!(began.phase, DragPhase::Began);
    assert!(pan.is_panning());

    let changed = pan
        .on_pointer_event(mv(50.0, 21.0, 20), |_| unreachable!())
        .expect("changed event");
    assert_eq!(changed.phase, DragPhase::Changed);
    // Measured from the touch-down point, slop included.
    assert_eq!(changed.translation, Point::new(40.0, 1.0));

    let changed = pan
        .on_pointer_event(mv(60.0, 21.0, 30), |_| unreachable!())
        .expect("changed event");
    assert_eq!(changed.translation, Point::new(10.0, 0.0));
    assert!(changed.velocity.x > 0.0);

    let ended = pan
        .on_pointer_event(up(60.0, 21.0, 34), |_| unreachable!())
        .expect("ended event");
    assert_eq!(ended.phase, DragPhase::Ended);
    assert!(ended.is_terminal());
    assert!(!pan.is_panning());
}

#[test]
fn refused_pan_stays_refused_until_lift() {
    let mut pan = PanGestureRecognizer::new();
    pan.on_pointer_event(down(10.0, 10.0, 0), |_| true);
    assert_eq!(pan.on_pointer_event(mv(10.0, 40.0, 10), |_| false), None);
    assert_eq!(pan.on_pointer_event(mv(60.0, 40.0, 20), |_| true), None);
    assert_eq!(pan.on_pointer_event(up(60.0, 40.0, 30), |_| true), None);

    // A fresh touch can begin again.
    pan.on_pointer_event(down(10.0, 10.0, 100), |_| true);
    assert!(pan.on_pointer_event(mv(40.0, 10.0, 110), |_| true).is_some());
}

#[test]
fn cancel_while_panning_reports_cancelled() {
    let mut pan = PanGestureRecognizer::new();
    pan.on_pointer_event(down(0.0, 0.0, 0), |_| true);
    pan.on_pointer_event(mv(-20.0, 0.0, 10), |_| true);
    let cancelled = pan
        .on_pointer_event(
            PointerEvent::new(PointerEventKind::Cancel, Point::new(-20.0, 0.0), 20),
            |_| true,
        )
        .expect("cancel event");
    assert_eq!(cancelled.phase, DragPhase::Cancelled);
}

#[test]
fn second_pointer_is_ignored() {
    let mut pan = PanGestureRecognizer::new();
    pan.on_pointer_event(down(0.0, 0.0, 0), |_| true);
    pan.on_pointer_event(mv(20.0, 0.0, 10), |_| true);
    let other = mv(200.0, 0.0, 12).with_id(7);
    assert_eq!(pan.on_pointer_event(other, |_| true), None);
    assert!(pan.is_panning());
}
