use super::*;

use swipe_ui_graphics::Color;

const FRAME_NANOS: u64 = 16_666_667; // ~60 FPS

fn ease_out(duration_nanos: u64) -> AnimationSpec {
    AnimationSpec::tween(duration_nanos, Easing::EaseOut)
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::EaseOut,
        Easing::Spring(SpringSpec::bouncy()),
        Easing::Spring(SpringSpec::new(1.0, 0.0)),
    ];

    for easing in easings {
        let start = easing.transform(0.0);
        let end = easing.transform(1.0);
        assert!(
            (start - 0.0).abs() < 0.01,
            "Start should be ~0 for {:?}",
            easing
        );
        assert!(
            (end - 1.0).abs() < 0.01,
            "End should be ~1 for {:?}",
            easing
        );
    }
}

#[test]
fn ease_out_leads_linear() {
    for step in 1..10 {
        let fraction = step as f32 / 10.0;
        assert!(
            Easing::EaseOut.transform(fraction) > fraction,
            "ease-out should be ahead of linear at {fraction}"
        );
    }
}

#[test]
fn bouncy_spring_overshoots_before_settling() {
    let spring = SpringSpec::bouncy();
    let peak = (1..100)
        .map(|step| spring.transform(step as f32 / 100.0))
        .fold(f32::MIN, f32::max);
    assert!(peak > 1.0, "under-damped spring should overshoot, peak {peak}");
    assert!((spring.transform(0.99) - 1.0).abs() < 0.01);
}

#[test]
fn ease_out_is_monotonic() {
    let mut previous = 0.0;
    for step in 0..=100 {
        let value = Easing::EaseOut.transform(step as f32 / 100.0);
        assert!(value >= previous, "ease-out went back at step {step}");
        previous = value;
    }
}

#[test]
fn critically_damped_spring_never_overshoots() {
    let spring = SpringSpec::new(1.0, 0.0);
    for step in 0..=100 {
        let value = spring.transform(step as f32 / 100.0);
        assert!(value <= 1.0 + f32::EPSILON, "overshoot {value} at step {step}");
    }
}

#[test]
fn spring_starts_with_its_initial_velocity() {
    let spring = SpringSpec::bouncy();
    let dt = 1e-4;
    let slope = spring.transform(dt) / dt;
    assert!((slope - spring.initial_velocity).abs() < 0.05, "slope {slope}");
}

#[test]
fn tween_secs_converts_duration() {
    let spec = AnimationSpec::tween_secs(0.25, Easing::EaseOut);
    assert_eq!(spec.duration_nanos, 250_000_000);
    assert_eq!(spec.easing, Easing::EaseOut);
    assert!((spec.duration_secs() - 0.25).abs() < 1e-6);
}

#[test]
fn secs_to_nanos_saturates_negative_and_nan() {
    assert_eq!(secs_to_nanos(0.35), 350_000_000);
    assert_eq!(secs_to_nanos(-1.0), 0);
    assert_eq!(secs_to_nanos(f32::NAN), 0);
}

#[test]
fn transition_interpolates_over_time() {
    let mut transition = Transition::new(0.0f32, 100.0, ease_out(100_000_000));

    // First frame pins the start time.
    assert_eq!(*transition.advance(1_000), 0.0);

    let mut frame_time = 1_000;
    let mut saw_midpoint = false;
    for _ in 0..32 {
        if transition.is_finished() {
            break;
        }
        frame_time += FRAME_NANOS;
        let value = *transition.advance(frame_time);
        if value > 0.0 && value < 100.0 {
            saw_midpoint = true;
        }
    }

    assert!(saw_midpoint, "transition should report intermediate values");
    assert!(transition.is_finished());
    assert_eq!(*transition.value(), 100.0);
}

#[test]
fn transition_measures_time_from_its_first_frame() {
    let mut transition = Transition::new(0.0f32, 1.0, ease_out(50_000_000));
    assert_eq!(*transition.advance(1_000_000_000), 0.0);
    assert!(*transition.advance(1_040_000_000) < 1.0);
    assert!(!transition.is_finished());
    assert_eq!(*transition.advance(1_050_000_000), 1.0);
    assert!(transition.is_finished());
}

#[test]
fn spring_transition_overshoots_its_target() {
    let spec = AnimationSpec::tween(100_000_000, Easing::Spring(SpringSpec::bouncy()));
    let mut transition = Transition::new(0.0f32, 10.0, spec);
    transition.advance(0);
    let peak = (1..10)
        .map(|step| *transition.advance(step * 10_000_000))
        .fold(f32::MIN, f32::max);
    assert!(peak > 10.0, "peak {peak}");
    assert_eq!(*transition.advance(100_000_000), 10.0);
}

#[test]
fn zero_duration_transition_finishes_on_first_frame() {
    let mut transition = Transition::new(Color::RED, Color::BLUE, ease_out(0));
    assert_eq!(*transition.advance(5), Color::BLUE);
    assert!(transition.is_finished());
}

#[test]
fn finished_transition_ignores_later_frames() {
    let mut transition = Transition::new(1.0f32, 0.0, ease_out(10));
    transition.advance(0);
    transition.advance(100);
    assert_eq!(*transition.advance(0), 0.0);
}
