//! End-to-end swipe sessions driven through the headless robot.

use std::cell::Cell;
use std::rc::Rc;

use swipe_cell::{Icon, SlotAnimation, SlotPosition, SwipeConfig, SwipePhase, TriggerThresholds};
use swipe_testing::prelude::*;
use swipe_testing::robot_assertions::{assert_approx_eq, assert_non_decreasing};
use swipe_ui_graphics::{Color, Point, Size};

fn robot_with(slots: &[(SlotPosition, SlotAnimation)]) -> SwipeRobot {
    let mut robot = SwipeRobot::new(TestRow::new(7));
    for (position, animation) in slots {
        robot.configure(*position, *animation);
    }
    robot
}

#[test]
fn slide_past_trigger_completes_once_after_the_slide() {
    let mut robot = robot_with(&[(SlotPosition::Left1, SlotAnimation::Slide)]);

    robot.drag_to_percentage(0.5);
    robot.release(0.0);
    assert_eq!(robot.phase(), SwipePhase::Exiting);
    assert_eq!(robot.controller().terminal_animation(), Some(SlotAnimation::Slide));

    robot.run_until_idle();

    assert_eq!(robot.log().completions(), vec![(SlotPosition::Left1, 7)]);
    let completed_at = robot.log().completed_at().expect("slide completed");
    assert!(
        (340_000_000..370_000_000).contains(&completed_at),
        "completion ran at {completed_at}ns"
    );
    assert_eq!(robot.phase(), SwipePhase::Idle);
    assert!(robot.controller().overlay().is_none());
}

#[test]
fn overlay_lingers_after_slide_completion() {
    let mut robot = robot_with(&[(SlotPosition::Left1, SlotAnimation::Slide)]);
    robot.drag_to_percentage(0.5);
    robot.release(0.0);

    while robot.log().completions().is_empty() {
        robot.frame();
    }
    let completed_at = robot.log().completed_at().unwrap_or_default();
    assert_eq!(robot.phase(), SwipePhase::Exiting);
    assert_approx_eq(robot.controller().content_offset(), 320.0, 0.5, "slid out");

    robot.run_until_idle();
    assert!(robot.now_nanos() - completed_at >= 300_000_000);
    assert_eq!(robot.log().completions().len(), 1);
}

#[test]
fn short_drag_bounces_back_without_completion() {
    let mut robot = robot_with(&[(SlotPosition::Left1, SlotAnimation::Slide)]);

    robot.drag_to_percentage(0.05);
    robot.release(0.0);
    assert_eq!(robot.controller().terminal_animation(), Some(SlotAnimation::Bounce));
    robot.run_until_idle();

    assert!(robot.log().completions().is_empty());
    assert_eq!(robot.phase(), SwipePhase::Idle);
    assert_eq!(robot.controller().content_offset(), 0.0);
}

#[test]
fn armed_bounce_completes_when_the_row_settles() {
    let mut robot = robot_with(&[(SlotPosition::Right1, SlotAnimation::Bounce)]);

    robot.drag_to_percentage(-0.4);
    robot.release(0.0);
    let frames = robot.run_until_idle();

    assert!(frames > 1);
    assert_eq!(robot.log().completions(), vec![(SlotPosition::Right1, 7)]);
    assert_eq!(robot.phase(), SwipePhase::Idle);
}

#[test]
fn deeper_slot_wins_past_its_threshold() {
    let mut robot = robot_with(&[
        (SlotPosition::Left1, SlotAnimation::Slide),
        (SlotPosition::Left2, SlotAnimation::Slide),
        (SlotPosition::Left3, SlotAnimation::Slide),
    ]);

    robot.drag_to_percentage(0.45);
    assert_eq!(robot.controller().active_position(), Some(SlotPosition::Left2));
    robot.drag_to_percentage(0.6);
    assert_eq!(robot.controller().active_position(), Some(SlotPosition::Left3));
    robot.drag_to_percentage(0.2);
    assert_eq!(robot.controller().active_position(), Some(SlotPosition::Left1));

    robot.release(0.0);
    robot.run_until_idle();
    assert_eq!(robot.log().completions(), vec![(SlotPosition::Left1, 7)]);
}

#[test]
fn custom_thresholds_shift_activation() {
    let config = SwipeConfig::default()
        .with_thresholds(TriggerThresholds::new(0.15, 0.40, 0.65, 0.75));
    let mut robot = SwipeRobot::with_config(TestRow::new(1), config);
    robot.configure(SlotPosition::Left1, SlotAnimation::Slide);
    robot.configure(SlotPosition::Left2, SlotAnimation::Slide);

    robot.drag_to_percentage(0.38);
    assert_eq!(robot.controller().active_position(), Some(SlotPosition::Left1));
    robot.drag_to_percentage(0.42);
    assert_eq!(robot.controller().active_position(), Some(SlotPosition::Left2));
}

#[test]
fn slide_offsets_never_move_backwards() {
    let mut robot = robot_with(&[(SlotPosition::Left1, SlotAnimation::Slide)]);
    robot.drag_to_percentage(0.3);
    robot.release(0.0);

    let offsets = robot.sample_offsets_until_idle();

    // The last sample is taken after teardown.
    let during = &offsets[..offsets.len() - 1];
    assert_non_decreasing(during, "slide offsets");
    assert_approx_eq(*during.last().unwrap_or(&0.0), 320.0, 0.5, "slide end");
}

#[test]
fn delegate_sees_percentages_in_order() {
    let mut robot = robot_with(&[(SlotPosition::Left1, SlotAnimation::Bounce)]);

    robot.begin();
    for _ in 0..8 {
        robot.drag_by(16.0);
    }
    robot.release(0.0);

    let percentages = robot.log().percentages();
    assert_eq!(percentages.len(), 8);
    assert_non_decreasing(&percentages, "percentages");
    assert_approx_eq(percentages[7], 0.4, 1e-5, "final percentage");

    let entries = robot.log().entries();
    assert_eq!(entries.first(), Some(&SwipeNotification::Started(7)));
    assert_eq!(entries.last(), Some(&SwipeNotification::Ended(7)));
}

#[test]
fn horizontal_pointer_swipe_slides_the_row() {
    let mut robot = robot_with(&[(SlotPosition::Left1, SlotAnimation::Slide)]);

    robot.pointer_swipe(Point::new(20.0, 20.0), Point::new(180.0, 22.0), 8);
    assert_eq!(robot.phase(), SwipePhase::Exiting);
    robot.run_until_idle();

    assert_eq!(robot.log().completions(), vec![(SlotPosition::Left1, 7)]);
}

#[test]
fn vertical_pointer_swipe_is_never_admitted() {
    let mut robot = robot_with(&[
        (SlotPosition::Left1, SlotAnimation::Slide),
        (SlotPosition::Right1, SlotAnimation::Bounce),
    ]);

    robot.pointer_swipe(Point::new(20.0, 5.0), Point::new(26.0, 160.0), 8);

    assert_eq!(robot.phase(), SwipePhase::Idle);
    assert!(robot.log().entries().is_empty());
}

#[test]
fn pointer_swipe_toward_empty_side_is_refused() {
    let mut robot = robot_with(&[(SlotPosition::Left1, SlotAnimation::Slide)]);

    robot.pointer_swipe(Point::new(200.0, 20.0), Point::new(40.0, 20.0), 8);

    assert_eq!(robot.phase(), SwipePhase::Idle);
    assert!(robot.log().entries().is_empty());
}

#[test]
fn reconfigured_slot_fires_only_the_replacement() {
    let mut robot = robot_with(&[(SlotPosition::Left1, SlotAnimation::Slide)]);
    let replaced = Rc::new(Cell::new(0));
    let counter = Rc::clone(&replaced);
    robot.controller_mut().configure_at(
        SlotPosition::Left1,
        Color::BLUE,
        Icon::new("replacement", Size::new(20.0, 20.0)),
        SlotAnimation::Slide,
        move |_| counter.set(counter.get() + 1),
    );

    robot.drag_to_percentage(0.5);
    assert_eq!(
        robot.controller().overlay().map(|overlay| overlay.indicator_color()),
        Some(Color::BLUE)
    );
    robot.release(0.0);
    robot.run_until_idle();

    assert_eq!(replaced.get(), 1);
    assert!(robot.log().completions().is_empty());
}

#[test]
fn cancelled_drag_behaves_like_release() {
    let mut robot = robot_with(&[(SlotPosition::Right1, SlotAnimation::Bounce)]);

    robot.drag_to_percentage(-0.3);
    robot.cancel();
    robot.run_until_idle();

    assert_eq!(robot.log().completions(), vec![(SlotPosition::Right1, 7)]);
}

#[test]
fn sessions_repeat_on_the_same_row() {
    let mut robot = robot_with(&[(SlotPosition::Right1, SlotAnimation::Bounce)]);

    for _ in 0..3 {
        robot.drag_to_percentage(-0.5);
        robot.release(0.0);
        robot.run_until_idle();
    }

    assert_eq!(robot.log().completions().len(), 3);
}
