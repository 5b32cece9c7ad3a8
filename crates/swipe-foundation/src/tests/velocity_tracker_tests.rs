use super::*;

#[test]
fn empty_tracker_returns_zero() {
    let tracker = VelocityTracker1D::new();
    assert_eq!(tracker.calculate_velocity(), 0.0);
}

#[test]
fn single_point_returns_zero() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 100.0);
    assert_eq!(tracker.calculate_velocity(), 0.0);
}

#[test]
fn constant_velocity() {
    let mut tracker = VelocityTracker1D::new();
    // 100 px per 10ms = 10000 px/s
    tracker.add_data_point(0, 0.0);
    tracker.add_data_point(10, 100.0);
    tracker.add_data_point(20, 200.0);
    tracker.add_data_point(30, 300.0);

    let velocity = tracker.calculate_velocity();
    assert!(
        (velocity - 10000.0).abs() < 1000.0,
        "Expected ~10000, got {}",
        velocity
    );
}

#[test]
fn negative_velocity() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 300.0);
    tracker.add_data_point(10, 200.0);
    tracker.add_data_point(20, 100.0);

    let velocity = tracker.calculate_velocity();
    assert!(velocity < 0.0, "Expected negative velocity, got {}", velocity);
}

#[test]
fn velocity_capped() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 0.0);
    tracker.add_data_point(1, 10_000.0);
    assert_eq!(tracker.calculate_velocity_with_max(8_000.0), 8_000.0);

    tracker.reset();
    tracker.add_data_point(0, 10_000.0);
    tracker.add_data_point(1, 0.0);
    assert_eq!(tracker.calculate_velocity_with_max(8_000.0), -8_000.0);
}

#[test]
fn gap_over_stopped_threshold_returns_zero() {
    let mut tracker = VelocityTracker1D::new();
    tracker.add_data_point(0, 0.0);
    tracker.add_data_point(ASSUME_STOPPED_MS + 1, 100.0);
    assert_eq!(tracker.calculate_velocity(), 0.0);
}

#[test]
fn two_axis_tracker_reports_dominant_axis() {
    let mut tracker = VelocityTracker::new();
    tracker.add_position(0, Point::new(0.0, 0.0));
    tracker.add_position(10, Point::new(50.0, 2.0));
    tracker.add_position(20, Point::new(100.0, 4.0));

    let velocity = tracker.calculate_velocity_with_max(8_000.0);
    assert!(velocity.x > 0.0);
    assert!(velocity.x.abs() > velocity.y.abs());
}
