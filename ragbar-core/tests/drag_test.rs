//! Drag lifecycle scenarios on the default 30/60/85 bar.

use ragbar_core::zones::{self, Zone};
use ragbar_core::{
    compute_value, CountingCapture, DragController, Threshold, ThresholdSet, TrackSurface,
};

/// 100 px bar starting at x = 0: one pixel per percent.
fn unit_bar() -> DragController<CountingCapture> {
    let mut c = DragController::new(ThresholdSet::default(), CountingCapture::new());
    c.set_surface(Some(TrackSurface::new(0.0, 100.0)));
    c
}

#[test]
fn reference_values() {
    let set = ThresholdSet::default();
    assert_eq!(compute_value(Threshold::RedEnd, -500.0, &set), 0);
    assert_eq!(compute_value(Threshold::GreenEnd, 9999.0, &set), 100);
    assert_eq!(compute_value(Threshold::AmberEnd, 29.0, &set), 32);
    assert_eq!(compute_value(Threshold::AmberEnd, 84.0, &set), 83);
    assert_eq!(compute_value(Threshold::RedEnd, 29.4, &set), 29);
    assert_eq!(compute_value(Threshold::RedEnd, 29.5, &set), 30);
}

#[test]
fn click_without_move_equals_press_update() {
    let mut expected = ThresholdSet::default();
    expected.apply(Threshold::GreenEnd, 91.7);

    let mut c = unit_bar();
    c.press(Threshold::GreenEnd, 91.7);
    c.release();

    assert_eq!(c.thresholds(), &expected);
    assert_eq!(c.thresholds().green_end(), 92);
}

#[test]
fn each_move_reads_latest_values() {
    let mut c = unit_bar();

    // Pull Green down, then Amber up against the new Green.
    c.press(Threshold::GreenEnd, 70.0);
    c.release();
    c.press(Threshold::AmberEnd, 60.0);
    c.pointer_move(90.0);
    c.release();

    assert_eq!(c.thresholds().as_array(), [30, 68, 70]);
}

#[test]
fn full_sweep_keeps_gap() {
    let mut c = unit_bar();
    c.press(Threshold::RedEnd, 30.0);
    for x in (0..=100u32).rev() {
        c.pointer_move(f64::from(x));
    }
    c.pointer_move(100.0);
    c.release();
    assert_eq!(c.thresholds().as_array(), [58, 60, 85]);
}

#[test]
fn crowding_all_three_together() {
    let mut c = unit_bar();
    c.press(Threshold::GreenEnd, 0.0);
    c.release();
    c.press(Threshold::RedEnd, 100.0);
    c.release();
    c.press(Threshold::AmberEnd, 0.0);
    c.release();

    let set = c.thresholds();
    assert_eq!(set.as_array(), [58, 60, 62]);
    assert!(set.is_valid());
}

#[test]
fn repeated_cycles_do_not_leak_capture() {
    let mut c = unit_bar();
    for i in 0..25 {
        let t = Threshold::from_index(i % 3).unwrap();
        c.press(t, f64::from(i as u32 * 4));
        c.pointer_move(50.0);
        c.release();
    }
    assert_eq!(c.capture().live(), 0);
    assert_eq!(c.capture().total_subscribes, 50);
    assert_eq!(c.capture().total_unsubscribes, 25);
}

#[test]
fn release_twice_unsubscribes_once() {
    let mut c = unit_bar();
    c.press(Threshold::RedEnd, 10.0);
    c.release();
    c.release();
    assert_eq!(c.capture().total_unsubscribes, 1);
}

#[test]
fn rendered_segments_follow_drag() {
    let mut c = unit_bar();
    c.press(Threshold::AmberEnd, 50.0);
    c.release();

    let segs = zones::segments(c.thresholds());
    assert_eq!(segs[1].zone, Zone::Amber);
    assert_eq!((segs[1].start, segs[1].end), (30, 50));
    assert_eq!((segs[2].start, segs[2].end), (50, 85));
    assert_eq!(zones::label(c.thresholds(), Zone::Amber), "Amber ≤ 50%");
}
