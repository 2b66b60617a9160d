// Scenario and invariant tests for the timeline integrator.

use scrub_core::Timeline;

#[test]
fn forward_overflow_wraps_modulo_duration() {
    let mut tl = Timeline::new();
    // Build up to 9.5 media-seconds with one unit-speed tick.
    assert_eq!(tl.advance(9500.0, 1.0, 1.0, 0.0, Some(10.0)), Some(9.5));

    // One 1000 ms tick forward at speed 1.5 pushes past the end.
    let applied = tl.advance(1000.0, 1.0, 1.5, 0.0, Some(10.0));
    assert_eq!(tl.position(), 11.0, "accumulator is not reduced");
    assert_eq!(applied, Some(1.0));
}

#[test]
fn backward_underflow_wraps_from_the_end() {
    let mut tl = Timeline::new();
    assert_eq!(tl.advance(200.0, 1.0, 1.0, 0.0, Some(10.0)), Some(0.2));

    // One 1000 ms tick backward at speed 1.5 drops below zero.
    let applied = tl.advance(1000.0, -1.0, 1.5, 0.0, Some(10.0)).unwrap();
    assert!((applied - 8.7).abs() < 1e-12);
    assert!((tl.position() - 8.7).abs() < 1e-12, "wrap mutates the accumulator");
}

#[test]
fn applied_position_stays_in_range() {
    // Drive a mix of directions, speeds and scroll impulses; every applied
    // value must stay inside [0, D).
    let mut tl = Timeline::new();
    let d = 10.0;
    let mut sign = 1.0;
    for i in 0..2000 {
        if i % 37 == 0 {
            sign = -sign;
        }
        let speed = 0.5 + (i % 7) as f64 * 0.4;
        let scroll = ((i % 11) as f64 - 5.0) * 30.0;
        if let Some(p) = tl.advance(16.0, sign, speed, scroll, Some(d)) {
            assert!((0.0..d).contains(&p), "applied {p} out of range at step {i}");
        }
    }
}

#[test]
fn unknown_duration_skips_application_but_accumulates() {
    let mut tl = Timeline::new();
    assert_eq!(tl.advance(1000.0, 1.0, 1.5, 0.0, None), None);
    assert_eq!(tl.position(), 1.5);
    assert_eq!(tl.advance(1000.0, 1.0, 1.5, 0.0, Some(0.0)), None);
    assert_eq!(tl.position(), 3.0);
    assert_eq!(tl.advance(1000.0, 1.0, 1.5, 0.0, Some(f64::NAN)), None);
    assert_eq!(tl.position(), 4.5);

    // First frame with a real duration applies normally.
    assert_eq!(tl.advance(1000.0, 1.0, 1.5, 0.0, Some(4.0)), Some(2.0));
}

#[test]
fn negative_accumulator_stays_finite_without_duration() {
    // Scrubbing backward before metadata loads must not poison the state.
    let mut tl = Timeline::new();
    for _ in 0..10 {
        assert_eq!(tl.advance(100.0, -1.0, 1.5, 0.0, None), None);
    }
    assert!(tl.position() < 0.0);
    assert!(tl.position().is_finite());

    // Once the duration arrives, the wrap brings the applied value in range.
    let applied = tl.advance(100.0, -1.0, 1.5, 0.0, Some(10.0)).unwrap();
    assert!((0.0..10.0).contains(&applied));
}

#[test]
fn scroll_input_contributes_without_time_input() {
    // Fully held (speed 0): only the scroll magnitude moves the position.
    let mut tl = Timeline::new();
    assert_eq!(tl.advance(16.0, 1.0, 0.0, 500.0, Some(10.0)), Some(0.5));
}
