use super::*;

#[test]
fn stagger_offsets_by_index() {
    assert_eq!(stagger(20, 0, 5), 20);
    assert_eq!(stagger(20, 3, 5), 5);
    assert_eq!(stagger(0, 2, 3), -6);
}

#[test]
fn pulse_is_a_looping_triangle() {
    let at = |f| pulse(f, 60, 0.8, 0.3).unwrap();
    assert!((at(0) - 0.8).abs() < 1e-12);
    assert!((at(30) - 0.3).abs() < 1e-12);
    assert!((at(15) - 0.55).abs() < 1e-12);
    assert!((at(60) - at(0)).abs() < 1e-12);
    assert!((at(75) - at(15)).abs() < 1e-12);
}

#[test]
fn pulse_wraps_negative_frames() {
    let a = pulse(-15, 60, 0.8, 0.3).unwrap();
    let b = pulse(45, 60, 0.8, 0.3).unwrap();
    assert!((a - b).abs() < 1e-12);
}

#[test]
fn pulse_rejects_degenerate_period() {
    assert!(pulse(3, 1, 1.0, 0.0).is_err());
}
