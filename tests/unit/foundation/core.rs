use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn local_frame_is_signed() {
    let r = FrameRange::starting_at(90, 150);
    assert_eq!(r.end, FrameIndex(240));
    assert_eq!(r.local_frame(FrameIndex(100)), 10);
    assert_eq!(r.local_frame(FrameIndex(80)), -10);
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    let deserialized: Fps = serde_json::from_str(r#"{"num":30,"den":0}"#).unwrap();
    assert!(deserialized.validate().is_err());
}

#[test]
fn fps_converts_frames_to_secs() {
    let fps = Fps::whole(30);
    assert_eq!(fps.frames_to_secs(30), 1.0);
    assert_eq!(fps.frames_to_secs(-15), -0.5);
    assert_eq!(fps.secs_to_frames_ceil(1.01), 31);

    let ntsc = Fps::new(30000, 1001).unwrap();
    assert!((ntsc.frame_duration_secs() - 1001.0 / 30000.0).abs() < 1e-15);
}

#[test]
fn canvas_center_is_half_extent() {
    assert_eq!(Canvas::FULL_HD.center(), Point::new(960.0, 540.0));
}
