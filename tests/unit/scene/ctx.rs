use super::*;
use crate::animation::spring::SpringConfig;

fn ctx(frame: i64) -> SceneCtx {
    SceneCtx {
        frame,
        fps: Fps::whole(30),
        canvas: Canvas::FULL_HD,
    }
}

#[test]
fn delayed_and_staggered_clocks_shift_back() {
    assert_eq!(ctx(40).delayed(30).frame, 10);
    assert_eq!(ctx(40).stagger(3, 5).frame, 25);
    assert_eq!(ctx(0).stagger(2, 5).frame, -10);
}

#[test]
fn spring_before_start_returns_from() {
    let s = Spring::new(SpringConfig::damped(0.5, 12.0)).unwrap();
    assert_eq!(ctx(10).delayed(20).spring(&s, -50.0, 0.0), -50.0);
    assert_eq!(ctx(0).progress(&s), 0.0);
    assert_eq!(ctx(300).progress(&s), 1.0);
}

#[test]
fn heading_emits_title_and_optional_subtitle() {
    let mut out = Vec::new();
    push_heading(&mut out, "x", Canvas::FULL_HD, 100.0, "Title", Some("Sub"), 0.5);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].id, "x/title");
    assert_eq!(out[1].opacity, 0.5);

    out.clear();
    push_heading(&mut out, "x", Canvas::FULL_HD, 100.0, "Title", None, 1.0);
    assert_eq!(out.len(), 1);
}
