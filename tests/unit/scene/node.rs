use super::*;

#[test]
fn faded_multiplies_and_clamps() {
    let n = SceneNode::circle("c", Point::new(0.0, 0.0), 4.0, Color::WHITE).faded(0.5);
    assert_eq!(n.opacity, 0.5);
    assert_eq!(n.clone().faded(0.5).opacity, 0.25);
    assert_eq!(n.clone().faded(3.0).opacity, 1.0);
    assert_eq!(n.faded(-1.0).opacity, 0.0);
}

#[test]
fn scale_about_keeps_pivot_fixed() {
    let pivot = Point::new(100.0, 50.0);
    let t = scale_about(pivot, 0.25);
    assert_eq!(t * pivot, pivot);
    assert_eq!(t * Point::new(104.0, 50.0), Point::new(101.0, 50.0));
}

#[test]
fn bold_and_stroke_only_touch_matching_shapes() {
    let t = SceneNode::text("t", "hi", Point::ZERO, 16.0, Color::WHITE, TextAlign::Center).bold();
    assert!(matches!(t.shape, Shape::Text { bold: true, .. }));
    let t = t.stroked(2.0, Color::WHITE);
    assert!(matches!(t.shape, Shape::Text { .. }));

    let r = SceneNode::rect("r", Rect::new(0.0, 0.0, 1.0, 1.0), 0.0, Color::WHITE)
        .stroked(1.0, Color::WHITE);
    assert!(matches!(r.shape, Shape::Rect { stroke: Some(_), .. }));
}

#[test]
fn transforms_compose_in_application_order() {
    let n = SceneNode::circle("c", Point::ZERO, 1.0, Color::WHITE)
        .scaled_about(Point::ZERO, 2.0)
        .translated(10.0, 0.0);
    assert_eq!(n.transform * Point::new(1.0, 0.0), Point::new(12.0, 0.0));
}

#[test]
fn shapes_serialize_with_kind_tag() {
    let n = SceneNode::line("l", Point::ZERO, Point::new(1.0, 0.0), 2.0, Color::WHITE);
    let v = serde_json::to_value(&n).unwrap();
    assert_eq!(v["shape"]["kind"], "line");
    assert_eq!(v["shape"]["stroke"]["color"], "#FFFFFFFF");
    let back: SceneNode = serde_json::from_value(v).unwrap();
    assert_eq!(back, n);
}
