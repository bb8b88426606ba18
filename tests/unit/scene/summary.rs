use super::*;
use crate::data::model::AreaChange;
use crate::data::sample;
use crate::foundation::core::{Canvas, Fps};
use crate::scene::Shape;

fn render(scene: &dyn Scene, frame: i64) -> Vec<SceneNode> {
    let ctx = SceneCtx {
        frame,
        fps: Fps::whole(30),
        canvas: Canvas::FULL_HD,
    };
    let mut out = Vec::new();
    scene.render(&ctx, &mut out).unwrap();
    out
}

fn node<'a>(nodes: &'a [SceneNode], id: &str) -> &'a SceneNode {
    nodes
        .iter()
        .find(|n| n.id == id)
        .unwrap_or_else(|| panic!("missing node {id}"))
}

fn text_of(n: &SceneNode) -> &str {
    match &n.shape {
        Shape::Text { text, .. } => text,
        _ => panic!("{} is not text", n.id),
    }
}

fn rect_width(n: &SceneNode) -> f64 {
    match n.shape {
        Shape::Rect { rect, .. } => rect.width(),
        _ => panic!("{} is not a rect", n.id),
    }
}

fn summary() -> Arc<StaticSummary> {
    Arc::new(sample::static_summary().unwrap())
}

#[test]
fn metric_cards_show_formatted_values() {
    let nodes = render(&MetricsScene::new(summary()), 60);
    let values: Vec<&str> = (0..4)
        .map(|i| text_of(node(&nodes, &format!("metrics/{i}/value"))))
        .collect();
    assert_eq!(values, ["5", "4", "3", "4,171"]);
    assert_eq!(text_of(node(&nodes, "metrics/3/label")), "Lines Changed");
    assert_eq!(node(&nodes, "metrics/3").opacity, 1.0);
}

#[test]
fn metric_cards_are_staggered() {
    let nodes = render(&MetricsScene::new(summary()), 3);
    assert!(node(&nodes, "metrics/0").opacity > 0.0);
    assert_eq!(node(&nodes, "metrics/1").opacity, 0.0);
    assert_eq!(node(&nodes, "metrics/1").transform.as_coeffs()[0], 0.0);
}

#[test]
fn metric_grid_is_two_by_two() {
    let nodes = render(&MetricsScene::new(summary()), 60);
    let origin = |i: usize| match node(&nodes, &format!("metrics/{i}")).shape {
        Shape::Rect { rect, .. } => rect.origin(),
        _ => panic!("card is not a rect"),
    };
    assert_eq!(origin(0).y, origin(1).y);
    assert_eq!(origin(0).x, origin(2).x);
    assert!(origin(2).y > origin(0).y);
}

#[test]
fn change_rows_follow_kind_order() {
    let nodes = render(&ChangesScene::new(summary()), 120);
    let labels: Vec<&str> = (0..4)
        .map(|i| text_of(node(&nodes, &format!("change/{i}/badge/label"))))
        .collect();
    assert_eq!(labels, ["Feature", "Fix", "Fix", "Chore"]);
    assert_eq!(text_of(node(&nodes, "change/0/text")), "add monorepo command to cli");
    let Shape::Rect { fill, .. } = node(&nodes, "change/3/badge").shape else {
        panic!("badge is not a rect");
    };
    assert_eq!(fill, theme::ACCENT);
    assert_eq!(node(&nodes, "change/3/text").transform.translation().x, 0.0);
}

#[test]
fn change_rows_slide_from_minus_hundred() {
    let nodes = render(&ChangesScene::new(summary()), 0);
    let row = node(&nodes, "change/0/text");
    assert_eq!(row.transform.translation().x, -100.0);
    assert_eq!(row.opacity, 0.0);
}

#[test]
fn area_bars_scale_to_the_busiest_area() {
    let nodes = render(&AreasScene::new(summary()), 120);
    let track = rect_width(node(&nodes, "area/0/additions/track"));
    assert!((track - 1420.0).abs() < 1e-9);
    assert!((rect_width(node(&nodes, "area/0/additions")) - track).abs() < 1e-9);
    let deletions = rect_width(node(&nodes, "area/0/deletions"));
    assert!((deletions - 1629.0 / 2015.0 * track).abs() < 1e-9);
    assert_eq!(text_of(node(&nodes, "area/0/additions/label")), "+2015");
    assert_eq!(text_of(node(&nodes, "area/0/deletions/label")), "-1629");
    assert_eq!(text_of(node(&nodes, "area/0/files")), "49 files");
}

#[test]
fn area_bars_start_empty() {
    let nodes = render(&AreasScene::new(summary()), 0);
    assert_eq!(rect_width(node(&nodes, "area/0/additions")), 0.0);
    assert_eq!(node(&nodes, "area/0/name").opacity, 0.0);
}

#[test]
fn untouched_areas_draw_empty_bars() {
    let mut s = sample::static_summary().unwrap();
    s.areas = vec![AreaChange {
        name: "docs".into(),
        files: 0,
        additions: 0,
        deletions: 0,
    }];
    let nodes = render(&AreasScene::new(Arc::new(s)), 120);
    assert_eq!(rect_width(node(&nodes, "area/0/additions")), 0.0);
    assert_eq!(rect_width(node(&nodes, "area/0/deletions")), 0.0);
}
