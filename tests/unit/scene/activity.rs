use super::*;
use crate::data::sample;
use crate::foundation::core::{Canvas, Fps};
use crate::scene::Shape;

fn summary() -> Arc<ActivitySummary> {
    Arc::new(sample::activity_summary(true).unwrap())
}

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

#[test]
fn timeline_emits_axis_markers_labels_and_ticks() {
    let nodes = render(&TimelineScene::new(summary()), 60);
    // axis + 3 markers + 3 labels + 5 ticks
    assert_eq!(nodes.len(), 12);
    let tick = node(&nodes, "timeline/tick/4");
    assert!((tick.opacity - 0.5).abs() < 1e-9);
}

#[test]
fn timeline_markers_sit_on_their_time() {
    let nodes = render(&TimelineScene::new(summary()), 120);
    // Earliest event is the issue at 2024-03-29T09:15Z in a 72h window starting 03-27.
    let Shape::Circle { center, .. } = node(&nodes, "timeline/marker/0").shape else {
        panic!("marker is a circle");
    };
    let expected = 100.0 + (57.25 / 72.0) * 1720.0;
    assert!((center.x - expected).abs() < 1e-6);
    assert_eq!(node(&nodes, "timeline/marker/0").opacity, 1.0);
}

#[test]
fn timeline_markers_start_invisible() {
    let nodes = render(&TimelineScene::new(summary()), 0);
    assert_eq!(node(&nodes, "timeline/marker/0").opacity, 0.0);
    assert_eq!(node(&nodes, "timeline/tick/0").opacity, 0.0);
}

#[test]
fn flow_particles_travel_to_their_repository_row() {
    let scene = ActivityFlowScene::new(summary());
    let start = render(&scene, 0);
    let end = render(&scene, 149);

    // 3 authors, 3 particles, 3 repos.
    assert_eq!(end.len(), 9);

    let Shape::Circle { center, .. } = node(&start, "flow/particle/0/0").shape else {
        panic!("particle is a circle");
    };
    assert_eq!(center.x, 104.0);

    let p = node(&end, "flow/particle/0/0");
    let Shape::Circle { center, .. } = p.shape else {
        panic!("particle is a circle");
    };
    assert_eq!(center.x, 1920.0 - 100.0 + 4.0);
    // frahlg's issue lands on the plugin-sql row, the first repository.
    assert_eq!(center.y, 1080.0 / 4.0 + 4.0);
    assert_eq!(p.transform.as_coeffs()[0], 1.0);
}

#[test]
fn flow_repo_labels_use_short_names() {
    let nodes = render(&ActivityFlowScene::new(summary()), 100);
    let Shape::Text { text, align, .. } = &node(&nodes, "flow/repo/0").shape else {
        panic!("label is text");
    };
    assert_eq!(text, "plugin-sql");
    assert_eq!(*align, TextAlign::Right);
}

#[test]
fn stats_overlay_counts_details() {
    let nodes = render(&StatsOverlayScene::new(summary()), 0);
    assert_eq!(nodes.len(), 2 + 3 * 2);
    let Shape::Text { text, .. } = &node(&nodes, "stats/row/0/count").shape else {
        panic!("count is text");
    };
    // IssuesEvent reports count 1 and carries one detail.
    assert_eq!(text, "1");
    assert!(nodes.iter().all(|n| n.opacity == 1.0));
}

#[test]
fn detail_scene_builds_cards_and_repo_rows() {
    let nodes = render(&ActivityDetailScene::new(summary()), 200);
    assert!(nodes.iter().any(|n| n.id == "detail/card/2/count"));
    let Shape::Text { text, .. } = &node(&nodes, "detail/repo/2/event/0/headline").shape else {
        panic!("headline is text");
    };
    assert_eq!(text, "Code Pushes: Add monorepo command to CLI");
    let Shape::Text { text, .. } = &node(&nodes, "detail/repo/0/event/0/byline").shape else {
        panic!("byline is text");
    };
    assert_eq!(text, "by frahlg at 9:15:00 AM");
    assert!(nodes.iter().all(|n| n.opacity == 1.0));
}

#[test]
fn detail_rows_fade_after_their_panel() {
    let nodes = render(&ActivityDetailScene::new(summary()), 10);
    let panel = node(&nodes, "detail/repo/2");
    let row = node(&nodes, "detail/repo/2/event/0/icon");
    // Third panel starts at frame 10: it is scaled to zero and its row is hidden.
    assert_eq!(panel.transform.as_coeffs()[0], 0.0);
    assert_eq!(row.opacity, 0.0);
}
