use super::*;
use crate::data::model::FileChange;
use crate::data::sample;
use crate::foundation::core::{Canvas, Fps};
use crate::scene::Shape;

fn render(scene: &CodeChangesScene, frame: i64) -> Vec<SceneNode> {
    let ctx = SceneCtx {
        frame,
        fps: Fps::whole(30),
        canvas: Canvas::FULL_HD,
    };
    let mut out = Vec::new();
    scene.render(&ctx, &mut out).unwrap();
    out
}

fn width(nodes: &[SceneNode], id: &str) -> f64 {
    match nodes.iter().find(|n| n.id == id).map(|n| &n.shape) {
        Some(Shape::Rect { rect, .. }) => rect.width(),
        _ => panic!("missing rect {id}"),
    }
}

#[test]
fn widest_bar_spans_the_track() {
    let scene = CodeChangesScene::new(Arc::new(sample::code_changes().unwrap()));
    let nodes = render(&scene, 239);
    let total = width(&nodes, "changes/file/0/added") + width(&nodes, "changes/file/0/deleted");
    assert!((total - 1152.0).abs() < 1e-9);
    assert!(width(&nodes, "changes/file/7/added") < width(&nodes, "changes/file/0/added"));
}

#[test]
fn only_top_files_are_drawn_in_order() {
    let mut set = sample::code_changes().unwrap();
    set.changes.push(FileChange {
        path: "tiny.txt".into(),
        additions: 1,
        deletions: 0,
        total: 1,
    });
    set.changes.reverse();
    let nodes = render(&CodeChangesScene::new(Arc::new(set)), 100);
    assert!(!nodes.iter().any(|n| n.id.starts_with("changes/file/8/")));
    let Some(Shape::Text { text, .. }) = nodes
        .iter()
        .find(|n| n.id == "changes/file/0/path")
        .map(|n| &n.shape)
    else {
        panic!("missing path label");
    };
    assert_eq!(text, "src/core/engine.ts");
}

#[test]
fn phases_start_on_their_offsets() {
    let scene = CodeChangesScene::new(Arc::new(sample::code_changes().unwrap()));
    let nodes = render(&scene, 15);
    let bar = nodes.iter().find(|n| n.id == "changes/file/0/added").unwrap();
    assert_eq!(bar.opacity, 0.0);
    assert_eq!(width(&nodes, "changes/file/0/added"), 0.0);

    let nodes = render(&scene, 60);
    let legend = nodes
        .iter()
        .find(|n| n.id == "changes/legend/added/swatch")
        .unwrap();
    assert_eq!(legend.opacity, 0.0);
    let label = nodes.iter().find(|n| n.id == "changes/file/0/path").unwrap();
    assert!(label.opacity > 0.0);
}

#[test]
fn empty_change_set_draws_heading_and_legend() {
    let set = CodeChangeSet {
        changes: vec![],
        title: "Nothing".into(),
    };
    let nodes = render(&CodeChangesScene::new(Arc::new(set)), 100);
    assert_eq!(nodes.len(), 2 + 4);
}
