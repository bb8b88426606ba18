use super::*;
use crate::foundation::core::{Canvas, Fps};

fn render(scene: &TitleScene, frame: i64) -> Vec<SceneNode> {
    let ctx = SceneCtx {
        frame,
        fps: Fps::whole(30),
        canvas: Canvas::FULL_HD,
    };
    let mut out = Vec::new();
    scene.render(&ctx, &mut out).unwrap();
    out
}

#[test]
fn one_node_per_word() {
    let scene = TitleScene::new("elizaos Activity", Some("3/27/2024 - 3/30/2024".into()));
    let nodes = render(&scene, 10);
    assert_eq!(nodes.len(), 5);
    assert_eq!(nodes[0].id, "title/word/0");
    assert_eq!(nodes[2].id, "title/subword/0");
}

#[test]
fn words_start_hidden_and_raised() {
    let scene = TitleScene::new("elizaos Activity", None);
    let nodes = render(&scene, 0);
    assert_eq!(nodes[0].opacity, 0.0);
    assert_eq!(nodes[0].transform.translation().y, -50.0);
}

#[test]
fn staggered_words_settle_in_place() {
    let scene = TitleScene::new("a b c", Some("d e".into()));
    let nodes = render(&scene, 89);
    for n in &nodes {
        assert_eq!(n.opacity, 1.0, "{}", n.id);
        assert_eq!(n.transform.translation().y, 0.0, "{}", n.id);
    }
    // The first subtitle word starts after all three title words.
    let early = render(&scene, 14);
    assert_eq!(early[3].opacity, 0.0);
    assert!(early[2].opacity > 0.0);
}

#[test]
fn blank_subtitle_is_dropped() {
    let scene = TitleScene::new("Hello", Some("  ".into()));
    assert_eq!(render(&scene, 30).len(), 1);
}
