use super::*;
use crate::foundation::error::ReelError;
use crate::scene::title::TitleScene;

#[test]
fn defaults_match_the_reel_format() {
    let comp = CompositionBuilder::new("Card", 90)
        .layer(TitleScene::new("Hello", None))
        .build()
        .unwrap();
    assert_eq!(comp.fps, Fps::whole(30));
    assert_eq!(comp.canvas, Canvas::FULL_HD);
    assert_eq!(comp.background, theme::BACKGROUND);
    assert_eq!(comp.duration, FrameIndex(90));
    assert!(comp.layers[0].range.is_none());
}

#[test]
fn sequences_keep_insertion_order() {
    let comp = CompositionBuilder::new("Two", 60)
        .fps(Fps::whole(60))
        .canvas(Canvas {
            width: 1280,
            height: 720,
        })
        .background(Color::WHITE)
        .sequence(0, 30, TitleScene::new("A", None))
        .sequence(30, 30, TitleScene::new("B", None))
        .build()
        .unwrap();
    assert_eq!(comp.fps.num, 60);
    assert_eq!(comp.canvas.width, 1280);
    assert_eq!(comp.layers[1].range, Some(FrameRange::starting_at(30, 30)));
}

#[test]
fn build_validates() {
    let err = CompositionBuilder::new("Late", 30)
        .sequence(20, 30, TitleScene::new("A", None))
        .build()
        .unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));
    assert!(CompositionBuilder::new(" ", 30).build().is_err());
}
