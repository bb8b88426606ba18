use super::*;
use crate::scene::{SceneCtx, SceneNode};

struct Blank;

impl Scene for Blank {
    fn name(&self) -> &'static str {
        "blank"
    }

    fn render(&self, _ctx: &SceneCtx, _out: &mut Vec<SceneNode>) -> ReelResult<()> {
        Ok(())
    }
}

fn comp(layers: Vec<Layer>) -> Composition {
    Composition {
        id: "Test".into(),
        fps: Fps::whole(30),
        canvas: Canvas::FULL_HD,
        duration: FrameIndex(100),
        background: Color::WHITE,
        layers,
    }
}

#[test]
fn windowed_layer_sees_local_frames() {
    let layer = Layer {
        range: Some(FrameRange::starting_at(40, 20)),
        scene: Box::new(Blank),
    };
    assert!(!layer.is_active(FrameIndex(39)));
    assert!(layer.is_active(FrameIndex(40)));
    assert!(!layer.is_active(FrameIndex(60)));
    assert_eq!(layer.local_frame(FrameIndex(45)), 5);
}

#[test]
fn always_on_layer_sees_composition_frames() {
    let layer = Layer {
        range: None,
        scene: Box::new(Blank),
    };
    assert!(layer.is_active(FrameIndex(99)));
    assert_eq!(layer.local_frame(FrameIndex(99)), 99);
}

#[test]
fn validate_rejects_bad_windows() {
    assert!(comp(vec![]).validate().is_ok());

    let past_end = comp(vec![Layer {
        range: Some(FrameRange::starting_at(90, 20)),
        scene: Box::new(Blank),
    }]);
    assert!(matches!(past_end.validate(), Err(ReelError::Validation(_))));

    let empty = comp(vec![Layer {
        range: Some(FrameRange::starting_at(10, 0)),
        scene: Box::new(Blank),
    }]);
    assert!(empty.validate().is_err());
}

#[test]
fn validate_rejects_zero_duration_and_bad_fps() {
    let mut c = comp(vec![]);
    c.duration = FrameIndex(0);
    assert!(c.validate().is_err());

    let mut c = comp(vec![]);
    c.fps = Fps { num: 30, den: 0 };
    assert!(c.validate().is_err());
}

#[test]
fn debug_names_layer_scenes() {
    let c = comp(vec![Layer {
        range: None,
        scene: Box::new(Blank),
    }]);
    assert!(format!("{c:?}").contains("\"blank\""));
    assert_eq!(c.full_range().len_frames(), 100);
}
