use super::*;
use crate::composition::registry::{self, GITHUB_ACTIVITY, TOP_CONTRIBUTORS};

fn comp(id: &str) -> Composition {
    registry::build(id, None).unwrap()
}

#[test]
fn out_of_bounds_frame_is_an_evaluation_error() {
    let c = comp(TOP_CONTRIBUTORS);
    let err = Evaluator::eval_frame(&c, FrameIndex(300)).unwrap_err();
    assert!(matches!(err, ReelError::Evaluation(_)));
    assert!(Evaluator::eval_frame(&c, FrameIndex(299)).is_ok());
}

#[test]
fn only_active_layers_contribute() {
    let c = comp(GITHUB_ACTIVITY);
    let title = Evaluator::eval_frame(&c, FrameIndex(10)).unwrap();
    assert!(title.node("title/word/0").is_some());
    assert!(title.node("timeline/axis").is_none());
    assert!(title.node("stats/panel").is_some());

    let timeline = Evaluator::eval_frame(&c, FrameIndex(100)).unwrap();
    assert!(timeline.node("title/word/0").is_none());
    assert!(timeline.node("timeline/axis").is_some());
}

#[test]
fn layers_see_sequence_local_frames() {
    let c = comp(GITHUB_ACTIVITY);
    // First frame of the timeline window: markers have not started.
    let g = Evaluator::eval_frame(&c, FrameIndex(90)).unwrap();
    assert_eq!(g.node("timeline/marker/0").map(|n| n.opacity), Some(0.0));
}

#[test]
fn graph_carries_output_format() {
    let c = comp(TOP_CONTRIBUTORS);
    let g = Evaluator::eval_frame(&c, FrameIndex(0)).unwrap();
    assert_eq!(g.frame, FrameIndex(0));
    assert_eq!(g.canvas, c.canvas);
    assert_eq!(g.background, c.background);
}

#[test]
fn range_is_in_frame_order_with_small_chunks() {
    let c = comp(TOP_CONTRIBUTORS);
    let threading = EvalThreading {
        chunk_size: 0,
        ..EvalThreading::default()
    };
    let graphs = Evaluator::eval_range(&c, FrameRange::starting_at(5, 7), &threading).unwrap();
    let frames: Vec<u64> = graphs.iter().map(|g| g.frame.0).collect();
    assert_eq!(frames, (5..12).collect::<Vec<_>>());
}

#[test]
fn parallel_range_matches_serial() {
    let c = comp(TOP_CONTRIBUTORS);
    let range = FrameRange::starting_at(0, 40);
    let serial = Evaluator::eval_range(&c, range, &EvalThreading::default()).unwrap();
    let parallel = Evaluator::eval_range(
        &c,
        range,
        &EvalThreading {
            parallel: true,
            chunk_size: 7,
            threads: Some(3),
        },
    )
    .unwrap();
    assert_eq!(serial, parallel);
}

#[test]
fn zero_threads_is_rejected() {
    let c = comp(TOP_CONTRIBUTORS);
    let threading = EvalThreading {
        parallel: true,
        threads: Some(0),
        ..EvalThreading::default()
    };
    let err = Evaluator::eval_range(&c, FrameRange::starting_at(0, 2), &threading).unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));
}

#[test]
fn range_past_the_end_is_rejected() {
    let c = comp(TOP_CONTRIBUTORS);
    let err = Evaluator::eval_range(
        &c,
        FrameRange::starting_at(290, 20),
        &EvalThreading::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ReelError::Evaluation(_)));
}

#[test]
fn sink_errors_stop_the_range() {
    let c = comp(TOP_CONTRIBUTORS);
    let mut seen = 0;
    let res = Evaluator::eval_range_with(
        &c,
        FrameRange::starting_at(0, 10),
        &EvalThreading {
            chunk_size: 2,
            ..EvalThreading::default()
        },
        |_| {
            seen += 1;
            if seen == 3 {
                Err(ReelError::evaluation("sink closed"))
            } else {
                Ok(())
            }
        },
    );
    assert!(res.is_err());
    assert_eq!(seen, 3);
}

#[test]
fn threading_parses_with_defaults() {
    let t: EvalThreading = serde_json::from_str(r#"{ "parallel": true }"#).unwrap();
    assert!(t.parallel);
    assert_eq!(t.chunk_size, 64);
    assert_eq!(t.threads, None);
}
