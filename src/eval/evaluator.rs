use rayon::prelude::*;

use crate::composition::model::Composition;
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::{FrameGraph, SceneCtx};

/// Options controlling range evaluation.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EvalThreading {
    /// Evaluate the frames of each chunk on a dedicated rayon thread pool.
    pub parallel: bool,
    /// Frames per chunk; results are handed out chunk by chunk, in frame order.
    pub chunk_size: usize,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for EvalThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Stateless frame evaluator.
pub struct Evaluator;

impl Evaluator {
    /// Evaluate every active layer of `comp` at `frame`, in layer order.
    #[tracing::instrument(skip(comp), fields(comp = %comp.id))]
    pub fn eval_frame(comp: &Composition, frame: FrameIndex) -> ReelResult<FrameGraph> {
        if frame.0 >= comp.duration.0 {
            return Err(ReelError::evaluation(format!(
                "frame {} is out of bounds (duration {})",
                frame.0, comp.duration.0
            )));
        }

        let mut nodes = Vec::new();
        for layer in comp.layers.iter().filter(|l| l.is_active(frame)) {
            let ctx = SceneCtx {
                frame: layer.local_frame(frame),
                fps: comp.fps,
                canvas: comp.canvas,
            };
            layer.scene.render(&ctx, &mut nodes)?;
        }

        Ok(FrameGraph {
            frame,
            canvas: comp.canvas,
            background: comp.background,
            nodes,
        })
    }

    /// Evaluate `range` and collect the graphs in frame order.
    pub fn eval_range(
        comp: &Composition,
        range: FrameRange,
        threading: &EvalThreading,
    ) -> ReelResult<Vec<FrameGraph>> {
        let mut out = Vec::with_capacity(range.len_frames() as usize);
        Self::eval_range_with(comp, range, threading, |g| {
            out.push(g);
            Ok(())
        })?;
        Ok(out)
    }

    /// Evaluate `range` chunk by chunk, handing each graph to `sink` in frame order.
    ///
    /// With `threading.parallel` the frames of a chunk are evaluated on a rayon pool; the sink
    /// still sees them in order. The first error stops the range.
    #[tracing::instrument(skip(comp, threading, sink), fields(comp = %comp.id))]
    pub fn eval_range_with(
        comp: &Composition,
        range: FrameRange,
        threading: &EvalThreading,
        mut sink: impl FnMut(FrameGraph) -> ReelResult<()>,
    ) -> ReelResult<()> {
        if range.start.0 > range.end.0 {
            return Err(ReelError::evaluation("range start must be <= end"));
        }
        if range.end.0 > comp.duration.0 {
            return Err(ReelError::evaluation(format!(
                "range end {} is out of bounds (duration {})",
                range.end.0, comp.duration.0
            )));
        }

        let chunk_size = normalized_chunk_size(threading.chunk_size);
        let pool = if threading.parallel {
            Some(build_thread_pool(threading.threads)?)
        } else {
            None
        };
        tracing::debug!(
            frames = range.len_frames(),
            chunk_size,
            parallel = pool.is_some(),
            threads = pool.as_ref().map(|p| p.current_num_threads()),
            "evaluating range"
        );

        let mut chunk_start = range.start.0;
        while chunk_start < range.end.0 {
            let chunk_end = (chunk_start + chunk_size).min(range.end.0);
            let graphs = match &pool {
                Some(pool) => pool.install(|| {
                    (chunk_start..chunk_end)
                        .into_par_iter()
                        .map(|f| Self::eval_frame(comp, FrameIndex(f)))
                        .collect::<ReelResult<Vec<_>>>()
                })?,
                None => (chunk_start..chunk_end)
                    .map(|f| Self::eval_frame(comp, FrameIndex(f)))
                    .collect::<ReelResult<Vec<_>>>()?,
            };
            tracing::trace!(chunk_start, chunk_end, "chunk evaluated");
            graphs.into_iter().try_for_each(&mut sink)?;
            chunk_start = chunk_end;
        }
        Ok(())
    }
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::validation(
            "eval_range 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
