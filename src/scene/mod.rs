//! Scene graph model and per-scene frame builders.
//!
//! A [`Scene`] turns its props and a sequence-local frame into display-list nodes. Scenes hold
//! no mutable state; every animated quantity is a [`Spring`] evaluated at the context frame.

use crate::animation::ops;
use crate::animation::spring::Spring;
use crate::foundation::core::{Canvas, Fps, Point};
use crate::foundation::error::ReelResult;

/// GitHub event activity scenes.
pub mod activity;
/// Ranked contributor and contributor activity scenes.
pub mod contributors;
/// Code churn scenes.
pub mod code_changes;
/// Issue and pull request scenes.
pub mod issues;
/// Text measurement and formatting.
pub mod layout;
/// Display-list node types.
pub mod node;
/// Static daily summary scenes.
pub mod summary;
/// Palette and spring presets.
pub mod theme;
/// Animated title card.
pub mod title;

pub use node::{FrameGraph, SceneNode, Shape, Stroke, TextAlign};

/// Clock and output parameters a scene renders against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneCtx {
    /// Frame relative to the start of the scene's sequence; negative before it starts.
    pub frame: i64,
    /// Composition frame rate.
    pub fps: Fps,
    /// Output size.
    pub canvas: Canvas,
}

impl SceneCtx {
    /// Context whose clock starts `frames` later.
    pub fn delayed(self, frames: i64) -> Self {
        Self {
            frame: self.frame.saturating_sub(frames),
            ..self
        }
    }

    /// Context for item `index` of a list whose items start `step` frames apart.
    pub fn stagger(self, index: usize, step: i64) -> Self {
        Self {
            frame: ops::stagger(self.frame, index, step),
            ..self
        }
    }

    /// Spring value between `from` and `to` at this context's frame.
    pub fn spring(self, spring: &Spring, from: f64, to: f64) -> f64 {
        spring.value(self.frame, self.fps, from, to)
    }

    /// Normalized spring progress (`0 -> 1`) at this context's frame.
    pub fn progress(self, spring: &Spring) -> f64 {
        self.spring(spring, 0.0, 1.0)
    }
}

/// A frame builder for one visual section of a composition.
pub trait Scene: Send + Sync {
    /// Short identifier, used as a node id prefix and in logs.
    fn name(&self) -> &'static str;

    /// Append this scene's nodes for `ctx.frame` in painter's order.
    fn render(&self, ctx: &SceneCtx, out: &mut Vec<SceneNode>) -> ReelResult<()>;
}

/// Centered heading (2.5rem bold) with an optional accent subtitle, faded by `opacity`.
pub(crate) fn push_heading(
    out: &mut Vec<SceneNode>,
    prefix: &str,
    canvas: Canvas,
    top: f64,
    title: &str,
    subtitle: Option<&str>,
    opacity: f64,
) {
    let cx = canvas.w() / 2.0;
    let title_size = 2.5 * theme::REM;
    out.push(
        SceneNode::text(
            format!("{prefix}/title"),
            title,
            Point::new(cx, top + title_size),
            title_size,
            theme::TEXT,
            TextAlign::Center,
        )
        .bold()
        .faded(opacity),
    );
    if let Some(subtitle) = subtitle {
        let size = 1.8 * theme::REM;
        out.push(
            SceneNode::text(
                format!("{prefix}/subtitle"),
                subtitle,
                Point::new(cx, top + title_size * 1.2 + 0.5 * theme::REM + size),
                size,
                theme::ACCENT,
                TextAlign::Center,
            )
            .faded(opacity),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/ctx.rs"]
mod tests;
