use std::fmt;

use crate::foundation::color::Color;
use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::Scene;

/// A scene placed on the composition timeline.
///
/// With a `range` the scene is active only inside that window and sees frames relative to its
/// start; without one it is active for the whole composition.
pub struct Layer {
    /// Active window, `None` for always-on layers.
    pub range: Option<FrameRange>,
    /// Frame builder.
    pub scene: Box<dyn Scene>,
}

impl Layer {
    /// Whether the layer draws at `frame`.
    pub fn is_active(&self, frame: FrameIndex) -> bool {
        self.range.is_none_or(|r| r.contains(frame))
    }

    /// Frame as seen by the layer's scene.
    pub fn local_frame(&self, frame: FrameIndex) -> i64 {
        match self.range {
            Some(r) => r.local_frame(frame),
            None => frame.0 as i64,
        }
    }
}

impl fmt::Debug for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layer")
            .field("range", &self.range)
            .field("scene", &self.scene.name())
            .finish()
    }
}

/// A fully built reel: timeline, output format and ordered layers.
#[derive(Debug)]
pub struct Composition {
    /// Registry id.
    pub id: String,
    /// Frame rate.
    pub fps: Fps,
    /// Output size.
    pub canvas: Canvas,
    /// Total frames.
    pub duration: FrameIndex,
    /// Clear color.
    pub background: Color,
    /// Layers, bottom first.
    pub layers: Vec<Layer>,
}

impl Composition {
    /// The whole timeline `[0, duration)`.
    pub fn full_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: self.duration,
        }
    }

    /// Check timing and layer windows.
    pub fn validate(&self) -> ReelResult<()> {
        if self.id.trim().is_empty() {
            return Err(ReelError::validation("composition id must be non-empty"));
        }
        self.fps.validate()?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ReelError::validation("canvas width/height must be > 0"));
        }
        if self.duration.0 == 0 {
            return Err(ReelError::validation("composition duration must be > 0"));
        }
        for layer in &self.layers {
            let Some(range) = layer.range else {
                continue;
            };
            if range.is_empty() {
                return Err(ReelError::validation(format!(
                    "layer '{}' has an empty range",
                    layer.scene.name()
                )));
            }
            if range.end > self.duration {
                return Err(ReelError::validation(format!(
                    "layer '{}' ends at frame {} past the composition end {}",
                    layer.scene.name(),
                    range.end.0,
                    self.duration.0
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
