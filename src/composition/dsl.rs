use crate::composition::model::{Composition, Layer};
use crate::foundation::color::Color;
use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
use crate::foundation::error::ReelResult;
use crate::scene::{Scene, theme};

/// Incremental [`Composition`] construction; [`CompositionBuilder::build`] validates the result.
pub struct CompositionBuilder {
    id: String,
    fps: Fps,
    canvas: Canvas,
    duration: FrameIndex,
    background: Color,
    layers: Vec<Layer>,
}

impl CompositionBuilder {
    /// Builder with the reel defaults: 30 fps, Full HD, GitHub-dark background.
    pub fn new(id: impl Into<String>, duration: u64) -> Self {
        Self {
            id: id.into(),
            fps: Fps::whole(30),
            canvas: Canvas::FULL_HD,
            duration: FrameIndex(duration),
            background: theme::BACKGROUND,
            layers: Vec::new(),
        }
    }

    /// Override the frame rate.
    pub fn fps(mut self, fps: Fps) -> Self {
        self.fps = fps;
        self
    }

    /// Override the output size.
    pub fn canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    /// Override the clear color.
    pub fn background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Add a layer that is active for the whole composition.
    pub fn layer(mut self, scene: impl Scene + 'static) -> Self {
        self.layers.push(Layer {
            range: None,
            scene: Box::new(scene),
        });
        self
    }

    /// Add a layer active for `len` frames starting at `from`.
    pub fn sequence(mut self, from: u64, len: u64, scene: impl Scene + 'static) -> Self {
        self.layers.push(Layer {
            range: Some(FrameRange::starting_at(from, len)),
            scene: Box::new(scene),
        });
        self
    }

    /// Finish and validate.
    pub fn build(self) -> ReelResult<Composition> {
        let comp = Composition {
            id: self.id,
            fps: self.fps,
            canvas: self.canvas,
            duration: self.duration,
            background: self.background,
            layers: self.layers,
        };
        comp.validate()?;
        Ok(comp)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
