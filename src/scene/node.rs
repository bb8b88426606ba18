use crate::foundation::color::Color;
use crate::foundation::core::{Affine, Canvas, FrameIndex, Point, Rect, Vec2};

/// Horizontal anchoring of a text run relative to its origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Origin is the left edge.
    #[default]
    Left,
    /// Origin is the horizontal center.
    Center,
    /// Origin is the right edge.
    Right,
}

/// Outline paint.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    /// Line width in pixels.
    pub width: f64,
    /// Line color.
    pub color: Color,
}

/// Drawable primitive in local (pre-transform) coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Filled rectangle with rounded corners.
    Rect {
        /// Bounds.
        rect: Rect,
        /// Corner radius.
        radius: f64,
        /// Fill paint.
        fill: Color,
        /// Optional outline.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke: Option<Stroke>,
    },
    /// Filled circle.
    Circle {
        /// Center.
        center: Point,
        /// Radius.
        radius: f64,
        /// Fill paint.
        fill: Color,
        /// Optional outline.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke: Option<Stroke>,
    },
    /// Stroked circular arc; angles in radians, clockwise from the +x axis.
    Arc {
        /// Center.
        center: Point,
        /// Radius of the stroke centerline.
        radius: f64,
        /// Start angle.
        start_angle: f64,
        /// Sweep angle.
        sweep_angle: f64,
        /// Stroke.
        stroke: Stroke,
    },
    /// Straight segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Stroke.
        stroke: Stroke,
    },
    /// Single-line text run; `origin` is on the baseline.
    Text {
        /// Content.
        text: String,
        /// Anchor point.
        origin: Point,
        /// Font size in pixels.
        size: f64,
        /// Fill paint.
        color: Color,
        /// Horizontal anchoring.
        align: TextAlign,
        /// Bold weight.
        bold: bool,
    },
    /// Externally loaded image (avatars) fitted into `rect`.
    Image {
        /// URL or path resolved by the host.
        source: String,
        /// Destination bounds.
        rect: Rect,
        /// Corner radius; half the side for a circular crop.
        radius: f64,
    },
}

/// One drawable item of a frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneNode {
    /// Stable identifier, unique within a frame.
    pub id: String,
    /// Geometry and paint.
    pub shape: Shape,
    /// Local-to-canvas transform.
    pub transform: Affine,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl SceneNode {
    /// Opaque, untransformed node.
    pub fn new(id: impl Into<String>, shape: Shape) -> Self {
        Self {
            id: id.into(),
            shape,
            transform: Affine::IDENTITY,
            opacity: 1.0,
        }
    }

    /// Rounded rectangle.
    pub fn rect(id: impl Into<String>, rect: Rect, radius: f64, fill: Color) -> Self {
        Self::new(
            id,
            Shape::Rect {
                rect,
                radius,
                fill,
                stroke: None,
            },
        )
    }

    /// Filled circle.
    pub fn circle(id: impl Into<String>, center: Point, radius: f64, fill: Color) -> Self {
        Self::new(
            id,
            Shape::Circle {
                center,
                radius,
                fill,
                stroke: None,
            },
        )
    }

    /// Stroked segment.
    pub fn line(id: impl Into<String>, from: Point, to: Point, width: f64, color: Color) -> Self {
        Self::new(
            id,
            Shape::Line {
                from,
                to,
                stroke: Stroke { width, color },
            },
        )
    }

    /// Regular-weight text run.
    pub fn text(
        id: impl Into<String>,
        text: impl Into<String>,
        origin: Point,
        size: f64,
        color: Color,
        align: TextAlign,
    ) -> Self {
        Self::new(
            id,
            Shape::Text {
                text: text.into(),
                origin,
                size,
                color,
                align,
                bold: false,
            },
        )
    }

    /// Switch a text node to bold; other shapes are unchanged.
    pub fn bold(mut self) -> Self {
        if let Shape::Text { bold, .. } = &mut self.shape {
            *bold = true;
        }
        self
    }

    /// Add an outline to a rect or circle; other shapes are unchanged.
    pub fn stroked(mut self, width: f64, color: Color) -> Self {
        match &mut self.shape {
            Shape::Rect { stroke, .. } | Shape::Circle { stroke, .. } => {
                *stroke = Some(Stroke { width, color });
            }
            _ => {}
        }
        self
    }

    /// Multiply the opacity; the result is clamped to `[0, 1]`.
    pub fn faded(mut self, opacity: f64) -> Self {
        self.opacity = (self.opacity * opacity).clamp(0.0, 1.0);
        self
    }

    /// Apply `t` after the current transform.
    pub fn transformed(mut self, t: Affine) -> Self {
        self.transform = t * self.transform;
        self
    }

    /// Translate by `(dx, dy)`.
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        self.transformed(Affine::translate(Vec2::new(dx, dy)))
    }

    /// Uniform scale about `pivot`.
    pub fn scaled_about(self, pivot: Point, s: f64) -> Self {
        self.transformed(scale_about(pivot, s))
    }
}

/// Uniform scale about `pivot`.
pub fn scale_about(pivot: Point, s: f64) -> Affine {
    let v = pivot.to_vec2();
    Affine::translate(v) * Affine::scale(s) * Affine::translate(-v)
}

/// Evaluated display list for one composition frame, in painter's order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameGraph {
    /// Absolute frame index.
    pub frame: FrameIndex,
    /// Output size.
    pub canvas: Canvas,
    /// Clear color.
    pub background: Color,
    /// Nodes, back to front.
    pub nodes: Vec<SceneNode>,
}

impl FrameGraph {
    /// Find a node by id.
    pub fn node(&self, id: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/node.rs"]
mod tests;
