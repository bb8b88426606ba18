//! ghreel turns GitHub activity data into spring-animated video reels.
//!
//! Every visible quantity is a closed-form damped spring evaluated at an integer frame, so any
//! frame can be produced independently and in any order. The public API is composition-oriented:
//!
//! - Build a [`Composition`] from the registry (seed props or JSON overrides)
//! - Evaluate single frames or ranges with the [`Evaluator`]
//! - Hand the resulting [`FrameGraph`] scene graphs to an external rasterizer
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Spring physics, easing and interpolation.
pub mod animation;
/// Compositions, layers and the built-in registry.
pub mod composition;
/// Activity data schemas, aggregation and seed props.
pub mod data;
/// Frame and range evaluation.
pub mod eval;
/// Core primitives and error types.
pub mod foundation;
/// Scene graph and per-scene frame builders.
pub mod scene;

pub use crate::animation::interpolate::{Extrapolate, InterpolateOptions, interpolate};
pub use crate::animation::spring::{Spring, SpringConfig, SpringRequest, spring};
pub use crate::composition::{Composition, CompositionProps, Layer};
pub use crate::eval::{EvalThreading, Evaluator};
pub use crate::foundation::color::Color;
pub use crate::foundation::core::{Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Vec2};
pub use crate::foundation::error::{ReelError, ReelResult};
pub use crate::scene::{FrameGraph, Scene, SceneCtx, SceneNode, Shape};
