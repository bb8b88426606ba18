//! Timeline model, builder and the built-in composition registry.

/// Fluent composition builder.
pub mod dsl;
/// Composition and layer types.
pub mod model;
/// Built-in compositions keyed by id.
pub mod registry;

pub use dsl::CompositionBuilder;
pub use model::{Composition, Layer};
pub use registry::{COMPOSITIONS, CompositionEntry, CompositionProps, build, build_with, lookup};
