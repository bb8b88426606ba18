/// Straight-alpha color type.
pub mod color;
/// Frame, rate and canvas primitives.
pub mod core;
/// Error taxonomy.
pub mod error;
