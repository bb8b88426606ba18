/// Frame and range evaluation.
pub mod evaluator;

pub use evaluator::{EvalThreading, Evaluator};
