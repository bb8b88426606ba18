/// Easing curves for segment ratios.
pub mod ease;
/// Piecewise range mapping with extrapolation modes.
pub mod interpolate;
/// Frame-offset helpers shared by scenes.
pub mod ops;
/// Closed-form damped spring evaluation.
pub mod spring;
