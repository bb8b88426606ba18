use crate::animation::interpolate::{InterpolateOptions, interpolate};
use crate::foundation::error::{ReelError, ReelResult};

/// Shift `frame` back by `index * delay` so item `index` of a list starts `delay` frames after
/// its predecessor.
pub fn stagger(frame: i64, index: usize, delay: i64) -> i64 {
    frame.saturating_sub((index as i64).saturating_mul(delay))
}

/// Looping triangle wave: `peak` at the start of each period, `trough` halfway through.
pub fn pulse(frame: i64, period: i64, peak: f64, trough: f64) -> ReelResult<f64> {
    if period < 2 {
        return Err(ReelError::animation(format!(
            "pulse period must be >= 2 frames, got {period}"
        )));
    }
    let phase = frame.rem_euclid(period) as f64;
    let period = period as f64;
    interpolate(
        phase,
        &[0.0, period / 2.0, period],
        &[peak, trough, peak],
        InterpolateOptions::clamped(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ops.rs"]
mod tests;
