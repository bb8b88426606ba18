use crate::animation::ease::Ease;
use crate::foundation::error::{ReelError, ReelResult};

/// Behavior outside the first/last breakpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Continue the outermost segment.
    #[default]
    Extend,
    /// Hold the outermost output value.
    Clamp,
    /// Return the input unchanged.
    Identity,
}

/// Options for [`interpolate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InterpolateOptions {
    /// Easing applied to the ratio inside each segment.
    pub easing: Ease,
    /// Behavior below the first breakpoint.
    pub extrapolate_left: Extrapolate,
    /// Behavior above the last breakpoint.
    pub extrapolate_right: Extrapolate,
}

impl InterpolateOptions {
    /// Clamp on both sides.
    pub fn clamped() -> Self {
        Self {
            extrapolate_left: Extrapolate::Clamp,
            extrapolate_right: Extrapolate::Clamp,
            ..Self::default()
        }
    }
}

/// Map `input` through the piecewise curve `input_range -> output_range`.
///
/// `input_range` must be strictly increasing and both ranges must have the same length (at
/// least 2) and contain only finite values.
pub fn interpolate(
    input: f64,
    input_range: &[f64],
    output_range: &[f64],
    options: InterpolateOptions,
) -> ReelResult<f64> {
    validate_ranges(input_range, output_range)?;

    // Segment whose start is the last breakpoint <= input (first/last segment outside).
    let mut seg = 1;
    while seg < input_range.len() - 1 && input_range[seg] < input {
        seg += 1;
    }
    let seg = seg - 1;

    Ok(interpolate_segment(
        input,
        (input_range[seg], input_range[seg + 1]),
        (output_range[seg], output_range[seg + 1]),
        options,
    ))
}

fn validate_ranges(input_range: &[f64], output_range: &[f64]) -> ReelResult<()> {
    if input_range.len() != output_range.len() {
        return Err(ReelError::animation(format!(
            "input range ({}) and output range ({}) must have the same length",
            input_range.len(),
            output_range.len()
        )));
    }
    if input_range.len() < 2 {
        return Err(ReelError::animation(
            "interpolation ranges need at least 2 breakpoints",
        ));
    }
    if input_range
        .iter()
        .chain(output_range.iter())
        .any(|v| !v.is_finite())
    {
        return Err(ReelError::animation(
            "interpolation ranges must contain only finite values",
        ));
    }
    if !input_range.windows(2).all(|w| w[0] < w[1]) {
        return Err(ReelError::animation(
            "input range must be strictly increasing",
        ));
    }
    Ok(())
}

fn interpolate_segment(
    input: f64,
    (in_min, in_max): (f64, f64),
    (out_min, out_max): (f64, f64),
    options: InterpolateOptions,
) -> f64 {
    let mut x = input;

    if x < in_min {
        match options.extrapolate_left {
            Extrapolate::Identity => return x,
            Extrapolate::Clamp => x = in_min,
            Extrapolate::Extend => {}
        }
    }
    if x > in_max {
        match options.extrapolate_right {
            Extrapolate::Identity => return x,
            Extrapolate::Clamp => x = in_max,
            Extrapolate::Extend => {}
        }
    }

    if out_min == out_max {
        return out_min;
    }

    let ratio = options.easing.apply_unclamped((x - in_min) / (in_max - in_min));
    out_min + ratio * (out_max - out_min)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
