//! Closed-form damped harmonic oscillator used as an easing curve.
//!
//! A spring is released at frame 0 from a normalized displacement of 0 and settles at 1. The
//! normalized position `p(t)` is mapped into the caller's `[from, to]` range, so every animated
//! property (opacity, pixel offset, scale, arc length) is `from + p(t) * (to - from)`.
//!
//! Evaluation is pure: a [`Spring`] holds only immutable solved coefficients and can be shared
//! freely across threads and call sites.

use crate::foundation::core::Fps;
use crate::foundation::error::{ReelError, ReelResult};

/// Remaining displacement (normalized) below which a spring counts as settled.
pub const REST_THRESHOLD: f64 = 1e-4;

const CRITICAL_EPSILON: f64 = 1e-6;

/// Physical parameters of a spring.
///
/// Defaults are `mass = 1`, `stiffness = 100`, `damping = 10`, `initial_velocity = 0`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpringConfig {
    /// Oscillating mass, must be > 0.
    pub mass: f64,
    /// Spring constant, must be > 0.
    pub stiffness: f64,
    /// Damping coefficient, must be > 0.
    pub damping: f64,
    /// Initial velocity toward the target, in normalized units per second.
    pub initial_velocity: f64,
    /// Never let the normalized position pass the target.
    pub overshoot_clamping: bool,
}

impl SpringConfig {
    /// Default stiffness applied when a config only names mass and damping.
    pub const DEFAULT_STIFFNESS: f64 = 100.0;
    /// Default damping coefficient.
    pub const DEFAULT_DAMPING: f64 = 10.0;
    /// Default mass.
    pub const DEFAULT_MASS: f64 = 1.0;

    /// Config with the given mass and damping and default stiffness.
    pub const fn damped(mass: f64, damping: f64) -> Self {
        Self {
            mass,
            stiffness: Self::DEFAULT_STIFFNESS,
            damping,
            initial_velocity: 0.0,
            overshoot_clamping: false,
        }
    }

    /// Unit-mass config with the given damping.
    pub const fn with_damping(damping: f64) -> Self {
        Self::damped(Self::DEFAULT_MASS, damping)
    }

    /// Check the config can be solved.
    pub fn validate(&self) -> ReelResult<()> {
        fn positive(name: &str, v: f64) -> ReelResult<()> {
            if !v.is_finite() || v <= 0.0 {
                return Err(ReelError::animation(format!(
                    "spring {name} must be finite and > 0 (got {v})"
                )));
            }
            Ok(())
        }

        positive("mass", self.mass)?;
        positive("stiffness", self.stiffness)?;
        positive("damping", self.damping)?;
        if !self.initial_velocity.is_finite() {
            return Err(ReelError::animation("spring initial velocity must be finite"));
        }
        Ok(())
    }

    /// Undamped angular frequency `ω = sqrt(k / m)`.
    pub fn angular_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio `ζ = c / (2 sqrt(k m))`.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::with_damping(Self::DEFAULT_DAMPING)
    }
}

/// Oscillator classification by damping ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum DampingRegime {
    /// `ζ < 1`: decaying oscillation, overshoots the target.
    Underdamped,
    /// `ζ == 1`: fastest settle without oscillation.
    Critical,
    /// `ζ > 1`: slow settle without oscillation.
    Overdamped,
}

/// One spring evaluation: "value at `frame` when animating `from` to `to`".
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringRequest {
    /// Frame offset since release; may be negative.
    pub frame: i64,
    /// Frame rate used to convert frames to seconds.
    pub fps: Fps,
    /// Value before release.
    pub from: f64,
    /// Value at rest.
    pub to: f64,
    /// Spring parameters.
    #[serde(default)]
    pub config: SpringConfig,
}

/// Validate `req` and evaluate it.
pub fn spring(req: &SpringRequest) -> ReelResult<f64> {
    req.fps
        .validate()
        .map_err(|e| ReelError::animation(format!("spring fps: {e}")))?;
    let s = Spring::new(req.config)?;
    Ok(s.value(req.frame, req.fps, req.from, req.to))
}

/// Analytic peak overshoot (fraction of the travel) of a spring released at rest.
///
/// Zero for critically damped and overdamped springs.
pub fn overshoot_ratio(zeta: f64) -> f64 {
    if zeta >= 1.0 {
        return 0.0;
    }
    (-std::f64::consts::PI * zeta / (1.0 - zeta * zeta).sqrt()).exp()
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Response {
    // y(t) = e^(-decay t) (cos(wd t) + b sin(wd t))
    Under { decay: f64, wd: f64, b: f64 },
    // y(t) = e^(-w t) (1 + b t)
    Critical { w: f64, b: f64 },
    // y(t) = c1 e^(r1 t) + c2 e^(r2 t), r2 < r1 < 0
    Over { r1: f64, r2: f64, c1: f64, c2: f64 },
}

/// A validated spring with its closed-form solution precomputed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    response: Response,
    settle_secs: f64,
}

impl Spring {
    /// Validate `config` and solve the oscillator.
    pub fn new(config: SpringConfig) -> ReelResult<Self> {
        config.validate()?;

        let w = config.angular_frequency();
        let zeta = config.damping_ratio();
        let v0 = config.initial_velocity;

        // Remaining displacement y = 1 - p, with y(0) = 1 and y'(0) = -v0.
        let (response, amplitude, rate) = if (zeta - 1.0).abs() < CRITICAL_EPSILON {
            let b = w - v0;
            // (1 + |b| t) e^(-w t) <= m e^(-w t / 2), m = max over t of (1 + |b| t) e^(-w t / 2).
            let half = w / 2.0;
            let bb = b.abs();
            let m = if bb > half {
                let t_peak = 1.0 / half - 1.0 / bb;
                (1.0 + bb * t_peak) * (-half * t_peak).exp()
            } else {
                1.0
            };
            (Response::Critical { w, b }, m, half)
        } else if zeta < 1.0 {
            let decay = zeta * w;
            let wd = w * (1.0 - zeta * zeta).sqrt();
            let b = (decay - v0) / wd;
            (Response::Under { decay, wd, b }, (1.0 + b * b).sqrt(), decay)
        } else {
            let s = (zeta * zeta - 1.0).sqrt();
            // r1 r2 = w^2; avoids cancellation in w (zeta - s) for large zeta.
            let r1 = -w / (zeta + s);
            let r2 = -w * (zeta + s);
            let c1 = (-v0 - r2) / (r1 - r2);
            let c2 = 1.0 - c1;
            (
                Response::Over { r1, r2, c1, c2 },
                c1.abs() + c2.abs(),
                -r1,
            )
        };

        let settle_secs = (amplitude / REST_THRESHOLD).ln() / rate;
        if !settle_secs.is_finite() {
            return Err(ReelError::animation(format!(
                "spring never settles (mass {}, stiffness {}, damping {})",
                config.mass, config.stiffness, config.damping
            )));
        }

        Ok(Self {
            config,
            response,
            settle_secs: settle_secs.max(0.0),
        })
    }

    /// The config this spring was solved from.
    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Damping classification.
    pub fn regime(&self) -> DampingRegime {
        match self.response {
            Response::Under { .. } => DampingRegime::Underdamped,
            Response::Critical { .. } => DampingRegime::Critical,
            Response::Over { .. } => DampingRegime::Overdamped,
        }
    }

    /// Seconds after release from which the spring reports exactly its target.
    pub fn settle_secs(&self) -> f64 {
        self.settle_secs
    }

    /// First frame at which [`Spring::value`] returns exactly `to`.
    pub fn settle_frames(&self, fps: Fps) -> u64 {
        fps.secs_to_frames_ceil(self.settle_secs).max(1)
    }

    /// Normalized position at `secs` after release (0 before release, 1 once settled).
    pub fn progress_at_secs(&self, secs: f64) -> f64 {
        if secs <= 0.0 {
            return 0.0;
        }
        if secs >= self.settle_secs {
            return 1.0;
        }

        let remaining = match self.response {
            Response::Under { decay, wd, b } => {
                (-decay * secs).exp() * ((wd * secs).cos() + b * (wd * secs).sin())
            }
            Response::Critical { w, b } => (-w * secs).exp() * (1.0 + b * secs),
            Response::Over { r1, r2, c1, c2 } => c1 * (r1 * secs).exp() + c2 * (r2 * secs).exp(),
        };
        let p = 1.0 - remaining;
        if self.config.overshoot_clamping {
            p.min(1.0)
        } else {
            p
        }
    }

    /// Normalized position at `frame`.
    pub fn progress(&self, frame: i64, fps: Fps) -> f64 {
        if frame <= 0 {
            return 0.0;
        }
        self.progress_at_secs(fps.frames_to_secs(frame))
    }

    /// Value at `frame` when animating from `from` to `to`.
    pub fn value(&self, frame: i64, fps: Fps, from: f64, to: f64) -> f64 {
        if frame <= 0 || from == to {
            return from;
        }
        let secs = fps.frames_to_secs(frame);
        if secs >= self.settle_secs {
            return to;
        }
        from + self.progress_at_secs(secs) * (to - from)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
