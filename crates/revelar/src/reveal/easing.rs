//! Easing curves in the animation engine's vocabulary.
//!
//! Curve names follow the engine's power-N convention: `power1` is the
//! quadratic family, `power2` cubic, `power3` quartic. Each curve is
//! evaluable at normalized time for sampling and verification.

use crate::result::{RevelarError, RevelarResult};
use serde::{Deserialize, Serialize};

/// A named easing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Ease {
    /// Linear interpolation
    Linear,
    /// Quadratic ease-in (`power1.in`)
    Power1In,
    /// Quadratic ease-out (`power1.out`)
    Power1Out,
    /// Quadratic ease-in-out (`power1.inOut`)
    Power1InOut,
    /// Cubic ease-in (`power2.in`)
    Power2In,
    /// Cubic ease-out (`power2.out`)
    Power2Out,
    /// Cubic ease-in-out (`power2.inOut`)
    Power2InOut,
    /// Quartic ease-in (`power3.in`)
    Power3In,
    /// Quartic ease-out (`power3.out`) — the entrance-reveal default
    #[default]
    Power3Out,
    /// Quartic ease-in-out (`power3.inOut`)
    Power3InOut,
}

impl Ease {
    /// Evaluate the curve at normalized time t (0.0-1.0).
    ///
    /// Returns the interpolated progress (0.0-1.0). Out-of-range input
    /// is clamped.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power1In => ease_in(t, 2),
            Self::Power1Out => ease_out(t, 2),
            Self::Power1InOut => ease_in_out(t, 2),
            Self::Power2In => ease_in(t, 3),
            Self::Power2Out => ease_out(t, 3),
            Self::Power2InOut => ease_in_out(t, 3),
            Self::Power3In => ease_in(t, 4),
            Self::Power3Out => ease_out(t, 4),
            Self::Power3InOut => ease_in_out(t, 4),
        }
    }

    /// Wire name of the curve as the engine expects it (e.g. "power3.out")
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Power1In => "power1.in",
            Self::Power1Out => "power1.out",
            Self::Power1InOut => "power1.inOut",
            Self::Power2In => "power2.in",
            Self::Power2Out => "power2.out",
            Self::Power2InOut => "power2.inOut",
            Self::Power3In => "power3.in",
            Self::Power3Out => "power3.out",
            Self::Power3InOut => "power3.inOut",
        }
    }

    /// Parse a curve from its wire name.
    ///
    /// # Errors
    ///
    /// Returns [`RevelarError::UnknownEase`] for unrecognized names.
    pub fn from_name(name: &str) -> RevelarResult<Self> {
        match name {
            "linear" => Ok(Self::Linear),
            "power1.in" => Ok(Self::Power1In),
            "power1.out" => Ok(Self::Power1Out),
            "power1.inOut" => Ok(Self::Power1InOut),
            "power2.in" => Ok(Self::Power2In),
            "power2.out" => Ok(Self::Power2Out),
            "power2.inOut" => Ok(Self::Power2InOut),
            "power3.in" => Ok(Self::Power3In),
            "power3.out" => Ok(Self::Power3Out),
            "power3.inOut" => Ok(Self::Power3InOut),
            other => Err(RevelarError::UnknownEase {
                name: other.to_string(),
            }),
        }
    }

    /// Sample the curve at N equally spaced points.
    ///
    /// Useful for generating reference curves for verification.
    #[must_use]
    pub fn sample(&self, num_samples: usize) -> Vec<Keyframe> {
        if num_samples == 0 {
            return Vec::new();
        }
        if num_samples == 1 {
            return vec![Keyframe {
                t: 0.0,
                value: self.evaluate(0.0),
            }];
        }
        (0..num_samples)
            .map(|i| {
                let t = i as f64 / (num_samples - 1) as f64;
                Keyframe {
                    t,
                    value: self.evaluate(t),
                }
            })
            .collect()
    }
}

impl std::fmt::Display for Ease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A sampled point on an easing curve.
#[derive(Clone, Debug)]
pub struct Keyframe {
    /// Normalized time (0.0-1.0)
    pub t: f64,
    /// Curve value (0.0-1.0)
    pub value: f64,
}

fn ease_in(t: f64, power: i32) -> f64 {
    t.powi(power)
}

fn ease_out(t: f64, power: i32) -> f64 {
    1.0 - (1.0 - t).powi(power)
}

fn ease_in_out(t: f64, power: i32) -> f64 {
    if t < 0.5 {
        f64::from(2_i32.pow(power.unsigned_abs() - 1)) * t.powi(power)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(power) / 2.0
    }
}
