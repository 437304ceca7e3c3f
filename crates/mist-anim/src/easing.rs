//! Easing functions for animation progress.
//!
//! The manager stores linear progress and maps it through one of these
//! curves when a consumer asks for the current value:
//! - Linear
//! - EaseInOut (slow start and end, fast middle)
//!
//! # Usage
//!
//! ```
//! use mist_anim::easing::EasingFunction;
//!
//! let ease = EasingFunction::EaseInOut;
//! assert_eq!(ease.evaluate(0.5), 0.5);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnimationError;

/// Easing function for animation progress.
///
/// Maps a linear progress value (0.0 to 1.0) to an eased output value in the
/// same range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    #[default]
    Linear,

    /// Slow start and end, fast middle. Symmetric about 0.5 with zero slope
    /// at both ends.
    EaseInOut,
}

impl EasingFunction {
    /// Evaluate the easing function at the given progress.
    ///
    /// Input outside `[0, 1]` is clamped first, so the output is always in
    /// `[0, 1]`.
    pub fn evaluate(&self, progress: f64) -> f64 {
        let t = progress.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseInOut => ease_in_out(t),
        }
    }

    /// Stable lowercase name, matching the serde and config spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseInOut => "ease_in_out",
        }
    }
}

impl FromStr for EasingFunction {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "linear" => Ok(Self::Linear),
            "ease_in_out" | "easeinout" => Ok(Self::EaseInOut),
            _ => Err(AnimationError::InvalidEasing(s.to_string())),
        }
    }
}

/// Cubic Hermite smoothstep: `3t^2 - 2t^3`.
///
/// Exact at 0, 0.5 and 1 in floating point.
#[inline]
fn ease_in_out(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}
