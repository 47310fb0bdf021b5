//! Settle easing curves
//!
//! Deceleration shapes for the settle glide. Hosts that animate through CSS
//! transitions can ask for the equivalent timing-function string instead of
//! sampling the curve themselves.

use serde::{Deserialize, Serialize};

/// Easing applied to a reel's settle glide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettleCurve {
    /// Constant-rate glide
    Linear,
    /// Fast launch, gentle landing
    EaseOutCubic,
    /// Hard launch, very soft landing; the production reel feel
    #[default]
    EaseOutQuart,
}

impl SettleCurve {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::EaseOutCubic => "EaseOutCubic",
            Self::EaseOutQuart => "EaseOutQuart",
        }
    }

    /// Evaluate the curve at position t (0.0 – 1.0)
    ///
    /// Returns progress in 0.0 – 1.0.
    #[inline]
    pub fn evaluate(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            // y = t
            Self::Linear => t,

            // y = 1 - (1 - t)^3
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),

            // y = 1 - (1 - t)^4
            Self::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
        }
    }

    /// CSS timing-function equivalent for DOM-transition hosts
    pub fn css_timing_function(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseOutCubic => "cubic-bezier(0.33, 1, 0.68, 1)",
            Self::EaseOutQuart => "cubic-bezier(0.25, 1, 0.5, 1)",
        }
    }
}
