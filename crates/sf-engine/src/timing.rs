//! Stagger timing for the settle sequence
//!
//! Reels settle one after another rather than simultaneously; each reel's
//! glide simply lasts longer than the previous one by a fixed increment.

use serde::{Deserialize, Serialize};

use sf_core::SpinTuning;

/// Per-reel settle durations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SettleTiming {
    /// Seconds for the reel at stagger index 0
    pub base_secs: f64,
    /// Extra seconds per subsequent reel
    pub stagger_secs: f64,
}

impl SettleTiming {
    /// Create a timing profile
    pub fn new(base_secs: f64, stagger_secs: f64) -> Self {
        Self {
            base_secs,
            stagger_secs,
        }
    }

    /// Timing slice of a widget tuning
    pub fn from_tuning(tuning: &SpinTuning) -> Self {
        Self {
            base_secs: tuning.base_duration_secs,
            stagger_secs: tuning.stagger_secs,
        }
    }

    /// Glide duration for the reel at `stagger_index`: a strict linear
    /// increment, base + index × stagger
    pub fn duration_for(&self, stagger_index: u8) -> f64 {
        self.base_secs + f64::from(stagger_index) * self.stagger_secs
    }

    /// When the last of `reel_count` reels lands.
    ///
    /// Informational only: completion is joined per reel, never assumed
    /// from this value.
    pub fn total_secs(&self, reel_count: u8) -> f64 {
        match reel_count {
            0 => 0.0,
            n => self.duration_for(n - 1),
        }
    }
}

impl Default for SettleTiming {
    fn default() -> Self {
        Self::from_tuning(&SpinTuning::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_stagger_increment() {
        let timing = SettleTiming::new(2.0, 1.0);

        for i in 0u8..=10 {
            assert_relative_eq!(timing.duration_for(i), 2.0 + f64::from(i) * 1.0);
        }
    }

    #[test]
    fn test_zero_stagger_collapses_durations() {
        let timing = SettleTiming::new(1.5, 0.0);
        assert_relative_eq!(timing.duration_for(0), 1.5);
        assert_relative_eq!(timing.duration_for(7), 1.5);
    }

    #[test]
    fn test_total_is_last_reel() {
        let timing = SettleTiming::new(2.0, 1.0);
        assert_relative_eq!(timing.total_secs(3), 4.0);
        assert_relative_eq!(timing.total_secs(1), 2.0);
        assert_relative_eq!(timing.total_secs(0), 0.0);
    }

    #[test]
    fn test_from_tuning() {
        let timing = SettleTiming::from_tuning(&SpinTuning::default());
        assert_relative_eq!(timing.base_secs, 2.0);
        assert_relative_eq!(timing.stagger_secs, 1.0);
    }
}
