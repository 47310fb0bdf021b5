//! Widget tuning configuration

use serde::{Deserialize, Serialize};

use crate::error::{SfError, SfResult};

/// Numeric tuning for one draw-widget instance
///
/// Fixed at build time; defaults mirror the shipped widget. Icon size is
/// deliberately absent here: it is a live layout value and must be probed
/// fresh at every spin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinTuning {
    /// Number of reel strips
    pub reel_count: u8,
    /// Icon slots per reel strip
    pub pool_len: usize,
    /// Seconds the first reel takes to settle
    pub base_duration_secs: f64,
    /// Extra seconds added per subsequent reel
    pub stagger_secs: f64,
    /// Fixed playback volume for both sound cues, applied once at startup
    pub audio_volume: f32,
}

impl Default for SpinTuning {
    fn default() -> Self {
        Self {
            reel_count: 3,
            pool_len: 100,
            base_duration_secs: 2.0,
            stagger_secs: 1.0,
            audio_volume: 0.3,
        }
    }
}

impl SpinTuning {
    /// Fail fast on build-time misconfiguration
    pub fn validate(&self) -> SfResult<()> {
        if self.reel_count == 0 {
            return Err(SfError::InvalidTuning("reel_count must be at least 1".into()));
        }
        if self.pool_len == 0 {
            return Err(SfError::InvalidPoolLength(self.pool_len));
        }
        if self.base_duration_secs <= 0.0 {
            return Err(SfError::InvalidTuning(format!(
                "base_duration_secs must be positive, got {}",
                self.base_duration_secs
            )));
        }
        if self.stagger_secs < 0.0 {
            return Err(SfError::InvalidTuning(format!(
                "stagger_secs must not be negative, got {}",
                self.stagger_secs
            )));
        }
        if !(0.0..=1.0).contains(&self.audio_volume) {
            return Err(SfError::InvalidTuning(format!(
                "audio_volume must be in [0, 1], got {}",
                self.audio_volume
            )));
        }
        Ok(())
    }

    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> SfResult<Self> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }
}
