//! Canonical stages of one spin cycle
//!
//! The engine never tells hosts which pixels to paint or which file to play.
//! Hosts react to STAGES; everything observable maps onto one of these.

use serde::{Deserialize, Serialize};

/// Canonical spin stage
///
/// One spin cycle always passes through:
/// SpinStart → ReelSettle (per reel) → ReelStop (per reel) → WinPresent → SpinEnd
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Stage {
    /// Trigger accepted, reels about to move
    SpinStart,

    /// A reel began its timed settle glide
    ReelSettle { reel_index: u8 },

    /// A reel came to rest on its stop slot
    ReelStop { reel_index: u8, stop_index: usize },

    /// Winning prize revealed on the result panel
    WinPresent { prize_id: String },

    /// Spin cycle fully complete, trigger re-armed
    SpinEnd,
}

impl Stage {
    /// Stable snake_case identifier for logs and host routing tables
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::SpinStart => "spin_start",
            Self::ReelSettle { .. } => "reel_settle",
            Self::ReelStop { .. } => "reel_stop",
            Self::WinPresent { .. } => "win_present",
            Self::SpinEnd => "spin_end",
        }
    }

    /// Reel index for per-reel stages
    pub fn reel_index(&self) -> Option<u8> {
        match self {
            Self::ReelSettle { reel_index } | Self::ReelStop { reel_index, .. } => {
                Some(*reel_index)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Stage::SpinStart.type_name(), "spin_start");
        assert_eq!(
            Stage::ReelStop {
                reel_index: 2,
                stop_index: 97
            }
            .type_name(),
            "reel_stop"
        );
        assert_eq!(
            Stage::WinPresent {
                prize_id: "p1".into()
            }
            .type_name(),
            "win_present"
        );
    }

    #[test]
    fn test_reel_index() {
        assert_eq!(Stage::ReelSettle { reel_index: 1 }.reel_index(), Some(1));
        assert_eq!(Stage::SpinEnd.reel_index(), None);
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_string(&Stage::ReelSettle { reel_index: 0 }).unwrap();
        assert!(json.contains(r#""type":"reel_settle""#));

        let back: Stage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Stage::ReelSettle { reel_index: 0 });
    }
}
