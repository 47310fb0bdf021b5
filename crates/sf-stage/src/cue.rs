//! Audio cue taxonomy and stage → cue routing
//!
//! The widget owns exactly two sound cues: a looping reel-spin bed and a win
//! sting. Which transport operations a stage implies is fixed here so every
//! host plays the same thing.

use serde::{Deserialize, Serialize};

use crate::stage::Stage;

/// A sound cue the widget controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    /// Looping spin bed, audible while reels move
    ReelLoop,
    /// One-shot win sting on reveal
    WinSting,
}

impl Cue {
    /// Stable identifier for host asset tables
    pub fn name(&self) -> &'static str {
        match self {
            Self::ReelLoop => "reel_loop",
            Self::WinSting => "win_sting",
        }
    }
}

/// Transport operation applied to a cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CueAction {
    /// Start or resume playback
    Play,
    /// Pause playback, keeping position
    Stop,
    /// Reset playback position to zero
    Rewind,
}

/// Cue transport operations implied by a stage, in application order.
///
/// SpinStart silences any still-ringing win sting and restarts the loop from
/// time zero; WinPresent swaps the loop for the sting. Per-reel stages carry
/// no cue work in the shipped widget.
pub fn cue_actions(stage: &Stage) -> &'static [(Cue, CueAction)] {
    match stage {
        Stage::SpinStart => &[
            (Cue::WinSting, CueAction::Stop),
            (Cue::WinSting, CueAction::Rewind),
            (Cue::ReelLoop, CueAction::Rewind),
            (Cue::ReelLoop, CueAction::Play),
        ],
        Stage::WinPresent { .. } => &[
            (Cue::ReelLoop, CueAction::Stop),
            (Cue::WinSting, CueAction::Play),
        ],
        _ => &[],
    }
}
