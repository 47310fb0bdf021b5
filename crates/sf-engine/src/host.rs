//! Host-side surfaces the engine drives
//!
//! The engine decides offsets and timings; the host owns pixels, timers, and
//! speakers. Everything DOM- or platform-shaped lives behind these traits.

use sf_core::Reel;
use sf_stage::{Cue, CueAction};

use crate::curve::SettleCurve;

/// One reel strip's visual container.
///
/// Offsets grow toward deeper slots; an offset of `stop_index × icon height`
/// shows the slot at `stop_index` in the win position. The snap/glide pair is
/// a two-phase contract: `snap_to` must land without any transition, and the
/// host must flush layout so the jump is observable, before the `glide_to`
/// that follows it starts the timed move.
pub trait ReelSurface {
    /// The strip of icon slots this surface displays
    fn strip(&self) -> &Reel;

    /// Jump to a vertical offset instantly, no transition
    fn snap_to(&mut self, offset_px: f64);

    /// Start a timed glide to a new offset
    fn glide_to(&mut self, offset_px: f64, duration_secs: f64, curve: SettleCurve);
}

/// Live layout measurements
pub trait LayoutProbe {
    /// Current icon cell height in px. Queried fresh at every spin; layout
    /// can change between spins, so the engine never stores this.
    fn icon_height_px(&self) -> f64;
}

/// One-shot completion timers.
///
/// The host arranges for `SpinManager::reel_finished(reel_index)` to be
/// called once `delay_secs` have elapsed. There is no cancellation: a timer
/// source that never fires hangs the spin, and that risk is accepted.
pub trait Scheduler {
    fn schedule(&mut self, reel_index: u8, delay_secs: f64);
}

/// Playback transport for the widget's sound cues
pub trait AudioSink {
    /// Apply one transport action to a cue
    fn apply(&mut self, cue: Cue, action: CueAction);

    /// Fixed playback volume for all cues, set once at startup
    fn set_volume(&mut self, volume: f32);
}

/// The spin trigger control (a button, in the shipped widget)
pub trait SpinTrigger {
    fn set_enabled(&mut self, enabled: bool);
}

/// Result panel with title/description text and a celebration marker
pub trait ResultPanel {
    /// Overwrite the displayed title and description
    fn set_text(&mut self, title: &str, description: &str);

    /// Show the panel
    fn reveal(&mut self);

    /// Hide the panel
    fn hide(&mut self);

    /// Toggle the "happy/win" visual state
    fn set_celebrating(&mut self, on: bool);
}

/// Borrowed bundle of every host surface a spin touches
pub struct HostPorts<'a> {
    /// Reel surfaces in fixed display order
    pub reels: Vec<&'a mut dyn ReelSurface>,
    /// Layout measurement source
    pub layout: &'a dyn LayoutProbe,
    /// Completion timer source
    pub scheduler: &'a mut dyn Scheduler,
    /// Sound cue transport
    pub audio: &'a mut dyn AudioSink,
    /// Spin trigger control
    pub trigger: &'a mut dyn SpinTrigger,
    /// Result display
    pub panel: &'a mut dyn ResultPanel,
}
