//! Spin orchestration
//!
//! Owns the Idle ↔ Spinning state machine for one widget: guards against
//! re-entrant triggers, drives reel surfaces through their settle
//! animations, joins per-reel completions, and hands the winner to the
//! result presenter.
//!
//! Everything runs on the host's single event loop. "Concurrent" reels are
//! independent host timers; the only shared mutable state is the session
//! owned here, so the re-entrancy guard is the whole synchronization story.

use log::{debug, info, trace, warn};
use rand::Rng;

use sf_core::{PrizeCatalog, SfResult, SpinTuning};
use sf_stage::{Stage, cue_actions};

use crate::curve::SettleCurve;
use crate::host::HostPorts;
use crate::plan::SpinPlan;
use crate::presenter::ResultPresenter;
use crate::session::{SpinPhase, SpinSession};
use crate::timing::SettleTiming;

/// Orchestrates full spin cycles over host-supplied surfaces
#[derive(Debug)]
pub struct SpinManager {
    catalog: PrizeCatalog,
    tuning: SpinTuning,
    curve: SettleCurve,
    presenter: ResultPresenter,
    phase: SpinPhase,
    session: Option<SpinSession>,
}

impl SpinManager {
    /// Create a manager, failing fast on invalid tuning
    pub fn new(catalog: PrizeCatalog, tuning: SpinTuning) -> SfResult<Self> {
        tuning.validate()?;
        Ok(Self {
            catalog,
            tuning,
            curve: SettleCurve::default(),
            presenter: ResultPresenter::default(),
            phase: SpinPhase::Idle,
            session: None,
        })
    }

    /// Override the settle curve
    pub fn with_curve(mut self, curve: SettleCurve) -> Self {
        self.curve = curve;
        self
    }

    /// Override the result presenter
    pub fn with_presenter(mut self, presenter: ResultPresenter) -> Self {
        self.presenter = presenter;
        self
    }

    /// Startup-only host setup: fixed cue volume
    pub fn init_host(&self, host: &mut HostPorts<'_>) {
        host.audio.set_volume(self.tuning.audio_volume);
    }

    /// Current phase
    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    /// Is a spin in flight?
    pub fn is_spinning(&self) -> bool {
        self.phase == SpinPhase::Spinning
    }

    /// The active session, if a spin is in flight
    pub fn session(&self) -> Option<&SpinSession> {
        self.session.as_ref()
    }

    /// The prize catalog this manager draws from
    pub fn catalog(&self) -> &PrizeCatalog {
        &self.catalog
    }

    /// Run one spin cycle.
    ///
    /// A trigger while already spinning is dropped: not queued, not an
    /// error. Returns the plan now executing, or None for a dropped trigger.
    pub fn spin<R: Rng + ?Sized>(
        &mut self,
        host: &mut HostPorts<'_>,
        rng: &mut R,
    ) -> Option<&SpinPlan> {
        if self.phase == SpinPhase::Spinning {
            debug!("spin trigger dropped: a spin is already in flight");
            return None;
        }
        self.phase = SpinPhase::Spinning;

        host.trigger.set_enabled(false);
        host.panel.hide();
        host.panel.set_celebrating(false);
        self.route_stage_audio(&Stage::SpinStart, host);

        if host.reels.len() != usize::from(self.tuning.reel_count) {
            warn!(
                "host presents {} reel surfaces, tuning expects {}",
                host.reels.len(),
                self.tuning.reel_count
            );
        }

        // Fresh layout measurement for this spin; never reused from the last
        let icon_height_px = host.layout.icon_height_px();

        let prize = self.catalog.choose(rng).clone();
        info!("spin started: prize {} ({})", prize.id, prize.name);

        let timing = SettleTiming::from_tuning(&self.tuning);
        let plan = SpinPlan::build(
            host.reels.iter().map(|surface| surface.strip()),
            prize,
            icon_height_px,
            &timing,
            self.curve,
            rng,
        );

        for (surface, descriptor) in host.reels.iter_mut().zip(&plan.descriptors) {
            // Jitter snap first; the host flushes layout before the glide
            surface.snap_to(descriptor.start_offset_px);
            surface.glide_to(
                descriptor.target_offset_px,
                descriptor.duration_secs,
                descriptor.curve,
            );
            host.scheduler
                .schedule(descriptor.reel_index, descriptor.duration_secs);
        }

        self.session = Some(SpinSession::new(plan));
        self.session.as_ref().map(|s| &s.plan)
    }

    /// Host callback: the completion timer for one reel fired.
    ///
    /// Joins over all reels: every reel must report, in any order, before
    /// the result is revealed. Duplicate or stray callbacks are ignored.
    pub fn reel_finished(&mut self, reel_index: u8, host: &mut HostPorts<'_>) {
        match self.session.as_mut() {
            None => {
                debug!("completion for reel {reel_index} ignored: no active spin");
                return;
            }
            Some(session) => {
                if !session.mark_finished(reel_index) {
                    debug!("duplicate completion for reel {reel_index} ignored");
                    return;
                }
                trace!(
                    "reel {reel_index} landed, {} still gliding",
                    session.pending_count()
                );
                if !session.all_finished() {
                    return;
                }
            }
        }

        let session = self.session.take().expect("session present at join");
        let prize = session.plan.prize;

        self.route_stage_audio(
            &Stage::WinPresent {
                prize_id: prize.id.clone(),
            },
            host,
        );
        self.presenter.present(host.panel, &prize);
        host.trigger.set_enabled(true);
        self.phase = SpinPhase::Idle;

        info!("spin complete: {}", prize.name);
    }

    fn route_stage_audio(&self, stage: &Stage, host: &mut HostPorts<'_>) {
        for (cue, action) in cue_actions(stage) {
            host.audio.apply(*cue, *action);
        }
    }
}
