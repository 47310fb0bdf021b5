//! Spin plan — everything decided up front for one spin
//!
//! The winning prize is chosen before anything moves; the plan then fixes one
//! transition descriptor per reel and can lay the whole cycle out as a stage
//! timeline for hosts, tooling, and tests.

use rand::Rng;
use serde::{Deserialize, Serialize};

use sf_core::{Prize, Reel};
use sf_stage::{Stage, StageEvent, sort_timeline};

use crate::curve::SettleCurve;
use crate::settle::{TransitionDescriptor, compute_settle};
use crate::timing::SettleTiming;

/// The fully decided outcome of one spin trigger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinPlan {
    /// Pre-selected winning prize
    pub prize: Prize,
    /// One descriptor per reel, in fixed reel order
    pub descriptors: Vec<TransitionDescriptor>,
}

impl SpinPlan {
    /// Build the plan: one settle per strip, stagger index = strip position.
    ///
    /// `icon_height_px` must be measured immediately before this call.
    pub fn build<'a, R, I>(
        strips: I,
        prize: Prize,
        icon_height_px: f64,
        timing: &SettleTiming,
        curve: SettleCurve,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Reel>,
    {
        let descriptors = strips
            .into_iter()
            .enumerate()
            .map(|(i, strip)| {
                compute_settle(
                    strip,
                    &prize.icon,
                    icon_height_px,
                    i as u8,
                    timing,
                    curve,
                    rng,
                )
            })
            .collect();

        Self { prize, descriptors }
    }

    /// Duration until the last reel lands
    pub fn total_duration_secs(&self) -> f64 {
        self.descriptors
            .iter()
            .map(|d| d.duration_secs)
            .fold(0.0, f64::max)
    }

    /// The spin cycle as an ordered stage timeline.
    ///
    /// All reels start gliding at zero; each stops at its own duration; the
    /// reveal and cycle end coincide with the final stop.
    pub fn stage_timeline(&self) -> Vec<StageEvent> {
        let mut events = vec![StageEvent::new(Stage::SpinStart, 0.0)];

        for d in &self.descriptors {
            events.push(StageEvent::new(
                Stage::ReelSettle {
                    reel_index: d.reel_index,
                },
                0.0,
            ));
            events.push(StageEvent::new(
                Stage::ReelStop {
                    reel_index: d.reel_index,
                    stop_index: d.stop_index,
                },
                d.duration_secs,
            ));
        }

        let end = self.total_duration_secs();
        events.push(StageEvent::new(
            Stage::WinPresent {
                prize_id: self.prize.id.clone(),
            },
            end,
        ));
        events.push(StageEvent::new(Stage::SpinEnd, end));

        sort_timeline(&mut events);
        events
    }
}
