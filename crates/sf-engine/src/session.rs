//! Per-spin session state

use serde::{Deserialize, Serialize};

use crate::plan::SpinPlan;

/// Orchestrator phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpinPhase {
    /// Ready for a trigger
    #[default]
    Idle,
    /// A spin is in flight; further triggers are dropped
    Spinning,
}

/// Transient state for one spin, created at trigger time and destroyed when
/// the last reel reports in
#[derive(Debug, Clone)]
pub struct SpinSession {
    /// The decided plan this session is executing
    pub plan: SpinPlan,
    /// Per-reel completion flags, indexed by reel
    pending: Vec<bool>,
}

impl SpinSession {
    /// Open a session for a plan
    pub fn new(plan: SpinPlan) -> Self {
        let pending = vec![true; plan.descriptors.len()];
        Self { plan, pending }
    }

    /// Mark a reel's completion timer as fired.
    ///
    /// Returns false for unknown reels and for duplicates, which the caller
    /// ignores; the join must count each reel exactly once.
    pub fn mark_finished(&mut self, reel_index: u8) -> bool {
        match self.pending.get_mut(usize::from(reel_index)) {
            Some(pending) if *pending => {
                *pending = false;
                true
            }
            _ => false,
        }
    }

    /// Have all reels landed?
    pub fn all_finished(&self) -> bool {
        self.pending.iter().all(|p| !p)
    }

    /// Reels still gliding
    pub fn pending_count(&self) -> usize {
        self.pending.iter().filter(|p| **p).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::SettleCurve;
    use crate::settle::TransitionDescriptor;
    use sf_core::{IconRef, Prize};

    fn session(reels: u8) -> SpinSession {
        let descriptors = (0..reels)
            .map(|i| TransitionDescriptor {
                reel_index: i,
                stop_index: 10,
                start_offset_px: 0.0,
                target_offset_px: 1500.0,
                duration_secs: 2.0 + f64::from(i),
                curve: SettleCurve::default(),
            })
            .collect();
        SpinSession::new(SpinPlan {
            prize: Prize::new("p", "P", "prize", IconRef::new("i")),
            descriptors,
        })
    }

    #[test]
    fn test_join_counts_every_reel_once() {
        let mut s = session(3);
        assert_eq!(s.pending_count(), 3);

        // Completion order does not matter
        assert!(s.mark_finished(2));
        assert!(s.mark_finished(0));
        assert!(!s.all_finished());

        // Duplicates and unknown reels are ignored
        assert!(!s.mark_finished(2));
        assert!(!s.mark_finished(9));
        assert!(!s.all_finished());

        assert!(s.mark_finished(1));
        assert!(s.all_finished());
    }
}
