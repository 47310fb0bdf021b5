//! Per-reel settle computation
//!
//! Given the winning icon, decides where one strip comes to rest and
//! describes the animation that takes it there. Applying the description
//! (snap, flush, glide, completion timer) is the host's job.

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use sf_core::{IconRef, Reel};

use crate::curve::SettleCurve;
use crate::timing::SettleTiming;

/// Full description of one reel's settle animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionDescriptor {
    /// Which reel this drives
    pub reel_index: u8,
    /// Slot the reel comes to rest on
    pub stop_index: usize,
    /// Instantaneous jitter offset applied before the glide (px)
    pub start_offset_px: f64,
    /// Final resting offset (px); always stop_index × icon height
    pub target_offset_px: f64,
    /// Glide duration in seconds
    pub duration_secs: f64,
    /// Easing curve for the glide
    pub curve: SettleCurve,
}

/// Compute the settle for one reel strip.
///
/// The strip is scanned from its far end for the winning icon so the reel
/// travels deep before resting. A strip that somehow lacks the icon gets a
/// random stop instead: the spin still completes, possibly showing a
/// non-matching icon, and that degradation is deliberate.
///
/// The icon height must be a fresh layout measurement for this spin, never a
/// value cached from an earlier one.
pub fn compute_settle<R: Rng + ?Sized>(
    reel: &Reel,
    winning_icon: &IconRef,
    icon_height_px: f64,
    stagger_index: u8,
    timing: &SettleTiming,
    curve: SettleCurve,
    rng: &mut R,
) -> TransitionDescriptor {
    let stop_index = match reel.deepest_match(winning_icon) {
        Some(index) => index,
        None => {
            // TODO: the fallback range excludes the final slot; confirm that
            // exclusion is intended before widening it to the full strip.
            let upper = (reel.len() - 1).max(1);
            let fallback = rng.random_range(0..upper);
            warn!(
                "reel {stagger_index}: icon {winning_icon} missing from strip, \
                 falling back to stop {fallback}"
            );
            fallback
        }
    };

    let target_offset_px = stop_index as f64 * icon_height_px;

    // Uniform in [-h/2, +h/2): each reel starts from its own sub-cell phase
    let start_offset_px = (rng.random::<f64>() - 0.5) * icon_height_px;

    let duration_secs = timing.duration_for(stagger_index);

    debug!(
        "reel {stagger_index}: stop {stop_index} at {target_offset_px}px, \
         glide {duration_secs}s"
    );

    TransitionDescriptor {
        reel_index: stagger_index,
        stop_index,
        start_offset_px,
        target_offset_px,
        duration_secs,
        curve,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn strip(icons: &[&str]) -> Reel {
        Reel::from_slots(icons.iter().copied().map(IconRef::from).collect()).unwrap()
    }

    #[test]
    fn test_settles_on_deepest_matching_slot() {
        let reel = strip(&["a", "b", "a", "c", "b"]);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let timing = SettleTiming::new(2.0, 1.0);

        let d = compute_settle(
            &reel,
            &IconRef::new("a"),
            150.0,
            0,
            &timing,
            SettleCurve::default(),
            &mut rng,
        );

        assert_eq!(d.stop_index, 2);
        assert_eq!(reel.icon_at(d.stop_index), Some(&IconRef::new("a")));
        assert_relative_eq!(d.target_offset_px, 2.0 * 150.0);
    }

    #[test]
    fn test_missing_icon_falls_back_in_range() {
        let reel = strip(&["a", "b", "a", "c", "b"]);
        let timing = SettleTiming::new(2.0, 1.0);

        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let d = compute_settle(
                &reel,
                &IconRef::new("zzz"),
                150.0,
                0,
                &timing,
                SettleCurve::default(),
                &mut rng,
            );
            // Fallback never lands on the final slot
            assert!(d.stop_index < reel.len() - 1);
        }
    }

    #[test]
    fn test_single_slot_strip_never_panics() {
        let reel = strip(&["a"]);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let timing = SettleTiming::new(2.0, 1.0);

        let d = compute_settle(
            &reel,
            &IconRef::new("other"),
            150.0,
            0,
            &timing,
            SettleCurve::default(),
            &mut rng,
        );
        assert_eq!(d.stop_index, 0);
    }

    #[test]
    fn test_jitter_within_half_cell() {
        let reel = strip(&["a", "b", "c"]);
        let timing = SettleTiming::new(2.0, 1.0);
        let height = 150.0;

        for seed in 0..100 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let d = compute_settle(
                &reel,
                &IconRef::new("b"),
                height,
                0,
                &timing,
                SettleCurve::default(),
                &mut rng,
            );
            assert!(d.start_offset_px >= -height / 2.0);
            assert!(d.start_offset_px < height / 2.0);
        }
    }

    #[test]
    fn test_duration_follows_stagger_index() {
        let reel = strip(&["a", "b", "c"]);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let timing = SettleTiming::new(2.0, 1.0);

        for i in 0u8..4 {
            let d = compute_settle(
                &reel,
                &IconRef::new("a"),
                150.0,
                i,
                &timing,
                SettleCurve::default(),
                &mut rng,
            );
            assert_relative_eq!(d.duration_secs, 2.0 + f64::from(i));
            assert_eq!(d.reel_index, i);
        }
    }

    #[test]
    fn test_offset_round_trips_to_stop_index() {
        let reel = strip(&["a", "b", "a", "b", "a", "b", "a"]);
        let timing = SettleTiming::new(2.0, 1.0);

        // Integer heights must divide back to the exact stop index
        for height in [1u32, 2, 15, 150, 512, 999] {
            let mut rng = ChaCha8Rng::seed_from_u64(u64::from(height));
            let d = compute_settle(
                &reel,
                &IconRef::new("b"),
                f64::from(height),
                0,
                &timing,
                SettleCurve::default(),
                &mut rng,
            );
            let recovered = d.target_offset_px / f64::from(height);
            assert_eq!(recovered as usize, d.stop_index);
            assert_relative_eq!(recovered.fract(), 0.0);
        }
    }
}
