//! Timestamped stage events

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::stage::Stage;

/// A stage with its place on the spin timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageEvent {
    /// The canonical stage
    pub stage: Stage,

    /// Seconds from the start of the spin
    pub timestamp_secs: f64,
}

impl StageEvent {
    /// Create a stage event
    pub fn new(stage: Stage, timestamp_secs: f64) -> Self {
        Self {
            stage,
            timestamp_secs,
        }
    }
}

/// Sort events into timeline order.
///
/// Stable, so equal timestamps keep their emission order (ReelStop before
/// WinPresent when the last reel lands at the reveal instant).
pub fn sort_timeline(events: &mut [StageEvent]) {
    events.sort_by(|a, b| {
        a.timestamp_secs
            .partial_cmp(&b.timestamp_secs)
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut events = vec![
            StageEvent::new(Stage::SpinEnd, 4.0),
            StageEvent::new(Stage::SpinStart, 0.0),
            StageEvent::new(
                Stage::ReelStop {
                    reel_index: 2,
                    stop_index: 10,
                },
                4.0,
            ),
        ];
        sort_timeline(&mut events);

        assert_eq!(events[0].stage, Stage::SpinStart);
        // SpinEnd was emitted before the tied ReelStop and stays ahead of it
        assert_eq!(events[1].stage, Stage::SpinEnd);
    }
}
