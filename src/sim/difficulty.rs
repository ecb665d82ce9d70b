//! Difficulty ramp and spawn cadence
//!
//! Both parameters interpolate linearly over session progress: items fall
//! faster and arrive more often as the clock runs down.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Elapsed fraction of the session in [0, 1]
pub fn progress(time_remaining_ms: f32, session_ms: f32) -> f32 {
    if session_ms <= 0.0 {
        return 1.0;
    }
    crate::clamp(1.0 - time_remaining_ms / session_ms, 0.0, 1.0)
}

/// Difficulty parameters at a given progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// px/s
    pub fall_speed: f32,
    /// ms between spawns
    pub spawn_interval_ms: f32,
}

impl Difficulty {
    pub fn at(tuning: &Tuning, progress: f32) -> Self {
        Self {
            fall_speed: tuning.base_fall_speed + progress * tuning.fall_speed_range,
            spawn_interval_ms: tuning.base_spawn_interval_ms
                - progress * tuning.spawn_interval_range_ms,
        }
    }
}

/// Time accumulated since the last spawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnScheduler {
    pub since_last_ms: f32,
}

impl SpawnScheduler {
    /// Advance by `dt_ms`; returns true when a spawn is due.
    ///
    /// The accumulator restarts at zero on a spawn; overshoot past the
    /// interval is dropped.
    pub fn advance(&mut self, dt_ms: f32, interval_ms: f32) -> bool {
        self.since_last_ms += dt_ms;
        if self.since_last_ms >= interval_ms {
            self.since_last_ms = 0.0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.since_last_ms = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bounds() {
        assert_eq!(progress(60_000.0, 60_000.0), 0.0);
        assert_eq!(progress(30_000.0, 60_000.0), 0.5);
        assert_eq!(progress(0.0, 60_000.0), 1.0);
        assert_eq!(progress(-50.0, 60_000.0), 1.0);
        assert_eq!(progress(100.0, 0.0), 1.0);
    }

    #[test]
    fn test_ramp_endpoints() {
        let t = Tuning::default();
        let start = Difficulty::at(&t, 0.0);
        let mid = Difficulty::at(&t, 0.5);
        let end = Difficulty::at(&t, 1.0);
        assert_eq!(start.fall_speed, 60.0);
        assert_eq!(mid.fall_speed, 120.0);
        assert_eq!(end.fall_speed, 180.0);
        assert_eq!(start.spawn_interval_ms, 1600.0);
        assert_eq!(mid.spawn_interval_ms, 1200.0);
        assert_eq!(end.spawn_interval_ms, 800.0);
    }

    #[test]
    fn test_scheduler_resets_to_zero_and_drops_overshoot() {
        let mut s = SpawnScheduler::default();
        assert!(!s.advance(1000.0, 1600.0));
        assert!(!s.advance(590.0, 1600.0));
        assert!(s.advance(30.0, 1600.0));
        // 20 ms of overshoot discarded
        assert_eq!(s.since_last_ms, 0.0);
        assert!(!s.advance(1599.0, 1600.0));
        assert!(s.advance(1.0, 1600.0));
    }
}
