//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Time/ticks (frame timestamps to step durations)

/// Turns monotonically increasing frame timestamps (ms) into step durations
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous frame. The first frame after a reset
    /// yields 0; a timestamp going backwards yields 0.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => (now_ms - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt
    }

    /// Forget the previous frame (new session)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
