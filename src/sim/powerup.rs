//! Timed speed boost
//!
//! Driven by the logical clock in `GameState::time_ms`, never by wall time.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUpTimer {
    pub active: bool,
    /// Clock value (ms) at which the boost ends
    pub end_time: u64,
    /// Length of the current boost, for the remaining-fraction bar
    pub duration: u64,
}

impl PowerUpTimer {
    /// Start (or restart) the boost at `now`
    pub fn activate(&mut self, now: u64, duration: u64) {
        self.active = true;
        self.end_time = now.saturating_add(duration);
        self.duration = duration;
    }

    /// Deactivate if the boost has run out; returns true when it just expired
    pub fn expire_if_due(&mut self, now: u64) -> bool {
        if self.active && now >= self.end_time {
            self.active = false;
            return true;
        }
        false
    }

    /// Remaining share of the boost in [0.0, 1.0]
    pub fn remaining_fraction(&self, now: u64) -> f32 {
        if !self.active || self.duration == 0 {
            return 0.0;
        }
        let left = self.end_time.saturating_sub(now);
        (left as f64 / self.duration as f64).clamp(0.0, 1.0) as f32
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
