//! Entrance staggering for form field groups (presentation pack).
//!
//! Purely cosmetic: each field group fades and slides in, with group `i`
//! starting `i x 0.1s` after the view appears. Progress is a pure function
//! of elapsed time, so the host just asks for the current value each frame.

use std::time::{Duration, Instant};

/// Delay step between consecutive field groups.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// How long one group's fade/slide lasts once it starts.
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(500);

/// Returns the start delay for the field group at `index`.
pub fn stagger_delay(index: usize) -> Duration {
    STAGGER_STEP * index as u32
}

/// Tracks when a view's entrance animation began.
#[derive(Debug, Clone, Copy)]
pub struct Entrance {
    started: Instant,
}

impl Entrance {
    /// Starts the entrance clock.
    pub fn begin(now: Instant) -> Self {
        Self { started: now }
    }

    /// Animation progress for the group at `index`, clamped to `0.0..=1.0`.
    ///
    /// 0.0 means not yet started (still invisible), 1.0 means settled.
    pub fn progress(&self, index: usize, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        let delay = stagger_delay(index);
        let Some(into_animation) = elapsed.checked_sub(delay) else {
            return 0.0;
        };
        (into_animation.as_secs_f32() / ENTRANCE_DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// True once every one of `group_count` groups has settled.
    pub fn is_settled(&self, group_count: usize, now: Instant) -> bool {
        if group_count == 0 {
            return true;
        }
        self.progress(group_count - 1, now) >= 1.0
    }
}
