//! Frame pacing for the render loop.

use std::time::{Duration, Instant};

/// Caps the loop at a fixed frame rate by sleeping off the rest of each frame.
pub struct FrameClock {
    frame: Duration,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            frame: frame_duration(frame_rate),
            last_tick: Instant::now(),
        }
    }

    pub fn frame(&self) -> Duration {
        self.frame
    }

    /// Time left in the current frame, measured at `now`.
    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.frame.saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// Sleep until the current frame is used up, then start the next one.
    pub fn tick(&mut self) {
        let remaining = self.remaining_at(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.last_tick = Instant::now();
    }
}

fn frame_duration(frame_rate: u32) -> Duration {
    Duration::from_secs(1) / frame_rate.max(1)
}
