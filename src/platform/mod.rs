//! Platform abstraction layer
//!
//! Frame pacing for native hosts: caps the loop at the target rate and
//! reports the elapsed time per frame in seconds.

use std::time::{Duration, Instant};

use crate::consts::{MAX_FRAME_DT, TARGET_FPS};

/// Frame-rate limiter and delta-time source
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    budget: Duration,
    max_dt: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(TARGET_FPS)
    }
}

impl FrameClock {
    /// Clock capped at `fps` frames per second (0 disables the cap)
    pub fn new(fps: u32) -> Self {
        let budget = if fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / fps as f64)
        };
        Self {
            last: Instant::now(),
            budget,
            max_dt: MAX_FRAME_DT,
        }
    }

    /// Wait out the rest of the frame budget, then return dt in seconds
    ///
    /// The result is clamped to `MAX_FRAME_DT` so a stalled host does not
    /// hand the simulation one enormous step.
    pub fn tick(&mut self) -> f32 {
        let elapsed = self.last.elapsed();
        if elapsed < self.budget {
            std::thread::sleep(self.budget - elapsed);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt.min(self.max_dt)
    }
}
