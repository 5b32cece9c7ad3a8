//! Frame clocks feeding `on_frame`.

use std::time::Duration;

use web_time::Instant;

/// ~60 FPS.
pub const FRAME_INTERVAL: Duration = Duration::from_nanos(16_666_667);

/// Source of frame timestamps, in nanoseconds.
pub trait FrameClock {
    /// Wait for (or simulate) the next frame and return its time.
    fn next_frame(&mut self) -> u64;
}

/// Wall-clock frames, sleeping between them.
pub struct RealtimeClock {
    start: Instant,
}

impl RealtimeClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for RealtimeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for RealtimeClock {
    fn next_frame(&mut self) -> u64 {
        std::thread::sleep(FRAME_INTERVAL);
        u64::try_from(self.start.elapsed().as_nanos()).unwrap_or(u64::MAX)
    }
}

/// Simulated frames at a fixed step; used by tests.
pub struct FixedStepClock {
    now: u64,
    step: u64,
}

impl FixedStepClock {
    pub fn new(step: Duration) -> Self {
        Self {
            now: 0,
            step: u64::try_from(step.as_nanos()).unwrap_or(u64::MAX),
        }
    }
}

impl Default for FixedStepClock {
    fn default() -> Self {
        Self::new(FRAME_INTERVAL)
    }
}

impl FrameClock for FixedStepClock {
    fn next_frame(&mut self) -> u64 {
        let now = self.now;
        self.now = self.now.saturating_add(self.step);
        now
    }
}
