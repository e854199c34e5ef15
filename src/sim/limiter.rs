use std::time::{Duration, Instant};

/// Frame time left to sleep once `elapsed` of a `budget` has been used
pub fn remaining_budget(budget: Duration, elapsed: Duration) -> Duration {
    budget.saturating_sub(elapsed)
}

/// Average frame rate over windows of at least one second
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window_start: Instant,
    frames: u32,
    fps: f64,
}

impl FpsCounter {
    const WINDOW: Duration = Duration::from_secs(1);

    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            frames: 0,
            fps: 0.0,
        }
    }

    /// Count a finished frame. Returns the new average when a window closes.
    pub fn record(&mut self, now: Instant) -> Option<f64> {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < Self::WINDOW {
            return None;
        }
        self.fps = f64::from(self.frames) / elapsed.as_secs_f64();
        self.frames = 0;
        self.window_start = now;
        Some(self.fps)
    }

    /// Last measured average, 0 until the first window closes
    pub fn fps(&self) -> f64 {
        self.fps
    }
}

/// Keeps a loop at a fixed rate by sleeping out the rest of each frame.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    budget: Duration,
    frame_start: Instant,
    counter: FpsCounter,
}

impl FrameLimiter {
    pub fn new(target_fps: u32) -> Self {
        let now = Instant::now();
        Self {
            budget: Duration::from_secs(1) / target_fps.max(1),
            frame_start: now,
            counter: FpsCounter::new(now),
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn fps(&self) -> f64 {
        self.counter.fps()
    }

    /// Sleep until the current frame has used its budget, then start the
    /// next one. Returns how long it slept.
    pub fn end_frame(&mut self) -> Duration {
        let remaining = remaining_budget(self.budget, self.frame_start.elapsed());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        let now = Instant::now();
        self.counter.record(now);
        self.frame_start = now;
        remaining
    }
}
