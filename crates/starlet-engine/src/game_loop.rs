//! Fixed-timestep game loop.
//!
//! Simulation runs at a fixed 60 Hz driven by an accumulator while frames
//! render at whatever rate the display allows. Each frame reports the
//! interpolation alpha between the last two simulation states.

use std::time::{Duration, Instant};
use tracing::warn;

/// Fixed simulation timestep: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Longest frame time fed into the accumulator. Longer frames (debugger
/// pauses, window drags) are clamped and the simulation slows down instead
/// of running dozens of catch-up steps.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// What one call to [`GameLoop::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    /// Simulation steps executed this frame.
    pub updates: u32,
    /// Interpolation alpha in `[0.0, 1.0)`.
    pub alpha: f64,
}

/// Fixed-timestep loop state.
pub struct GameLoop {
    previous_time: Instant,
    accumulator: f64,
    total_sim_time: f64,
    frame_count: u64,
    update_count: u64,
}

impl GameLoop {
    /// Creates a loop whose first frame is measured from now.
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            accumulator: 0.0,
            total_sim_time: 0.0,
            frame_count: 0,
            update_count: 0,
        }
    }

    /// Measures wall-clock time since the previous tick and advances by it.
    ///
    /// `update_fn(fixed_dt, total_sim_time)` is called zero or more times.
    pub fn tick(&mut self, update_fn: impl FnMut(f64, f64)) -> FrameTiming {
        let now = Instant::now();
        let frame_time = now.duration_since(self.previous_time).as_secs_f64();
        self.previous_time = now;
        self.advance(frame_time, update_fn)
    }

    /// Advances by an explicit frame time in seconds.
    pub fn advance(&mut self, frame_time: f64, mut update_fn: impl FnMut(f64, f64)) -> FrameTiming {
        let frame_time = if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            MAX_FRAME_TIME
        } else {
            frame_time.max(0.0)
        };

        self.accumulator += frame_time;

        let mut updates = 0;
        while self.accumulator >= FIXED_DT {
            update_fn(FIXED_DT, self.total_sim_time);
            self.total_sim_time += FIXED_DT;
            self.accumulator -= FIXED_DT;
            self.update_count += 1;
            updates += 1;
        }

        self.frame_count += 1;
        FrameTiming {
            updates,
            alpha: self.alpha(),
        }
    }

    /// Current interpolation alpha.
    pub fn alpha(&self) -> f64 {
        if self.accumulator > 0.0 {
            self.accumulator / FIXED_DT
        } else {
            0.0
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Total simulated seconds.
    pub fn total_sim_time(&self) -> f64 {
        self.total_sim_time
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts rendered frames and reports a rate once per second.
#[derive(Debug)]
pub struct FpsCounter {
    window_start: Instant,
    frames: u32,
}

impl FpsCounter {
    const WINDOW: Duration = Duration::from_secs(1);

    pub fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            frames: 0,
        }
    }

    /// Records one frame at `now`. Returns the average rate once a full
    /// second has elapsed since the window started, then starts a new window.
    pub fn record(&mut self, now: Instant) -> Option<f64> {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < Self::WINDOW {
            return None;
        }
        let fps = f64::from(self.frames) / elapsed.as_secs_f64();
        self.window_start = now;
        self.frames = 0;
        Some(fps)
    }
}
