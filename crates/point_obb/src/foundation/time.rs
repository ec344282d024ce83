//! Frame counting for the periodic stats line

use std::time::Instant;

/// Counts frames since the loop started
pub struct Timer {
    started: Instant,
    elapsed: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Start counting now
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            elapsed: 0.0,
            frame_count: 0,
        }
    }

    /// Mark the start of a frame
    pub fn update(&mut self) {
        self.elapsed = self.started.elapsed().as_secs_f32();
        self.frame_count += 1;
    }

    /// Seconds from creation to the last [`Timer::update`]
    pub fn total_time(&self) -> f32 {
        self.elapsed
    }

    /// Frames marked so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Frames per second averaged over the whole run
    #[allow(clippy::cast_precision_loss)]
    pub fn average_fps(&self) -> f32 {
        if self.elapsed > 0.0 {
            self.frame_count as f32 / self.elapsed
        } else {
            0.0
        }
    }
}
