//! Native frame pacing with `std::thread::sleep`

use std::thread;
use std::time::{Duration, Instant};

use super::Clock;

#[derive(Debug)]
pub struct SleepClock {
    frame_start: Instant,
}

impl Default for SleepClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SleepClock {
    pub fn new() -> Self {
        Self {
            frame_start: Instant::now(),
        }
    }
}

impl Clock for SleepClock {
    fn tick(&mut self, fps: u32) {
        let frame = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        let elapsed = self.frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
        self.frame_start = Instant::now();
    }
}
