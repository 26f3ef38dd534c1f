//! Frame pacing and frame-rate sampling

use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

use super::Clock;

/// Frames kept for the rolling FPS average
const WINDOW: usize = 120;

/// Fixed-rate clock
///
/// Sleeps away whatever is left of the frame budget, then records the full
/// frame interval. The unpaced variant measures without sleeping.
pub struct FrameClock {
    budget: Option<Duration>,
    frame_times: VecDeque<Duration>,
    last_tick: Instant,
}

impl FrameClock {
    /// Clock targeting `fps` frames per second
    pub fn paced(fps: u32) -> Self {
        let budget = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        Self::with_budget(Some(budget))
    }

    /// Clock that never sleeps
    pub fn unpaced() -> Self {
        Self::with_budget(None)
    }

    fn with_budget(budget: Option<Duration>) -> Self {
        Self {
            budget,
            frame_times: VecDeque::with_capacity(WINDOW),
            last_tick: Instant::now(),
        }
    }

    /// Get average frame time in milliseconds (over the window)
    pub fn avg_frame_time_ms(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let sum: Duration = self.frame_times.iter().sum();
        sum.as_secs_f32() * 1000.0 / self.frame_times.len() as f32
    }

    /// Get last frame time in milliseconds
    pub fn last_frame_time_ms(&self) -> f32 {
        self.frame_times
            .back()
            .map(|d| d.as_secs_f32() * 1000.0)
            .unwrap_or(0.0)
    }
}

impl Clock for FrameClock {
    fn tick(&mut self) {
        if let Some(budget) = self.budget {
            let elapsed = self.last_tick.elapsed();
            if elapsed < budget {
                thread::sleep(budget - elapsed);
            }
        }

        let now = Instant::now();
        self.frame_times.push_back(now - self.last_tick);
        if self.frame_times.len() > WINDOW {
            self.frame_times.pop_front();
        }
        self.last_tick = now;
    }

    fn fps(&self) -> f32 {
        let ms = self.avg_frame_time_ms();
        if ms > 0.0 {
            1000.0 / ms
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_frames_reads_zero() {
        let clock = FrameClock::unpaced();
        assert_eq!(clock.fps(), 0.0);
        assert_eq!(clock.last_frame_time_ms(), 0.0);
    }

    #[test]
    fn test_paced_clock_throttles() {
        let mut clock = FrameClock::paced(50);
        for _ in 0..5 {
            clock.tick();
        }
        // 20ms budget per frame; sleep may overshoot but never undershoots
        assert!(clock.last_frame_time_ms() >= 19.0);
        let fps = clock.fps();
        assert!(fps > 10.0 && fps <= 55.0, "FPS was {}", fps);
    }

    #[test]
    fn test_window_is_bounded() {
        let mut clock = FrameClock::unpaced();
        for _ in 0..(WINDOW + 10) {
            clock.tick();
        }
        assert_eq!(clock.frame_times.len(), WINDOW);
    }
}
