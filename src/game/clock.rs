// Frame-rate governor
//
// Sleeps out the remainder of each frame period and reports game time plus a
// clamped delta, so a stalled frame (window drag, debugger) never turns into
// one giant accrual or integration step.

use std::time::{Duration, Instant};

pub struct FrameClock {
    start: Instant,
    last: Instant,
    period: Duration,
    max_dt: f32,
}

/// Timing for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the clock started
    pub now: f64,
    /// Seconds since the previous tick, at most `max_dt`
    pub dt: f32,
}

impl FrameClock {
    pub fn new(fps: u32, max_dt: f32) -> Self {
        let now = Instant::now();
        FrameClock {
            start: now,
            last: now,
            period: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            max_dt,
        }
    }

    /// Blocks until one frame period has passed since the previous tick
    pub fn tick(&mut self) -> FrameTime {
        let elapsed = self.last.elapsed();
        if elapsed < self.period {
            std::thread::sleep(self.period - elapsed);
        }
        self.advance(Instant::now())
    }

    fn advance(&mut self, at: Instant) -> FrameTime {
        let dt = at.saturating_duration_since(self.last).as_secs_f32();
        self.last = at;
        FrameTime {
            now: at.saturating_duration_since(self.start).as_secs_f64(),
            dt: clamp_dt(dt, self.max_dt),
        }
    }
}

/// Clamps a raw frame delta into `[0, max_dt]`
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    if dt.is_finite() { dt.clamp(0.0, max_dt) } else { 0.0 }
}
