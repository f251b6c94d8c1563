//! Frame timing
//!
//! Delta time for the app loop, either a fixed step (deterministic, used by
//! headless runs and tests) or wall-clock time with a cap.

use std::time::Instant;
use crate::config::TimingConfig;

/// Produces the `dt` passed to each scene update
#[derive(Debug)]
pub enum FrameClock {
    /// Every frame advances by the same step
    Fixed { step: f32 },
    /// Real elapsed time, capped at `max_delta`
    Realtime { last_frame: Instant, max_delta: f32 },
}

impl FrameClock {
    /// A fixed-step clock
    pub fn fixed(step: f32) -> Self {
        FrameClock::Fixed { step }
    }

    /// A wall-clock clock
    pub fn realtime(max_delta: f32) -> Self {
        FrameClock::Realtime {
            last_frame: Instant::now(),
            max_delta,
        }
    }

    /// Build from the timing config
    pub fn from_config(config: &TimingConfig) -> Self {
        match config.fixed_timestep {
            Some(step) => Self::fixed(step),
            None => Self::realtime(config.max_delta),
        }
    }

    /// Restart timing, so time spent before the loop does not count
    pub fn reset(&mut self) {
        if let FrameClock::Realtime { last_frame, .. } = self {
            *last_frame = Instant::now();
        }
    }

    /// Seconds since the previous tick
    pub fn tick(&mut self) -> f32 {
        match self {
            FrameClock::Fixed { step } => *step,
            FrameClock::Realtime { last_frame, max_delta } => {
                let now = Instant::now();
                let raw_dt = (now - *last_frame).as_secs_f32();
                *last_frame = now;
                // Cap dt after stalls (window drag, breakpoints)
                raw_dt.min(*max_delta)
            }
        }
    }
}
