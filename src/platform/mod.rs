//! Platform abstraction layer
//!
//! Handles the pieces between the outside world and the simulation:
//! - Wall-clock time to frame deltas
//! - Demo input source

pub mod autopilot;

use std::time::{Duration, Instant};

pub use autopilot::Autopilot;

use crate::consts::MAX_FRAME_DT;

/// Turns wall-clock instants into frame deltas
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Seconds since the previous call, capped at `MAX_FRAME_DT`.
    ///
    /// The first call returns zero.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = match self.last {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);
        dt.min(MAX_FRAME_DT)
    }
}

/// Nominal duration of one frame at `frame_rate` frames per second
pub fn frame_duration(frame_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / frame_rate.max(1) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_clock() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        assert_eq!(clock.tick(start), 0.0);

        let dt = clock.tick(start + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-6);

        // Stalls are capped
        let dt = clock.tick(start + Duration::from_secs(5));
        assert_eq!(dt, 0.1);

        // Clock going backwards never yields a negative delta
        assert_eq!(clock.tick(start), 0.0);
    }

    #[test]
    fn test_frame_duration() {
        assert_eq!(frame_duration(50), Duration::from_millis(20));
        assert_eq!(frame_duration(0), Duration::from_secs(1));
    }
}
