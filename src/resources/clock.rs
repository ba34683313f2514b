//! Time sources for animation playback.
//!
//! A [`Clock`] reports seconds elapsed since some fixed origin. The
//! [`AnimationManager`](crate::resources::animationmanager::AnimationManager)
//! owns exactly one and reads it for every time-dependent call.
//!
//! - [`MonotonicClock`] – wall time since construction, backed by [`Instant`]
//! - [`ManualClock`] – advanced explicitly, e.g. from [`WorldTime`](crate::resources::worldtime::WorldTime)

use std::time::Instant;

pub trait Clock: Send + Sync + 'static {
    /// Seconds elapsed since the clock's origin.
    fn elapsed_seconds(&self) -> f32;
}

#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        MonotonicClock {
            origin: Instant::now(),
        }
    }

    /// Reset the origin to now. Returns the seconds elapsed before the reset.
    pub fn restart(&mut self) -> f32 {
        let elapsed = self.elapsed_seconds();
        self.origin = Instant::now();
        elapsed
    }
}

impl Clock for MonotonicClock {
    fn elapsed_seconds(&self) -> f32 {
        self.origin.elapsed().as_secs_f32()
    }
}

/// Clock whose reading only changes when told to.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ManualClock {
    elapsed: f32,
}

impl ManualClock {
    pub fn new(elapsed: f32) -> Self {
        ManualClock { elapsed }
    }

    pub fn set(&mut self, elapsed: f32) {
        self.elapsed = elapsed;
    }

    /// Move forward by `dt` seconds. Negative deltas are ignored.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }
}

impl Clock for ManualClock {
    fn elapsed_seconds(&self) -> f32 {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advances() {
        let mut clock = ManualClock::default();
        clock.advance(0.5);
        clock.advance(0.25);
        assert_eq!(clock.elapsed_seconds(), 0.75);
    }

    #[test]
    fn test_manual_clock_ignores_negative_delta() {
        let mut clock = ManualClock::new(2.0);
        clock.advance(-1.0);
        assert_eq!(clock.elapsed_seconds(), 2.0);
        clock.set(1.0);
        assert_eq!(clock.elapsed_seconds(), 1.0);
    }

    #[test]
    fn test_monotonic_clock_never_goes_backwards() {
        let clock = MonotonicClock::new();
        let a = clock.elapsed_seconds();
        let b = clock.elapsed_seconds();
        assert!(a >= 0.0);
        assert!(b >= a);
    }
}
