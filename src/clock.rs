//! Shared handle on the current simulated time.
//!
//! The discrete-event scheduler owns the timeline and is outside this crate;
//! tracers only ever read the current time. [`SimClock`] is the boundary: the
//! scheduler advances it, probe callbacks and log functions sample it.
//!
//! The handle is deliberately not `Send`: the tracing layer runs inline with
//! a single-threaded cooperative simulation, and parallel runs must each own
//! an independent clock and trace manager.

use std::cell::Cell;
use std::rc::Rc;

/// Cheaply cloneable handle on the current simulated time.
///
/// All clones observe the same timeline.
///
/// # Examples
///
/// ```rust
/// use simtrace::SimClock;
///
/// let clock = SimClock::new();
/// let reader = clock.clone();
/// clock.set(12.5);
/// assert_eq!(reader.now(), 12.5);
/// assert_eq!(reader.ticks(), 12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    now: Rc<Cell<f64>>,
}

impl SimClock {
    /// Create a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time in ticks of the configured timescale.
    pub fn now(&self) -> f64 {
        self.now.get()
    }

    /// Advance (or rewind) the clock; called by the scheduler only.
    pub fn set(&self, time: f64) {
        self.now.set(time);
    }

    /// Current time truncated to a whole tick, as stamped into the waveform.
    pub fn ticks(&self) -> u64 {
        self.now.get() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_timeline() {
        let clock = SimClock::new();
        let other = clock.clone();
        assert_eq!(other.now(), 0.0);
        clock.set(42.0);
        assert_eq!(other.now(), 42.0);
    }

    #[test]
    fn test_ticks_truncate() {
        let clock = SimClock::new();
        clock.set(9.999);
        assert_eq!(clock.ticks(), 9);
    }
}
