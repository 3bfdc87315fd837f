//! Event profiling helpers.

use std::time::Duration;

/// Start and end of a profiled command, both in device-clock nanoseconds
/// (the `CL_PROFILING_COMMAND_START`/`CL_PROFILING_COMMAND_END` counters).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfilingSpan {
    /// Counter value when the command started executing.
    pub start: u64,
    /// Counter value when the command finished.
    pub end: u64,
}

impl ProfilingSpan {
    /// Builds a span from the two profiling counter values.
    pub fn new(start: u64, end: u64) -> Self {
        ProfilingSpan { start, end }
    }

    /// The elapsed nanoseconds. A span whose counters ran backwards (a
    /// wrapped or unsynchronized device clock) reports 0.
    pub fn duration_ns(&self) -> u64 {
        if self.end < self.start {
            log::warn!(
                "event end time {} precedes start time {}",
                self.end,
                self.start
            );
            0
        } else {
            self.end - self.start
        }
    }

    /// The elapsed time as a [`Duration`].
    pub fn duration(&self) -> Duration {
        Duration::from_nanos(self.duration_ns())
    }

    /// The elapsed time in seconds.
    pub fn seconds(&self) -> f64 {
        self.duration().as_secs_f64()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_duration() {
        let span = ProfilingSpan::new(1_000, 3_500_000);
        assert_eq!(span.duration_ns(), 3_499_000);
        assert_eq!(span.duration(), Duration::from_nanos(3_499_000));
    }

    #[test]
    fn test_backwards_span_is_zero() {
        let span = ProfilingSpan::new(100, 50);
        assert_eq!(span.duration_ns(), 0);
        assert_eq!(span.seconds(), 0.0);
    }

    #[test]
    fn test_seconds() {
        let span = ProfilingSpan::new(0, 2_500_000_000);
        assert!((span.seconds() - 2.5).abs() < 1e-9);
    }
}
