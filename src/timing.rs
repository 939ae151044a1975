//! Monotonic elapsed-time measurement for bracketing round trips

use std::time::Instant;

/// Stopwatch over a monotonic clock source.
///
/// Backed by `std::time::Instant`, so readings are never affected by
/// wall-clock adjustments. One stopwatch brackets exactly one round trip.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    /// Start a new stopwatch at the current instant
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Elapsed time since start, in milliseconds with sub-millisecond precision
    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }
}
