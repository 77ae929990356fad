use std::time::Instant;

/// Measures time elapsed since it was started. Monotonic, millisecond resolution.
///
/// This is wall-clock time, not process CPU time: time the thread spends blocked or descheduled
/// is counted too, so readings of short sorts on a busy machine can exceed the CPU time spent.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time rounded to the nearest millisecond.
    pub fn elapsed_milliseconds(&self) -> u128 {
        (self.start.elapsed().as_micros() + 500) / 1000
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}
