use crate::Candidate;
use std::time::Duration;

/// Final state of one completed run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub processed: usize,
    pub prime_count: usize,
    pub primes: Vec<Candidate>,
    pub elapsed: Duration,
}

/// Formats a duration as `H:MM:SS.fffffff` (7 fractional digits, 100ns ticks)
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let ticks = elapsed.subsec_nanos() / 100;
    format!(
        "{}:{:02}:{:02}.{:07}",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60,
        ticks
    )
}
