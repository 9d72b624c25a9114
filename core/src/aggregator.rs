use crate::{Candidate, ReportSink};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared accumulator for worker results
///
/// Counters are atomics; the prime log is an append-only vector behind a
/// lock. The coordinator reads the final values only after joining every
/// worker, which is the synchronization point that makes all updates
/// visible, so Relaxed ordering on the counters is sufficient.
pub struct Aggregator<S: ReportSink> {
    processed: AtomicUsize,
    prime_count: AtomicUsize,
    prime_log: Mutex<Vec<Candidate>>,
    sink: Arc<S>,
}

impl<S: ReportSink> Aggregator<S> {
    pub fn new(sink: Arc<S>) -> Self {
        Self {
            processed: AtomicUsize::new(0),
            prime_count: AtomicUsize::new(0),
            prime_log: Mutex::new(Vec::new()),
            sink,
        }
    }

    /// Records one evaluated candidate
    ///
    /// Always bumps the processed counter. For a prime, the counter bump,
    /// the log append and the stream to the sink all happen under the log
    /// lock, so a concurrent `record` for another candidate cannot
    /// interleave its append or output with this one's.
    pub async fn record(&self, candidate: Candidate, is_prime: bool) {
        self.processed.fetch_add(1, Ordering::Relaxed);

        if is_prime {
            let mut log = self.prime_log.lock().await;
            self.prime_count.fetch_add(1, Ordering::Relaxed);
            log.push(candidate);
            self.sink.prime_found(candidate).await;
        }
    }

    pub fn processed(&self) -> usize {
        self.processed.load(Ordering::Relaxed)
    }

    pub fn prime_count(&self) -> usize {
        self.prime_count.load(Ordering::Relaxed)
    }

    /// Returns the discovered primes in the order they were recorded
    pub async fn primes(&self) -> Vec<Candidate> {
        self.prime_log.lock().await.clone()
    }
}
