use crate::{Candidate, ReportSink, RunReport};
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory sink that records every streamed prime
/// Used by tests to observe the output stream without touching stdout
#[derive(Default)]
pub struct CollectingSink {
    primes: Mutex<Vec<Candidate>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the primes streamed so far, in arrival order
    pub fn streamed(&self) -> Vec<Candidate> {
        self.primes.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportSink for CollectingSink {
    async fn begin(&self) {}

    async fn prime_found(&self, candidate: Candidate) {
        self.primes.lock().unwrap().push(candidate);
    }

    async fn summary(&self, _report: &RunReport) {}
}
