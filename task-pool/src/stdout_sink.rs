use async_trait::async_trait;
use prime_search_core::{format_elapsed, Candidate, ReportSink, RunReport};
use std::io::Write;

/// Sink that streams the run output to standard output
///
/// Each write locks stdout and flushes, so a prime appears as soon as it
/// is found even though the stream has no trailing newlines.
pub struct StdoutSink;

#[async_trait]
impl ReportSink for StdoutSink {
    async fn begin(&self) {
        println!("Prime numbers found:");
    }

    async fn prime_found(&self, candidate: Candidate) {
        let mut out = std::io::stdout().lock();
        let _ = write!(out, "{}, ", candidate);
        let _ = out.flush();
    }

    async fn summary(&self, report: &RunReport) {
        println!();
        println!();
        println!("Numbers processed = {}", report.processed);
        println!("Primes found      = {}", report.prime_count);
        println!("Total time        = {}", format_elapsed(report.elapsed));
    }
}
