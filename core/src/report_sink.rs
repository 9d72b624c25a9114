use crate::{Candidate, RunReport};
use async_trait::async_trait;

/// Trait for abstracting where run output goes
/// Different implementations for stdout, in-memory capture, etc.
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Emit the label line before any candidate is streamed
    async fn begin(&self);

    /// Emit one discovered prime as it is recorded
    /// Called while the aggregator holds its log lock, so two candidates'
    /// output never interleaves
    async fn prime_found(&self, candidate: Candidate);

    /// Emit the final summary after every worker has finished
    async fn summary(&self, report: &RunReport);
}
