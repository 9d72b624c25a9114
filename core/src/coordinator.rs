use crate::{
    Aggregator, PoolError, PrimalityOracle, ReportSink, RunConfig, RunReport, WorkQueue,
    WorkerPool,
};
use std::sync::Arc;
use std::time::Instant;

/// Coordinator drives one end-to-end run: fill the queue, start the
/// workers, wait for all of them, then read the aggregate and report
pub struct Coordinator<O: PrimalityOracle, S: ReportSink> {
    config: RunConfig,
    oracle: Arc<O>,
    sink: Arc<S>,
}

impl<O, S> Coordinator<O, S>
where
    O: PrimalityOracle + 'static,
    S: ReportSink + 'static,
{
    pub fn new(config: RunConfig, oracle: O, sink: S) -> Self {
        Self {
            config,
            oracle: Arc::new(oracle),
            sink: Arc::new(sink),
        }
    }

    pub async fn run(&self) -> Result<RunReport, PoolError> {
        let queue = Arc::new(WorkQueue::fill(self.config.start, self.config.count));
        let aggregator = Arc::new(Aggregator::new(self.sink.clone()));

        self.sink.begin().await;

        let started = Instant::now();
        WorkerPool::run(
            self.config.workers,
            queue,
            self.oracle.clone(),
            aggregator.clone(),
        )
        .await?;
        let elapsed = started.elapsed();

        // The pool has joined every worker, so the aggregate is final
        let report = RunReport {
            processed: aggregator.processed(),
            prime_count: aggregator.prime_count(),
            primes: aggregator.primes().await,
            elapsed,
        };

        self.sink.summary(&report).await;
        Ok(report)
    }
}
