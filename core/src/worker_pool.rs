use crate::{Aggregator, PoolError, PrimalityOracle, ReportSink, WorkQueue};
use std::sync::Arc;
use tokio::task::JoinSet;

/// Fixed-size pool of worker tasks draining the shared queue
///
/// Each worker loops dequeue → oracle → record and terminates only when it
/// observes the queue empty, so the whole range is processed exactly once
/// no matter how the candidates land across workers.
pub struct WorkerPool;

impl WorkerPool {
    /// Spawns `worker_count` workers and waits for every one of them
    ///
    /// Returns only after all workers have terminated; a worker that
    /// panics surfaces here as `PoolError::WorkerFailed` and fails the run
    /// (the remaining workers are aborted when the task set is dropped).
    pub async fn run<O, S>(
        worker_count: usize,
        queue: Arc<WorkQueue>,
        oracle: Arc<O>,
        aggregator: Arc<Aggregator<S>>,
    ) -> Result<(), PoolError>
    where
        O: PrimalityOracle + 'static,
        S: ReportSink + 'static,
    {
        let mut workers = JoinSet::new();

        for _ in 0..worker_count {
            let queue = queue.clone();
            let oracle = oracle.clone();
            let aggregator = aggregator.clone();

            workers.spawn(async move {
                while let Some(candidate) = queue.try_dequeue().await {
                    let is_prime = oracle.is_prime(candidate);
                    aggregator.record(candidate, is_prime).await;
                }
            });
        }

        while let Some(joined) = workers.join_next().await {
            joined.map_err(|e| PoolError::WorkerFailed(e.to_string()))?;
        }

        Ok(())
    }
}
