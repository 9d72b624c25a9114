#[derive(Debug)]
pub enum PoolError {
    /// A worker task panicked or was cancelled before the queue drained
    WorkerFailed(String),
}

impl std::fmt::Display for PoolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolError::WorkerFailed(reason) => {
                write!(f, "Worker task failed: {}", reason)
            }
        }
    }
}

impl std::error::Error for PoolError {}
