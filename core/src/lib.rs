mod candidate;
pub use candidate::Candidate;

pub mod oracle;
pub use oracle::PrimalityOracle;

pub mod trial_division;
pub use trial_division::TrialDivision;

mod work_queue;
pub use work_queue::WorkQueue;

mod aggregator;
pub use aggregator::Aggregator;

pub mod report_sink;
pub use report_sink::ReportSink;

pub mod collecting_sink;
pub use collecting_sink::CollectingSink;

mod worker_pool;
pub use worker_pool::WorkerPool;

mod pool_error;
pub use pool_error::PoolError;

mod coordinator;
pub use coordinator::Coordinator;

mod run_report;
pub use run_report::{format_elapsed, RunReport};

mod run_config;
pub use run_config::RunConfig;
