mod stdout_sink;

use crate::stdout_sink::StdoutSink;
use prime_search_core::{Coordinator, RunConfig, TrialDivision};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // config.json is optional; without it the fixed default range applies
    let config = RunConfig::load("config.json").unwrap_or_default();

    let coordinator = Coordinator::new(config, TrialDivision, StdoutSink);
    coordinator.run().await?;

    Ok(())
}
