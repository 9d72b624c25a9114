use crate::Candidate;
use serde::Deserialize;
use std::fs;

/// Parameters for one run
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// First candidate of the contiguous range
    pub start: Candidate,
    /// Number of candidates in the range
    pub count: usize,
    /// Fixed number of worker tasks
    pub workers: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            start: 10_000_000_000,
            count: 1_000_000,
            workers: 10,
        }
    }
}

impl RunConfig {
    /// Loads a config from a JSON file
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: RunConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
