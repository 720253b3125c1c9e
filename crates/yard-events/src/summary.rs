//! Run Summary
//!
//! End-of-run record: the resolved configuration (so a run can be replayed
//! from its seed) and aggregate exchange statistics.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::DistributionStats;

/// Configuration a run actually used, with the seed resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigSnapshot {
    pub seed: u64,
    pub agents: usize,
    pub money: u64,
    pub steps: u64,
    pub bins: usize,
}

/// Aggregate results of a completed run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub config: ConfigSnapshot,
    /// Frames captured, including the initial state
    pub frames: u64,
    /// Redistribution rounds executed
    pub rounds: u64,
    pub total_wealth: u64,
    pub exchanges_accepted: u64,
    pub exchanges_rejected: u64,
    pub total_volume: u64,
    pub acceptance_rate: f64,
    pub initial_stats: DistributionStats,
    pub final_stats: DistributionStats,
}

impl RunSummary {
    /// Serializes the summary as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
