//! Snapshot Types
//!
//! Serialization structs for per-frame wealth snapshots.
//!
//! A snapshot captures every agent's wealth at a point in the run, in
//! population order, along with summary statistics and (for frames after the
//! first) a report on the round that produced it.

use serde::{Deserialize, Serialize};

/// Generates a snapshot ID for the given frame number.
pub fn generate_snapshot_id(frame: u64) -> String {
    format!("snap_{:06}", frame)
}

/// Summary statistics of a wealth distribution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributionStats {
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub median: f64,
    /// Gini coefficient, 0.0 (perfect equality) to (n-1)/n (one agent holds everything)
    pub gini: f64,
    /// Agents holding zero wealth
    pub zeros: usize,
}

/// Outcome of a single redistribution round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u64,
    /// Lowest wealth an applied exchange may leave an agent with (may be negative)
    pub lower: i64,
    /// Exclusive ceiling on wealth after an applied exchange
    pub upper: i64,
    pub accepted: usize,
    pub rejected: usize,
    /// Sum of |delta| over accepted exchanges
    pub volume: u64,
    #[serde(default)]
    pub partner_redraws: usize,
}

impl RoundReport {
    /// Total exchange attempts in the round (one per agent).
    pub fn attempts(&self) -> usize {
        self.accepted + self.rejected
    }
}

/// Wealth of every agent at one frame of the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WealthSnapshot {
    pub snapshot_id: String,
    /// Frame number; frame 0 is the initial population
    pub frame: u64,
    pub total: u64,
    /// Per-agent wealth in population order
    pub values: Vec<u64>,
    #[serde(default)]
    pub stats: DistributionStats,
    /// Round that produced this frame; absent for frame 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<RoundReport>,
}

impl WealthSnapshot {
    pub fn new(frame: u64, values: Vec<u64>, stats: DistributionStats) -> Self {
        Self {
            snapshot_id: generate_snapshot_id(frame),
            frame,
            total: values.iter().sum(),
            values,
            stats,
            round: None,
        }
    }

    pub fn with_round(mut self, report: RoundReport) -> Self {
        self.round = Some(report);
        self
    }

    /// Wealth values as floats, the form histogram renderers consume.
    pub fn values_f64(&self) -> Vec<f64> {
        self.values.iter().map(|&v| v as f64).collect()
    }

    /// Serializes the snapshot to a single JSON line.
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a snapshot from a JSON line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> RoundReport {
        RoundReport {
            round: 3,
            lower: 0,
            upper: 20,
            accepted: 7,
            rejected: 3,
            volume: 31,
            partner_redraws: 2,
        }
    }

    #[test]
    fn test_generate_snapshot_id() {
        assert_eq!(generate_snapshot_id(0), "snap_000000");
        assert_eq!(generate_snapshot_id(42), "snap_000042");
    }

    #[test]
    fn test_new_computes_total() {
        let snapshot = WealthSnapshot::new(0, vec![10, 5, 15], DistributionStats::default());
        assert_eq!(snapshot.total, 30);
        assert_eq!(snapshot.snapshot_id, "snap_000000");
        assert!(snapshot.round.is_none());
    }

    #[test]
    fn test_snapshot_jsonl() {
        let snapshot = WealthSnapshot::new(3, vec![12, 8], DistributionStats::default())
            .with_round(sample_report());

        let line = snapshot.to_jsonl().unwrap();
        assert!(!line.contains('\n'));

        let parsed = WealthSnapshot::from_jsonl(&line).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_initial_frame_omits_round() {
        let snapshot = WealthSnapshot::new(0, vec![10, 10], DistributionStats::default());
        let line = snapshot.to_jsonl().unwrap();
        assert!(!line.contains("\"round\""));
    }

    #[test]
    fn test_report_attempts() {
        assert_eq!(sample_report().attempts(), 10);
    }

    #[test]
    fn test_negative_lower_deserializes() {
        let json = r#"{"round":1,"lower":-3,"upper":3,"accepted":0,"rejected":2,"volume":0}"#;
        let report: RoundReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.lower, -3);
        assert_eq!(report.partner_redraws, 0);
    }
}
