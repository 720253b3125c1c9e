//! Statistics Output
//!
//! Distribution statistics per frame, and an accumulator over a whole run.

use uuid::Uuid;
use yard_events::{ConfigSnapshot, DistributionStats, RoundReport, RunSummary};

/// Summary statistics of a wealth vector.
pub fn distribution_stats(values: &[u64]) -> DistributionStats {
    if values.is_empty() {
        return DistributionStats::default();
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let n = sorted.len();
    let total: u64 = sorted.iter().sum();
    let mean = total as f64 / n as f64;

    let median = if n % 2 == 1 {
        sorted[n / 2] as f64
    } else {
        (sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0
    };

    DistributionStats {
        min: sorted[0],
        max: sorted[n - 1],
        mean,
        median,
        gini: gini_sorted(&sorted, total),
        zeros: sorted.iter().take_while(|&&v| v == 0).count(),
    }
}

/// Gini coefficient of ascending `sorted` values summing to `total`.
///
/// G = (2 * sum(i * x_i)) / (n * total) - (n + 1) / n, with 1-based ranks.
fn gini_sorted(sorted: &[u64], total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }

    let n = sorted.len() as f64;
    let weighted: f64 = sorted
        .iter()
        .enumerate()
        .map(|(i, &v)| (i + 1) as f64 * v as f64)
        .sum();

    (2.0 * weighted) / (n * total as f64) - (n + 1.0) / n
}

/// Accumulates round reports over a run
#[derive(Debug, Default)]
pub struct StatsCollector {
    pub rounds: u64,
    pub accepted: u64,
    pub rejected: u64,
    pub volume: u64,
    pub partner_redraws: u64,
    pub initial: Option<DistributionStats>,
    pub latest: Option<DistributionStats>,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state of a frame; the first call is kept as the initial state.
    pub fn record_frame(&mut self, stats: &DistributionStats) {
        if self.initial.is_none() {
            self.initial = Some(stats.clone());
        }
        self.latest = Some(stats.clone());
    }

    /// Record the result of one round
    pub fn record_round(&mut self, report: &RoundReport) {
        self.rounds += 1;
        self.accepted = self.accepted.saturating_add(report.accepted as u64);
        self.rejected = self.rejected.saturating_add(report.rejected as u64);
        self.volume = self.volume.saturating_add(report.volume);
        self.partner_redraws = self
            .partner_redraws
            .saturating_add(report.partner_redraws as u64);
    }

    /// Fraction of exchange attempts that were applied.
    pub fn acceptance_rate(&self) -> f64 {
        let attempts = self.accepted + self.rejected;
        if attempts > 0 {
            self.accepted as f64 / attempts as f64
        } else {
            0.0
        }
    }

    /// Generate final run summary
    pub fn summary(&self, run_id: Uuid, config: ConfigSnapshot, total_wealth: u64) -> RunSummary {
        RunSummary {
            run_id,
            config,
            frames: self.rounds + 1,
            rounds: self.rounds,
            total_wealth,
            exchanges_accepted: self.accepted,
            exchanges_rejected: self.rejected,
            total_volume: self.volume,
            acceptance_rate: self.acceptance_rate(),
            initial_stats: self.initial.clone().unwrap_or_default(),
            final_stats: self.latest.clone().unwrap_or_default(),
        }
    }
}
