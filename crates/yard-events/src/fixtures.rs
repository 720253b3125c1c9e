//! Sample data fixtures for testing.
//!
//! Enable the `test-fixtures` feature to access these helpers from other
//! crates' tests.
//!
//! ```ignore
//! // [dev-dependencies]
//! // yard-events = { path = "../yard-events", features = ["test-fixtures"] }
//!
//! use yard_events::fixtures;
//!
//! let snapshots = fixtures::sample_snapshots();
//! ```

use crate::{DistributionStats, RoundReport, WealthSnapshot};

/// Three frames of a four-agent run starting at 10 each.
///
/// Frame 1 moves 4 from agent 0 to agent 2; frame 2 rejects every exchange.
pub fn sample_snapshots() -> Vec<WealthSnapshot> {
    let initial = WealthSnapshot::new(0, vec![10, 10, 10, 10], equal_stats(10, 4));

    let first = WealthSnapshot::new(
        1,
        vec![6, 10, 14, 10],
        DistributionStats {
            min: 6,
            max: 14,
            mean: 10.0,
            median: 10.0,
            gini: 0.15,
            zeros: 0,
        },
    )
    .with_round(RoundReport {
        round: 1,
        lower: 0,
        upper: 20,
        accepted: 1,
        rejected: 3,
        volume: 4,
        partner_redraws: 1,
    });

    let second = WealthSnapshot::new(2, vec![6, 10, 14, 10], first.stats.clone()).with_round(
        RoundReport {
            round: 2,
            lower: 0,
            upper: 20,
            accepted: 0,
            rejected: 4,
            volume: 0,
            partner_redraws: 0,
        },
    );

    vec![initial, first, second]
}

/// Stats of `count` agents that each hold `wealth`.
pub fn equal_stats(wealth: u64, count: usize) -> DistributionStats {
    DistributionStats {
        min: wealth,
        max: wealth,
        mean: wealth as f64,
        median: wealth as f64,
        gini: 0.0,
        zeros: if wealth == 0 { count } else { 0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_snapshots_conserve_wealth() {
        let snapshots = sample_snapshots();
        assert_eq!(snapshots.len(), 3);
        assert!(snapshots.iter().all(|s| s.total == 40));
        assert!(snapshots[0].round.is_none());
        assert_eq!(snapshots[1].round.as_ref().map(|r| r.accepted), Some(1));
    }
}
