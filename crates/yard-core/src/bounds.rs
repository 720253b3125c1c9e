//! Exchange Bounds
//!
//! Per-round wealth thresholds derived from the population's mean wealth.
//! A proposed exchange is applied only if both parties end up inside them.

use serde::{Deserialize, Serialize};

use crate::population::Population;

/// Thresholds gating every exchange in one round
///
/// `upper` is `floor(2 * avg)` and is exclusive. `lower` sits the same
/// distance below `floor(avg)` as `upper` sits above it, and is inclusive.
/// `lower` can be negative when the mean is fractional and small; it is kept
/// as computed rather than clamped to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeBounds {
    pub lower: i64,
    pub upper: i64,
}

impl ExchangeBounds {
    /// Bounds for a population holding `total` wealth across `size` agents.
    ///
    /// Returns `None` for an empty population, which has no mean.
    pub fn from_totals(total: u64, size: usize) -> Option<Self> {
        if size == 0 {
            return None;
        }

        let avg = total as f64 / size as f64;
        let upper = (2.0 * avg).floor() as i64;
        let floor_avg = avg.floor() as i64;
        let lower = floor_avg - (upper - floor_avg);

        Some(Self { lower, upper })
    }

    /// Bounds for the population's current state.
    pub fn for_population(population: &Population) -> Option<Self> {
        Self::from_totals(population.sum(), population.len())
    }

    /// Whether wealth `w` is allowed after an exchange.
    pub fn contains(&self, w: i64) -> bool {
        w >= self.lower && w < self.upper
    }

    /// Whether both tentative post-exchange wealths are allowed.
    pub fn admits(&self, am: i64, pm: i64) -> bool {
        am >= self.lower && pm >= self.lower && am < self.upper && pm < self.upper
    }

    /// Tentatively move `signed_delta` from the partner to the initiator.
    ///
    /// Returns the new `(initiator, partner)` wealths when the exchange is
    /// within bounds, `None` when it must be rejected. The pair always sums to
    /// `a + p`. A result that would leave either side negative is rejected
    /// even when `lower` is negative, as is one that does not fit in `i64`.
    pub fn evaluate(&self, a: u64, p: u64, signed_delta: i64) -> Option<(u64, u64)> {
        let am = i64::try_from(a).ok()?.checked_add(signed_delta)?;
        let pm = i64::try_from(p).ok()?.checked_sub(signed_delta)?;

        if !self.admits(am, pm) {
            return None;
        }

        Some((u64::try_from(am).ok()?, u64::try_from(pm).ok()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_agents_at_ten() {
        let bounds = ExchangeBounds::from_totals(20, 2).unwrap();
        assert_eq!(bounds, ExchangeBounds { lower: 0, upper: 20 });
    }

    #[test]
    fn test_default_run_bounds() {
        // 100 agents at 10 each
        let bounds = ExchangeBounds::from_totals(1000, 100).unwrap();
        assert_eq!(bounds, ExchangeBounds { lower: 0, upper: 20 });
    }

    #[test]
    fn test_fractional_mean() {
        // avg = 7/3 = 2.33.., upper = floor(4.66..) = 4, floor(avg) = 2
        let bounds = ExchangeBounds::from_totals(7, 3).unwrap();
        assert_eq!(bounds, ExchangeBounds { lower: 0, upper: 4 });
    }

    #[test]
    fn test_negative_lower_kept_literally() {
        // avg = 1.5, upper = 3, floor(avg) = 1, lower = 1 - 2 = -1
        let bounds = ExchangeBounds::from_totals(3, 2).unwrap();
        assert_eq!(bounds, ExchangeBounds { lower: -1, upper: 3 });

        // avg = 0.75, upper = 1, floor(avg) = 0, lower = -1
        let bounds = ExchangeBounds::from_totals(3, 4).unwrap();
        assert_eq!(bounds, ExchangeBounds { lower: -1, upper: 1 });
    }

    #[test]
    fn test_zero_wealth_rejects_everything() {
        let bounds = ExchangeBounds::from_totals(0, 10).unwrap();
        assert_eq!(bounds, ExchangeBounds { lower: 0, upper: 0 });
        assert_eq!(bounds.evaluate(0, 0, 0), None);
    }

    #[test]
    fn test_empty_population_has_no_bounds() {
        assert_eq!(ExchangeBounds::from_totals(0, 0), None);
        assert_eq!(ExchangeBounds::for_population(&Population::default()), None);
    }

    #[test]
    fn test_for_population() {
        let population = Population::from_wealth([12, 8, 10]);
        let bounds = ExchangeBounds::for_population(&population).unwrap();
        assert_eq!(bounds, ExchangeBounds { lower: 0, upper: 20 });
    }

    #[test]
    fn test_contains_edges() {
        let bounds = ExchangeBounds { lower: 0, upper: 20 };
        assert!(bounds.contains(0));
        assert!(bounds.contains(19));
        assert!(!bounds.contains(20));
        assert!(!bounds.contains(-1));
    }

    #[test]
    fn test_evaluate_accepts_within_bounds() {
        let bounds = ExchangeBounds { lower: 0, upper: 20 };
        assert_eq!(bounds.evaluate(10, 10, 5), Some((15, 5)));
        assert_eq!(bounds.evaluate(10, 10, -5), Some((5, 15)));
        assert_eq!(bounds.evaluate(10, 10, 0), Some((10, 10)));
    }

    #[test]
    fn test_evaluate_rejects_at_upper() {
        let bounds = ExchangeBounds { lower: 0, upper: 20 };
        // 10 + 10 = 20 is not < 20
        assert_eq!(bounds.evaluate(10, 10, 10), None);
        assert_eq!(bounds.evaluate(10, 10, -10), None);
        assert_eq!(bounds.evaluate(15, 5, 5), None);
    }

    #[test]
    fn test_evaluate_rejects_below_lower() {
        let bounds = ExchangeBounds { lower: 4, upper: 16 };
        assert_eq!(bounds.evaluate(10, 5, 2), None);
        assert_eq!(bounds.evaluate(10, 6, 2), Some((12, 4)));
    }

    #[test]
    fn test_evaluate_never_goes_negative() {
        let bounds = ExchangeBounds { lower: -5, upper: 10 };
        assert_eq!(bounds.evaluate(1, 1, 2), None);
    }

    #[test]
    fn test_evaluate_rejects_overflow() {
        let bounds = ExchangeBounds {
            lower: 0,
            upper: i64::MAX,
        };
        assert_eq!(bounds.evaluate(i64::MAX as u64, 1, 1), None);
        assert_eq!(bounds.evaluate(1, i64::MAX as u64, -1), None);
        assert_eq!(bounds.evaluate(u64::MAX, 0, 0), None);
    }

    #[test]
    fn test_huge_totals_do_not_overflow() {
        let bounds = ExchangeBounds::from_totals(u64::MAX, 2).unwrap();
        assert!(bounds.upper >= bounds.lower);
        assert_eq!(bounds.evaluate(u64::MAX / 2, u64::MAX / 2, 0), None);
    }

    #[test]
    fn test_evaluate_conserves_pair_total() {
        let bounds = ExchangeBounds { lower: 0, upper: 100 };
        for delta in -30..=30 {
            if let Some((am, pm)) = bounds.evaluate(40, 30, delta) {
                assert_eq!(am + pm, 70);
            }
        }
    }
}
