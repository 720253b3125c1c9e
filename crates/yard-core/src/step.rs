//! Redistribution Step
//!
//! One round of the yard-sale exchange. Every agent, in population order,
//! initiates exactly one exchange attempt with a random partner:
//!
//! 1. draw a partner, redrawing while it is the initiator,
//! 2. draw a sign (+1 or -1),
//! 3. draw `delta` uniformly from `0..=min(initiator, partner)`,
//! 4. apply `initiator += sign * delta`, `partner -= sign * delta` if both
//!    results fall within the round's [`ExchangeBounds`], otherwise do nothing.
//!
//! Exchanges are applied immediately, so later initiators see wealth already
//! moved by earlier ones. The RNG is consumed in that fixed order (partner,
//! sign, delta), which makes a round reproducible from the generator state.

use rand::Rng;
use tracing::{debug, trace};
use yard_events::RoundReport;

use crate::bounds::ExchangeBounds;
use crate::error::PopulationError;
use crate::population::Population;

/// Partner draws allowed per initiator before giving up.
///
/// With two or more agents each draw finds a distinct partner with
/// probability at least 1/2, so this is never reached in practice.
pub const MAX_PARTNER_DRAWS: usize = 1_000;

/// A single proposed exchange and its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    pub initiator: usize,
    pub partner: usize,
    /// Amount moved to the initiator; negative moves wealth to the partner
    pub signed_delta: i64,
    /// Wealth of (initiator, partner) when the exchange was proposed
    pub before: (u64, u64),
    /// Wealth of (initiator, partner) after the exchange, if it was applied
    pub after: Option<(u64, u64)>,
}

impl Exchange {
    pub fn accepted(&self) -> bool {
        self.after.is_some()
    }
}

/// Tally of one round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub bounds: ExchangeBounds,
    pub accepted: usize,
    pub rejected: usize,
    /// Sum of |delta| over accepted exchanges
    pub volume: u64,
    /// Partner draws discarded because they picked the initiator
    pub partner_redraws: usize,
}

impl RoundOutcome {
    fn new(bounds: ExchangeBounds) -> Self {
        Self {
            bounds,
            accepted: 0,
            rejected: 0,
            volume: 0,
            partner_redraws: 0,
        }
    }

    /// Serializable report for round number `round`.
    pub fn report(&self, round: u64) -> RoundReport {
        RoundReport {
            round,
            lower: self.bounds.lower,
            upper: self.bounds.upper,
            accepted: self.accepted,
            rejected: self.rejected,
            volume: self.volume,
            partner_redraws: self.partner_redraws,
        }
    }
}

/// Run one redistribution round over the whole population.
///
/// Fails before drawing or mutating anything if the population has fewer
/// than two agents.
pub fn step<R: Rng + ?Sized>(
    population: &mut Population,
    rng: &mut R,
) -> Result<RoundOutcome, PopulationError> {
    step_with(population, rng, |_| {})
}

/// [`step`], calling `observe` with every proposed exchange as it resolves.
pub fn step_with<R, F>(
    population: &mut Population,
    rng: &mut R,
    mut observe: F,
) -> Result<RoundOutcome, PopulationError>
where
    R: Rng + ?Sized,
    F: FnMut(&Exchange),
{
    match population.len() {
        0 => return Err(PopulationError::Empty),
        1 => return Err(PopulationError::Insufficient { size: 1 }),
        _ => {}
    }

    let bounds = ExchangeBounds::for_population(population).ok_or(PopulationError::Empty)?;
    let mut outcome = RoundOutcome::new(bounds);

    for initiator in 0..population.len() {
        let (partner, redraws) = select_partner(population, initiator, rng)?;
        outcome.partner_redraws += redraws;

        let sign: i64 = if rng.gen_range(0..2) == 0 { -1 } else { 1 };

        let a = population.wealth(initiator);
        let p = population.wealth(partner);
        let delta = rng.gen_range(0..=a.min(p));
        let signed_delta = sign * i64::try_from(delta).unwrap_or(i64::MAX);

        let after = bounds.evaluate(a, p, signed_delta);
        match after {
            Some((am, pm)) => {
                population.settle(initiator, am, partner, pm);
                outcome.accepted += 1;
                outcome.volume = outcome.volume.saturating_add(delta);
            }
            None => outcome.rejected += 1,
        }

        let exchange = Exchange {
            initiator,
            partner,
            signed_delta,
            before: (a, p),
            after,
        };
        trace!(
            initiator,
            partner,
            signed_delta,
            accepted = exchange.accepted(),
            "exchange"
        );
        observe(&exchange);
    }

    debug!(
        lower = bounds.lower,
        upper = bounds.upper,
        accepted = outcome.accepted,
        rejected = outcome.rejected,
        volume = outcome.volume,
        "round complete"
    );

    Ok(outcome)
}

/// Draw partners until one differs from `initiator`.
///
/// Returns the partner index and how many draws were discarded.
fn select_partner<R: Rng + ?Sized>(
    population: &Population,
    initiator: usize,
    rng: &mut R,
) -> Result<(usize, usize), PopulationError> {
    for redraws in 0..MAX_PARTNER_DRAWS {
        let candidate = population.select_random(rng)?;
        if candidate != initiator {
            return Ok((candidate, redraws));
        }
    }

    Err(PopulationError::PartnerSelectionExhausted {
        initiator,
        attempts: MAX_PARTNER_DRAWS,
    })
}
