//! Yard-Sale Wealth Simulation Library
//!
//! Core simulation logic: the agent population, the per-round redistribution
//! step and its bounds, configuration, and run output.

use rand::rngs::SmallRng;
use rand::SeedableRng;

pub mod bounds;
pub mod config;
pub mod error;
pub mod output;
pub mod population;
pub mod simulation;
pub mod step;

pub use bounds::ExchangeBounds;
pub use config::SimConfig;
pub use error::{ConfigError, OutputError, PopulationError, SimError};
pub use population::{Agent, AgentId, Population};
pub use simulation::{run_to_dir, Simulation};
pub use step::{step, step_with, Exchange, RoundOutcome, MAX_PARTNER_DRAWS};

/// Seeded random number generator for a run.
///
/// Every draw in a run comes from the one generator built here, so a run is
/// reproducible from its seed.
pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
