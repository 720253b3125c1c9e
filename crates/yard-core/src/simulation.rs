//! Simulation Driver
//!
//! Owns the population and the run's single RNG, advances rounds and turns
//! each resulting state into a [`WealthSnapshot`].

use rand::rngs::SmallRng;
use tracing::info;
use uuid::Uuid;
use yard_events::{RunSummary, WealthSnapshot};

use crate::config::SimConfig;
use crate::error::{PopulationError, SimError};
use crate::output::{distribution_stats, RunWriter, StatsCollector};
use crate::population::Population;
use crate::seeded_rng;
use crate::step::step;

/// A single simulation run
pub struct Simulation {
    config: SimConfig,
    population: Population,
    rng: SmallRng,
    round: u64,
    stats: StatsCollector,
}

impl Simulation {
    /// Validate the config, resolve its seed and build the initial population.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let config = config.resolve_seed();

        let population = Population::with_uniform_wealth(config.agents, config.money);
        let rng = seeded_rng(config.seed);

        info!(
            seed = config.seed,
            agents = config.agents,
            money = config.money,
            steps = config.steps,
            "simulation initialized"
        );

        let mut simulation = Self {
            config,
            population,
            rng,
            round: 0,
            stats: StatsCollector::new(),
        };
        let initial = simulation.snapshot();
        simulation.stats.record_frame(&initial.stats);
        Ok(simulation)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Rounds completed so far
    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn stats(&self) -> &StatsCollector {
        &self.stats
    }

    /// Snapshot of the current state, numbered by the rounds completed.
    pub fn snapshot(&self) -> WealthSnapshot {
        let values = self.population.values();
        let stats = distribution_stats(&values);
        WealthSnapshot::new(self.round, values, stats)
    }

    /// Run one redistribution round and return the resulting frame.
    pub fn advance(&mut self) -> Result<WealthSnapshot, PopulationError> {
        let outcome = step(&mut self.population, &mut self.rng)?;
        self.round += 1;

        let report = outcome.report(self.round);
        self.stats.record_round(&report);

        let snapshot = self.snapshot().with_round(report);
        self.stats.record_frame(&snapshot.stats);
        Ok(snapshot)
    }

    /// Produce every frame of the run, handing each to `on_frame`.
    ///
    /// Frame 0 is the initial state; `steps - 1` rounds follow. Returns the
    /// last frame.
    pub fn run<F>(&mut self, mut on_frame: F) -> Result<WealthSnapshot, SimError>
    where
        F: FnMut(&WealthSnapshot) -> Result<(), SimError>,
    {
        let initial = self.snapshot();
        on_frame(&initial)?;

        let progress_interval = (self.config.steps / 10).max(1);
        let mut last = initial;

        for frame in 1..self.config.steps {
            last = self.advance()?;
            on_frame(&last)?;

            if frame % progress_interval == 0 {
                info!(
                    frame,
                    steps = self.config.steps,
                    gini = last.stats.gini,
                    max = last.stats.max,
                    "progress"
                );
            }
        }

        Ok(last)
    }

    /// Summary of the run so far.
    pub fn summary(&self, run_id: Uuid) -> RunSummary {
        self.stats
            .summary(run_id, self.config.snapshot(), self.population.sum())
    }
}

/// Run a whole simulation, writing every artifact to the configured output
/// directory.
pub fn run_to_dir(config: SimConfig) -> Result<RunSummary, SimError> {
    let mut simulation = Simulation::new(config)?;
    let mut writer = RunWriter::create(simulation.config())?;

    let last = simulation.run(|snapshot| Ok(writer.write_frame(snapshot)?))?;

    let summary = simulation.summary(Uuid::new_v4());
    writer.finish(&last, &summary)?;

    info!(
        run_id = %summary.run_id,
        seed = summary.config.seed,
        rounds = summary.rounds,
        acceptance_rate = summary.acceptance_rate,
        final_gini = summary.final_stats.gini,
        "simulation complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    fn config(seed: u64, steps: u64) -> SimConfig {
        SimConfig {
            seed,
            agents: 20,
            money: 10,
            steps,
            render: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = Simulation::new(SimConfig {
            agents: 1,
            ..config(1, 5)
        });
        assert!(matches!(
            result,
            Err(SimError::Config(ConfigError::Invalid { field: "agents", .. }))
        ));
    }

    #[test]
    fn test_initial_snapshot() {
        let simulation = Simulation::new(config(1, 5)).unwrap();
        let snapshot = simulation.snapshot();
        assert_eq!(snapshot.frame, 0);
        assert_eq!(snapshot.total, 200);
        assert_eq!(snapshot.values, vec![10; 20]);
        assert!(snapshot.stats.gini.abs() < 1e-12);
    }

    #[test]
    fn test_zero_seed_is_resolved() {
        let simulation = Simulation::new(config(0, 5)).unwrap();
        assert_ne!(simulation.seed(), 0);
    }

    #[test]
    fn test_advance_numbers_frames() {
        let mut simulation = Simulation::new(config(3, 5)).unwrap();
        let first = simulation.advance().unwrap();
        let second = simulation.advance().unwrap();

        assert_eq!(first.frame, 1);
        assert_eq!(second.frame, 2);
        assert_eq!(second.round.as_ref().map(|r| r.round), Some(2));
        assert_eq!(simulation.round(), 2);
        assert_eq!(second.total, 200);
    }

    #[test]
    fn test_run_produces_steps_frames() {
        let mut simulation = Simulation::new(config(5, 12)).unwrap();
        let mut frames = Vec::new();
        let last = simulation
            .run(|snapshot| {
                frames.push(snapshot.frame);
                Ok(())
            })
            .unwrap();

        assert_eq!(frames, (0..12).collect::<Vec<_>>());
        assert_eq!(last.frame, 11);
        assert_eq!(simulation.round(), 11);

        let summary = simulation.summary(Uuid::nil());
        assert_eq!(summary.frames, 12);
        assert_eq!(summary.rounds, 11);
        assert_eq!(summary.total_wealth, 200);
        assert_eq!(summary.exchanges_accepted + summary.exchanges_rejected, 11 * 20);
    }

    #[test]
    fn test_single_frame_run() {
        let mut simulation = Simulation::new(config(5, 1)).unwrap();
        let last = simulation.run(|_| Ok(())).unwrap();
        assert_eq!(last.frame, 0);
        assert_eq!(simulation.summary(Uuid::nil()).rounds, 0);
    }

    #[test]
    fn test_same_seed_same_frames() {
        let collect = |seed: u64| {
            let mut simulation = Simulation::new(config(seed, 30)).unwrap();
            let mut frames = Vec::new();
            simulation
                .run(|snapshot| {
                    frames.push(snapshot.values.clone());
                    Ok(())
                })
                .unwrap();
            frames
        };

        assert_eq!(collect(77), collect(77));
    }

    #[test]
    fn test_on_frame_error_stops_run() {
        let mut simulation = Simulation::new(config(5, 10)).unwrap();
        let mut seen = 0;
        let result = simulation.run(|snapshot| {
            seen += 1;
            if snapshot.frame == 3 {
                return Err(SimError::Population(PopulationError::Empty));
            }
            Ok(())
        });

        assert!(result.is_err());
        assert_eq!(seen, 4);
        assert_eq!(simulation.round(), 3);
    }
}
