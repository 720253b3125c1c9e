//! Yard-Sale Wealth Simulation
//!
//! Runs the yard-sale exchange model and writes a histogram per frame, a
//! JSON-lines snapshot log and a run summary.
//!
//! Every parameter can come from a flag, an `EPHY_*` environment variable or
//! `yard_sale.toml`, in that order of precedence.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use yard_core::config::{ConfigOverrides, SimConfig, DEFAULT_CONFIG_PATH};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "yard_sale")]
#[command(about = "Yard-sale wealth redistribution simulation")]
struct Args {
    /// Random seed for reproducibility (0 derives one from the clock)
    #[arg(long, env = "EPHY_SEED")]
    seed: Option<u64>,

    /// Number of agents
    #[arg(long, env = "EPHY_AGENTS")]
    agents: Option<usize>,

    /// Starting wealth of every agent
    #[arg(long, env = "EPHY_MONEY")]
    money: Option<u64>,

    /// Frames to produce, including the initial state
    #[arg(long, env = "EPHY_STEPS")]
    steps: Option<u64>,

    /// Directory for histograms, snapshots and the summary
    #[arg(long, env = "EPHY_OUTPUT")]
    output_dir: Option<PathBuf>,

    /// Histogram bin count
    #[arg(long, env = "EPHY_BINS")]
    bins: Option<usize>,

    /// Skip SVG histogram rendering
    #[arg(long)]
    no_render: bool,

    /// TOML config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            seed: self.seed,
            agents: self.agents,
            money: self.money,
            steps: self.steps,
            output_dir: self.output_dir.clone(),
            bins: self.bins,
            no_render: self.no_render,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let args = Args::parse();

    let config = SimConfig::load_or_default(&args.config)?.with_overrides(args.overrides());
    info!(
        seed = config.seed,
        agents = config.agents,
        money = config.money,
        steps = config.steps,
        bins = config.bins,
        output_dir = %config.output_dir.display(),
        "configuration loaded"
    );

    let summary = yard_core::run_to_dir(config)?;

    println!(
        "Ran {} rounds with seed {} ({} of {} exchanges applied, final gini {:.3}).",
        summary.rounds,
        summary.config.seed,
        summary.exchanges_accepted,
        summary.exchanges_accepted + summary.exchanges_rejected,
        summary.final_stats.gini
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_overrides_env() {
        std::env::set_var("EPHY_AGENTS", "30");

        let args = Args::try_parse_from(["yard_sale", "--agents", "40"]).unwrap();
        assert_eq!(args.agents, Some(40));
        assert_eq!(args.overrides().agents, Some(40));

        let args = Args::try_parse_from(["yard_sale"]).unwrap();
        assert_eq!(args.agents, Some(30));

        std::env::remove_var("EPHY_AGENTS");
    }

    #[test]
    fn test_seed_and_no_render_flags() {
        let args = Args::try_parse_from(["yard_sale", "--no-render", "--seed", "5"]).unwrap();
        let config = SimConfig::default().with_overrides(args.overrides());
        assert_eq!(config.seed, 5);
        assert!(!config.render);
        assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_PATH));
    }
}
