//! Configuration System
//!
//! Run parameters, layered as: built-in defaults, then an optional TOML file,
//! then environment variables and CLI flags (applied by the binary through
//! [`ConfigOverrides`]).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};
use yard_events::ConfigSnapshot;

use crate::error::ConfigError;

/// Default config file path
pub const DEFAULT_CONFIG_PATH: &str = "yard_sale.toml";

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed; 0 means derive one from the clock
    pub seed: u64,
    /// Number of agents
    pub agents: usize,
    /// Starting wealth of every agent
    pub money: u64,
    /// Frames to produce, counting the initial state
    pub steps: u64,
    /// Directory for histograms, snapshots and the summary
    pub output_dir: PathBuf,
    /// Histogram bin count
    pub bins: usize,
    /// Write an SVG histogram per frame
    pub render: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            agents: 100,
            money: 10,
            steps: 100,
            output_dir: PathBuf::from("output"),
            bins: 100,
            render: true,
        }
    }
}

/// Values supplied by the environment or command line, each optional
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub seed: Option<u64>,
    pub agents: Option<usize>,
    pub money: Option<u64>,
    pub steps: Option<u64>,
    pub output_dir: Option<PathBuf>,
    pub bins: Option<usize>,
    pub no_render: bool,
}

impl SimConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from `path` if it exists, otherwise use defaults.
    ///
    /// A file that exists but fails to load is an error, not a silent fallback.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            info!(path = %path.display(), "loading config file");
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment/CLI values on top of this config.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(seed) = overrides.seed {
            self.seed = seed;
        }
        if let Some(agents) = overrides.agents {
            self.agents = agents;
        }
        if let Some(money) = overrides.money {
            self.money = money;
        }
        if let Some(steps) = overrides.steps {
            self.steps = steps;
        }
        if let Some(output_dir) = overrides.output_dir {
            self.output_dir = output_dir;
        }
        if let Some(bins) = overrides.bins {
            self.bins = bins;
        }
        if overrides.no_render {
            self.render = false;
        }
        self
    }

    /// Check every value is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.agents < 2 {
            return Err(ConfigError::Invalid {
                field: "agents",
                reason: format!("need at least 2 agents to trade, got {}", self.agents),
            });
        }
        if self.steps < 1 {
            return Err(ConfigError::Invalid {
                field: "steps",
                reason: "need at least 1 frame".to_string(),
            });
        }
        if self.bins < 1 {
            return Err(ConfigError::Invalid {
                field: "bins",
                reason: "histogram needs at least 1 bin".to_string(),
            });
        }
        let total = self.money.checked_mul(self.agents as u64);
        if total.map_or(true, |total| total > i64::MAX as u64) {
            return Err(ConfigError::Invalid {
                field: "money",
                reason: format!(
                    "{} agents x {} exceeds the maximum total wealth {}",
                    self.agents,
                    self.money,
                    i64::MAX
                ),
            });
        }
        Ok(())
    }

    /// Replace a zero seed with one derived from the current time.
    pub fn resolve_seed(mut self) -> Self {
        if self.seed == 0 {
            self.seed = clock_seed();
            warn!(seed = self.seed, "no seed configured, derived one from the clock");
        }
        self
    }

    /// The parts of the config recorded in run output.
    pub fn snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            seed: self.seed,
            agents: self.agents,
            money: self.money,
            steps: self.steps,
            bins: self.bins,
        }
    }
}

/// Nanoseconds since the epoch, never zero.
fn clock_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    nanos.max(1)
}
