//! Error types for the `yard-core` crate.

use std::path::PathBuf;

/// Population preconditions violated before a round could start.
///
/// These are fatal to the run: no partial round is ever applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PopulationError {
    /// Selection was requested from a population with no agents.
    #[error("population is empty")]
    Empty,

    /// A round needs at least two agents so every initiator has a partner.
    #[error("population of {size} cannot trade; at least 2 agents are required")]
    Insufficient {
        /// Actual population size.
        size: usize,
    },

    /// Partner redraws ran out without finding an agent other than the initiator.
    #[error("no partner distinct from agent {initiator} after {attempts} draws")]
    PartnerSelectionExhausted {
        /// Index of the initiating agent.
        initiator: usize,
        /// Draws made before giving up.
        attempts: usize,
    },
}

/// Configuration loading and validation failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::SimConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is outside its allowed range.
    #[error("invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Failures writing run artifacts.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("histogram render failed: {0}")]
    Render(#[from] yard_plot::PlotError),
}

/// Any failure of a simulation run.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error(transparent)]
    Population(#[from] PopulationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Output(#[from] OutputError),
}
