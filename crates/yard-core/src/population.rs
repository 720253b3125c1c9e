//! Agent Population
//!
//! An ordered arena of agents, each holding a non-negative integer wealth.
//! Agents are addressed by index; the population is fixed in size and
//! membership once built.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PopulationError;

/// Unique identifier for an agent, assigned at creation and never reused
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub String);

impl AgentId {
    /// Identifier for the agent created at `index`.
    pub fn from_index(index: usize) -> Self {
        Self(format!("agent_{:04}", index))
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single economic agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub wealth: u64,
}

/// All agents of a run, in creation order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Population {
    agents: Vec<Agent>,
}

impl Population {
    /// Create `count` agents that each start with `wealth`.
    pub fn with_uniform_wealth(count: usize, wealth: u64) -> Self {
        Self::from_wealth(std::iter::repeat(wealth).take(count))
    }

    /// Create one agent per value, in order.
    pub fn from_wealth(values: impl IntoIterator<Item = u64>) -> Self {
        let agents = values
            .into_iter()
            .enumerate()
            .map(|(index, wealth)| Agent {
                id: AgentId::from_index(index),
                wealth,
            })
            .collect();
        Self { agents }
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn agents(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    /// Total wealth across all agents.
    pub fn sum(&self) -> u64 {
        self.agents.iter().map(|a| a.wealth).sum()
    }

    /// Wealth of every agent in population order, copied at call time.
    pub fn values(&self) -> Vec<u64> {
        self.agents.iter().map(|a| a.wealth).collect()
    }

    /// Index of a uniformly random agent. Independent on every call.
    pub fn select_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, PopulationError> {
        if self.agents.is_empty() {
            return Err(PopulationError::Empty);
        }
        Ok(rng.gen_range(0..self.agents.len()))
    }

    pub(crate) fn wealth(&self, index: usize) -> u64 {
        self.agents[index].wealth
    }

    /// Overwrite the wealth of two agents at once. Only the step applies this.
    pub(crate) fn settle(&mut self, a: usize, a_wealth: u64, p: usize, p_wealth: u64) {
        self.agents[a].wealth = a_wealth;
        self.agents[p].wealth = p_wealth;
    }
}
