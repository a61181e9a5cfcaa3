//! Run and scenario configuration.
//!
//! A `RunConfig` describes one engine run. A `ScenarioPlan` describes the
//! staffing study: the shared traffic parameters plus the list of agent
//! counts to try. Both are validated before anything is simulated.

use crate::{
    error::{SimError, SimResult},
    types::{AgentId, Seconds, Tick},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RunConfig {
    /// Horizon in seconds. The run executes exactly this many ticks.
    pub simulation_time:   Tick,
    /// Mean arrivals per second.
    pub arrival_rate:      f64,
    /// Mean service duration in seconds.
    pub mean_service_time: Seconds,
    pub num_agents:        AgentId,
}

impl RunConfig {
    /// Build and validate in one step.
    pub fn new(
        simulation_time: Tick,
        arrival_rate: f64,
        mean_service_time: Seconds,
        num_agents: AgentId,
    ) -> SimResult<Self> {
        let config = Self { simulation_time, arrival_rate, mean_service_time, num_agents };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.simulation_time == 0 {
            return Err(SimError::invalid("simulation_time", "must be a positive number of seconds"));
        }
        check_positive("arrival_rate", self.arrival_rate)?;
        check_positive("mean_service_time", self.mean_service_time)?;
        if self.num_agents == 0 {
            return Err(SimError::invalid("num_agents", "must be positive: at least one agent is required"));
        }
        Ok(())
    }

    /// Simulated hours covered by the run.
    pub fn hours(&self) -> f64 {
        self.simulation_time as f64 / 3600.0
    }
}

/// Zero makes the exponential draw undefined; NaN and infinity are no better.
fn check_positive(field: &'static str, value: f64) -> SimResult<()> {
    if !value.is_finite() {
        return Err(SimError::invalid(field, format!("must be finite, got {value}")));
    }
    if value <= 0.0 {
        return Err(SimError::invalid(field, format!("must be positive, got {value}")));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScenarioPlan {
    pub simulation_time:   Tick,
    pub arrival_rate:      f64,
    pub mean_service_time: Seconds,
    pub agent_counts:      Vec<AgentId>,
    /// Master seed. Every scenario gets a fresh source built from it.
    pub seed:              u64,
}

impl Default for ScenarioPlan {
    fn default() -> Self {
        Self {
            simulation_time:   3600,
            arrival_rate:      0.2,
            mean_service_time: 30.0,
            agent_counts:      vec![3, 5, 7, 9],
            seed:              42,
        }
    }
}

impl ScenarioPlan {
    /// Load a plan from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let plan: ScenarioPlan = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        Ok(plan)
    }

    pub fn run_config(&self, num_agents: AgentId) -> RunConfig {
        RunConfig {
            simulation_time:   self.simulation_time,
            arrival_rate:      self.arrival_rate,
            mean_service_time: self.mean_service_time,
            num_agents,
        }
    }

    /// All per-scenario configs, in plan order.
    pub fn run_configs(&self) -> Vec<RunConfig> {
        self.agent_counts.iter().map(|&n| self.run_config(n)).collect()
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.agent_counts.is_empty() {
            return Err(SimError::invalid("agent_counts", "must list at least one scenario"));
        }
        let mut seen = HashSet::new();
        for &n in &self.agent_counts {
            if !seen.insert(n) {
                return Err(SimError::invalid("agent_counts", format!("lists {n} agents more than once")));
            }
        }
        for config in self.run_configs() {
            config.validate()?;
        }
        Ok(())
    }
}
