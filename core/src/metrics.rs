//! Per-scenario performance summary over a run's service events.

use crate::{config::RunConfig, event::ServiceEvent, types::AgentId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioSummary {
    pub agents:              AgentId,
    pub total_calls:         usize,
    /// Seconds.
    pub avg_waiting_time:    f64,
    pub avg_queue_length:    f64,
    /// Calls served per simulated hour.
    pub throughput_per_hour: f64,
    /// Busy agent-seconds over available agent-seconds, in percent.
    pub utilization_pct:     f64,
}

/// Summarize one run. Reported values are rounded to 2 decimals.
/// A run with no events reports zero means rather than NaN.
pub fn summarize(events: &[ServiceEvent], config: &RunConfig) -> ScenarioSummary {
    let total_calls = events.len();
    let (avg_waiting_time, avg_queue_length) = if total_calls == 0 {
        (0.0, 0.0)
    } else {
        let n = total_calls as f64;
        let wait: f64 = events.iter().map(|e| e.waiting_time).sum();
        let queue: usize = events.iter().map(|e| e.queue_length_on_arrival).sum();
        (wait / n, queue as f64 / n)
    };

    let busy: f64 = events.iter().map(|e| e.service_duration).sum();
    let available = config.num_agents as f64 * config.simulation_time as f64;

    ScenarioSummary {
        agents:              config.num_agents,
        total_calls,
        avg_waiting_time:    round2(avg_waiting_time),
        avg_queue_length:    round2(avg_queue_length),
        throughput_per_hour: round2(total_calls as f64 / config.hours()),
        utilization_pct:     round2(busy / available * 100.0),
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
