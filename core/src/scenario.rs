//! Multi-scenario driver: one independent run per agent count.
//!
//! Every scenario gets its own `SeededDraws` built from the plan seed, so
//! all scenarios see the same arrival stream and the parallel driver
//! returns exactly what the sequential one does.

use crate::{
    config::{RunConfig, ScenarioPlan},
    engine,
    error::SimResult,
    event::ServiceEvent,
    metrics::{summarize, ScenarioSummary},
};
use rayon::prelude::*;

#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub config:  RunConfig,
    pub events:  Vec<ServiceEvent>,
    pub summary: ScenarioSummary,
}

fn run_scenario(config: RunConfig, seed: u64) -> SimResult<ScenarioOutcome> {
    log::info!("scenario: running {} agents", config.num_agents);
    let events = engine::run_seeded(&config, seed)?;
    let summary = summarize(&events, &config);
    Ok(ScenarioOutcome { config, events, summary })
}

/// Run every scenario in plan order on the current thread.
pub fn run_plan(plan: &ScenarioPlan) -> SimResult<Vec<ScenarioOutcome>> {
    plan.validate()?;
    plan.run_configs()
        .into_iter()
        .map(|config| run_scenario(config, plan.seed))
        .collect()
}

/// Run every scenario on the rayon pool. Outcomes keep plan order.
pub fn run_plan_parallel(plan: &ScenarioPlan) -> SimResult<Vec<ScenarioOutcome>> {
    plan.validate()?;
    plan.run_configs()
        .into_par_iter()
        .map(|config| run_scenario(config, plan.seed))
        .collect()
}
