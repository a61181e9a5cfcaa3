//! sim-runner: headless runner for the call center staffing study.
//!
//! Usage:
//!   sim-runner
//!   sim-runner --config plan.json --seed 7 --db results.db --out dataset --parallel

use anyhow::Result;
use callcenter_core::{
    config::ScenarioPlan,
    export,
    scenario::{run_plan, run_plan_parallel, ScenarioOutcome},
    store::SimStore,
};
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let parallel = args.iter().any(|a| a == "--parallel");
    let db = flag_value(&args, "--db").unwrap_or(":memory:");
    let out_dir = flag_value(&args, "--out").unwrap_or("dataset");

    let mut plan = match flag_value(&args, "--config") {
        Some(path) => ScenarioPlan::load(path)?,
        None => ScenarioPlan::default(),
    };
    plan.seed = parse_arg(&args, "--seed", plan.seed)?;
    plan.validate()?;

    println!("Call center simulation: sim-runner");
    println!("  horizon:       {}s", plan.simulation_time);
    println!("  arrival rate:  {} calls/s", plan.arrival_rate);
    println!("  mean service:  {}s", plan.mean_service_time);
    println!("  agent counts:  {:?}", plan.agent_counts);
    println!("  seed:          {}", plan.seed);
    println!("  db:            {db}");
    println!("  out:           {out_dir}");

    let outcomes = if parallel {
        run_plan_parallel(&plan)?
    } else {
        run_plan(&plan)?
    };

    let mut store = SimStore::open(db)?;
    store.migrate()?;
    let run_id = format!("run-{}-{}", plan.seed, uuid::Uuid::new_v4());
    let started_at = chrono::Utc::now().to_rfc3339();
    store.insert_run(&run_id, plan.seed, env!("CARGO_PKG_VERSION"), &started_at)?;

    let out = Path::new(out_dir);
    for outcome in &outcomes {
        let agents = outcome.config.num_agents;
        let path = export::write_events(out, agents, &outcome.events)?;
        println!();
        println!("Ran simulation for {agents} agents");
        println!("Saved dataset: {} ({} records)", path.display(), outcome.events.len());

        store.insert_service_events(&run_id, agents, &outcome.events)?;
        store.insert_summary(&run_id, &outcome.summary)?;
    }

    let summaries: Vec<_> = outcomes.iter().map(|o| o.summary.clone()).collect();
    let summary_path = export::write_summaries(out, &summaries)?;
    log::info!("run {run_id}: wrote summary to {}", summary_path.display());

    print_summary(&outcomes);
    Ok(())
}

fn print_summary(outcomes: &[ScenarioOutcome]) {
    println!();
    println!("PERFORMANCE SUMMARY:");
    println!(
        "{:>6} {:>24} {:>20} {:>23} {:>21}",
        "Agents",
        "Average_Waiting_Time (s)",
        "Average_Queue_Length",
        "Throughput (calls/hour)",
        "Agent_Utilization (%)"
    );
    for o in outcomes {
        let s = &o.summary;
        println!(
            "{:>6} {:>24.2} {:>20.2} {:>23.2} {:>21.2}",
            s.agents, s.avg_waiting_time, s.avg_queue_length, s.throughput_per_hour, s.utilization_pct
        );
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

/// Parse `flag`'s value, or `default` when the flag is absent.
/// A value that does not parse is an error, not a silent default.
fn parse_arg<T>(args: &[String], flag: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match flag_value(args, flag) {
        Some(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid value for {flag}: {raw:?} ({e})")),
        None => Ok(default),
    }
}
