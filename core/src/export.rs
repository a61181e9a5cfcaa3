//! CSV datasets for downstream analysis and charting.
//!
//! Writes into the configured output directory:
//! - `simulation_results_{n}_agents.csv`: raw events of one scenario
//! - `performance_summary.csv`:           one row per scenario

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::Writer;

use crate::{
    error::SimResult,
    event::ServiceEvent,
    metrics::{round2, ScenarioSummary},
    types::AgentId,
};

pub const SUMMARY_FILE: &str = "performance_summary.csv";

const EVENT_HEADER: [&str; 8] = [
    "Call_ID",
    "Arrival_Time",
    "Service_Start_Time",
    "Service_End_Time",
    "Waiting_Time",
    "Service_Duration",
    "Agent_ID",
    "Queue_Length_On_Arrival",
];

const SUMMARY_HEADER: [&str; 5] = [
    "Agents",
    "Average_Waiting_Time (s)",
    "Average_Queue_Length",
    "Throughput (calls/hour)",
    "Agent_Utilization (%)",
];

pub fn events_file_name(agents: AgentId) -> String {
    format!("simulation_results_{agents}_agents.csv")
}

fn create(dir: &Path, name: &str) -> SimResult<Writer<File>> {
    std::fs::create_dir_all(dir)?;
    Ok(Writer::from_path(dir.join(name))?)
}

/// Write one scenario's events. Returns the file path.
pub fn write_events(dir: &Path, agents: AgentId, events: &[ServiceEvent]) -> SimResult<PathBuf> {
    let name = events_file_name(agents);
    let mut writer = create(dir, &name)?;
    writer.write_record(EVENT_HEADER)?;
    for e in events {
        writer.write_record(&[
            e.call_id.to_string(),
            round2(e.arrival_time).to_string(),
            round2(e.service_start_time).to_string(),
            round2(e.service_end_time).to_string(),
            round2(e.waiting_time).to_string(),
            round2(e.service_duration).to_string(),
            e.agent_id.to_string(),
            e.queue_length_on_arrival.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(dir.join(name))
}

/// Write the cross-scenario summary table. Returns the file path.
pub fn write_summaries(dir: &Path, summaries: &[ScenarioSummary]) -> SimResult<PathBuf> {
    let mut writer = create(dir, SUMMARY_FILE)?;
    writer.write_record(SUMMARY_HEADER)?;
    for s in summaries {
        writer.write_record(&[
            s.agents.to_string(),
            s.avg_waiting_time.to_string(),
            s.avg_queue_length.to_string(),
            s.throughput_per_hour.to_string(),
            s.utilization_pct.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(dir.join(SUMMARY_FILE))
}
