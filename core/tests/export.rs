//! CSV dataset export.

use callcenter_core::{
    config::RunConfig,
    engine,
    export::{self, SUMMARY_FILE},
    metrics::summarize,
};

#[test]
fn event_dataset_has_header_and_one_row_per_event() {
    let dir = tempfile::tempdir().unwrap();
    let config = RunConfig::new(600, 0.2, 30.0, 3).unwrap();
    let events = engine::run_seeded(&config, 42).unwrap();

    let path = export::write_events(dir.path(), 3, &events).unwrap();
    assert_eq!(path.file_name().unwrap(), "simulation_results_3_agents.csv");

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec![
            "Call_ID",
            "Arrival_Time",
            "Service_Start_Time",
            "Service_End_Time",
            "Waiting_Time",
            "Service_Duration",
            "Agent_ID",
            "Queue_Length_On_Arrival",
        ]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), events.len());
    let first = &rows[0];
    assert_eq!(first[0].parse::<u64>().unwrap(), events[0].call_id);
    let duration: f64 = first[5].parse().unwrap();
    assert!((duration - events[0].service_duration).abs() <= 0.005 + 1e-9);
}

#[test]
fn summary_dataset_lists_every_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("dataset");
    let summaries: Vec<_> = [3, 5]
        .into_iter()
        .map(|agents| {
            let config = RunConfig::new(600, 0.2, 30.0, agents).unwrap();
            summarize(&engine::run_seeded(&config, 8).unwrap(), &config)
        })
        .collect();

    let path = export::write_summaries(&out, &summaries).unwrap();
    assert_eq!(path, out.join(SUMMARY_FILE));

    let mut reader = csv::Reader::from_path(&path).unwrap();
    assert_eq!(&reader.headers().unwrap()[4], "Agent_Utilization (%)");
    let agents: Vec<u32> = reader
        .records()
        .map(|r| r.unwrap()[0].parse().unwrap())
        .collect();
    assert_eq!(agents, vec![3, 5]);
}
