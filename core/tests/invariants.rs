//! Structural invariants checked over seeded runs.

use callcenter_core::{config::RunConfig, engine, rng::SeededDraws};
use std::collections::{HashMap, HashSet};

const SEEDS: [u64; 4] = [1, 42, 2024, 0xFEED];

fn configs() -> Vec<RunConfig> {
    vec![
        RunConfig::new(3600, 0.2, 30.0, 3).unwrap(),
        RunConfig::new(3600, 0.2, 30.0, 9).unwrap(),
        RunConfig::new(600, 1.5, 4.0, 2).unwrap(),
        RunConfig::new(900, 0.05, 0.3, 1).unwrap(),
    ]
}

#[test]
fn every_event_has_consistent_times() {
    for config in configs() {
        for seed in SEEDS {
            for e in engine::run_seeded(&config, seed).unwrap() {
                assert!(e.service_start_time >= e.arrival_time, "{e:?}");
                assert!(e.service_end_time >= e.service_start_time, "{e:?}");
                assert!(e.waiting_time >= 0.0, "{e:?}");
                assert_eq!(e.waiting_time, e.service_start_time - e.arrival_time, "{e:?}");
                assert!(
                    (e.service_end_time - e.service_start_time - e.service_duration).abs() < 1e-9,
                    "{e:?}"
                );
                assert!(e.agent_id >= 1 && e.agent_id <= config.num_agents, "{e:?}");
                assert!(e.service_start_time < config.simulation_time as f64, "{e:?}");
            }
        }
    }
}

#[test]
fn call_ids_are_unique_and_fifo_per_agent() {
    for config in configs() {
        for seed in SEEDS {
            let events = engine::run_seeded(&config, seed).unwrap();

            let ids: HashSet<u64> = events.iter().map(|e| e.call_id).collect();
            assert_eq!(ids.len(), events.len(), "duplicate call ids for seed {seed}");

            let mut last_seen: HashMap<u32, (f64, u64)> = HashMap::new();
            for e in &events {
                if let Some(&(arrival, id)) = last_seen.get(&e.agent_id) {
                    assert!(e.arrival_time >= arrival, "agent {} served out of order", e.agent_id);
                    assert!(e.call_id > id, "agent {} served call ids out of order", e.agent_id);
                }
                last_seen.insert(e.agent_id, (e.arrival_time, e.call_id));
            }
        }
    }
}

#[test]
fn calls_start_service_in_arrival_order() {
    for config in configs() {
        let events = engine::run_seeded(&config, 42).unwrap();
        for pair in events.windows(2) {
            assert!(pair[1].call_id > pair[0].call_id, "queue is not FIFO: {pair:?}");
            assert!(pair[1].service_start_time >= pair[0].service_start_time);
        }
    }
}

#[test]
fn no_free_agent_is_skipped_while_calls_wait() {
    for config in configs() {
        for seed in SEEDS {
            let mut draws = SeededDraws::new(seed);
            let mut engine = engine::SimEngine::new(config, &mut draws).unwrap();

            while engine.current_tick() < config.simulation_time {
                let now = engine.current_tick() as f64;
                let free_before = engine.pool().free_count(now);
                let waiting_before = engine.queue_len() as u64;
                let generated_before = engine.calls_generated();

                let assigned = engine.tick().len() as u64;

                let arrived = engine.calls_generated() - generated_before;
                assert!(arrived <= 1, "more than one arrival in tick {now}");
                let expected = (free_before as u64).min(waiting_before + arrived);
                assert_eq!(assigned, expected, "tick {now}: free={free_before} waiting={waiting_before}");

                if engine.queue_len() > 0 {
                    assert_eq!(engine.pool().free_count(now), 0, "free agent idle at {now} with calls waiting");
                }
            }
        }
    }
}

#[test]
fn every_generated_call_is_served_or_still_waiting() {
    for config in configs() {
        let mut draws = SeededDraws::new(11);
        let mut engine = engine::SimEngine::new(config, &mut draws).unwrap();
        while engine.current_tick() < config.simulation_time {
            engine.tick();
        }
        assert_eq!(
            engine.calls_generated(),
            engine.events().len() as u64 + engine.queue_len() as u64
        );
    }
}

#[test]
fn run_executes_exactly_the_horizon() {
    let config = RunConfig::new(120, 0.5, 10.0, 2).unwrap();
    let mut draws = SeededDraws::new(5);
    let mut engine = engine::SimEngine::new(config, &mut draws).unwrap();
    let mut ticks = 0;
    while engine.current_tick() < config.simulation_time {
        engine.tick();
        ticks += 1;
    }
    assert_eq!(ticks, 120);
    assert!(engine.clock.is_finished());
}
