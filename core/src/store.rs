//! SQLite persistence layer.
//!
//! RULE: Only store.rs talks to the database.
//! The runner calls store methods; it never executes SQL directly.

use rusqlite::{params, Connection};
use crate::{
    error::SimResult,
    event::ServiceEvent,
    metrics::ScenarioSummary,
    types::AgentId,
};

pub struct SimStore {
    conn: Connection,
}

impl SimStore {
    /// Open (or create) the simulation database at `path`.
    pub fn open(path: &str) -> SimResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode only matters for real files; :memory: ignores it.
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> SimResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> SimResult<()> {
        self.conn.execute_batch(include_str!("../../migrations/001_foundation.sql"))?;
        Ok(())
    }

    // ── Run ────────────────────────────────────────────────────

    pub fn insert_run(&self, run_id: &str, seed: u64, version: &str, started_at: &str) -> SimResult<()> {
        self.conn.execute(
            "INSERT INTO run (run_id, seed, version, started_at) VALUES (?1, ?2, ?3, ?4)",
            params![run_id, seed as i64, version, started_at],
        )?;
        Ok(())
    }

    pub fn run_seed(&self, run_id: &str) -> SimResult<u64> {
        let seed: i64 = self.conn.query_row(
            "SELECT seed FROM run WHERE run_id = ?1",
            params![run_id],
            |row| row.get(0),
        )?;
        Ok(seed as u64)
    }

    // ── Service events ─────────────────────────────────────────

    /// Persist one scenario's events in a single transaction, keeping order.
    pub fn insert_service_events(
        &mut self,
        run_id: &str,
        agents: AgentId,
        events: &[ServiceEvent],
    ) -> SimResult<()> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO service_event (
                    run_id, agents, seq, call_id, arrival_time, service_start_time,
                    service_end_time, waiting_time, service_duration, agent_id,
                    queue_length_on_arrival
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            )?;
            for (seq, e) in events.iter().enumerate() {
                stmt.execute(params![
                    run_id,
                    agents,
                    seq as i64,
                    e.call_id as i64,
                    e.arrival_time,
                    e.service_start_time,
                    e.service_end_time,
                    e.waiting_time,
                    e.service_duration,
                    e.agent_id,
                    e.queue_length_on_arrival as i64,
                ])?;
            }
        }
        tx.commit()?;
        log::debug!("stored {} events for run={run_id} agents={agents}", events.len());
        Ok(())
    }

    pub fn service_events(&self, run_id: &str, agents: AgentId) -> SimResult<Vec<ServiceEvent>> {
        let mut stmt = self.conn.prepare(
            "SELECT call_id, arrival_time, service_start_time, service_end_time,
                    waiting_time, service_duration, agent_id, queue_length_on_arrival
             FROM service_event WHERE run_id = ?1 AND agents = ?2
             ORDER BY seq ASC",
        )?;
        let events = stmt.query_map(params![run_id, agents], |row| {
            Ok(ServiceEvent {
                call_id:                 row.get::<_, i64>(0)? as u64,
                arrival_time:            row.get(1)?,
                service_start_time:      row.get(2)?,
                service_end_time:        row.get(3)?,
                waiting_time:            row.get(4)?,
                service_duration:        row.get(5)?,
                agent_id:                row.get(6)?,
                queue_length_on_arrival: row.get::<_, i64>(7)? as usize,
            })
        })?.collect::<Result<Vec<_>, _>>()?;
        Ok(events)
    }

    // ── Summaries ──────────────────────────────────────────────

    pub fn insert_summary(&self, run_id: &str, summary: &ScenarioSummary) -> SimResult<()> {
        self.conn.execute(
            "INSERT INTO scenario_summary (
                run_id, agents, total_calls, avg_waiting_time, avg_queue_length,
                throughput_per_hour, utilization_pct
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                run_id,
                summary.agents,
                summary.total_calls as i64,
                summary.avg_waiting_time,
                summary.avg_queue_length,
                summary.throughput_per_hour,
                summary.utilization_pct,
            ],
        )?;
        Ok(())
    }

    /// All summaries for a run, ordered by agent count.
    pub fn summaries(&self, run_id: &str) -> SimResult<Vec<ScenarioSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT agents, total_calls, avg_waiting_time, avg_queue_length,
                    throughput_per_hour, utilization_pct
             FROM scenario_summary WHERE run_id = ?1
             ORDER BY agents ASC",
        )?;
        let rows = stmt.query_map(params![run_id], |row| {
            Ok(ScenarioSummary {
                agents:              row.get(0)?,
                total_calls:         row.get::<_, i64>(1)? as usize,
                avg_waiting_time:    row.get(2)?,
                avg_queue_length:    row.get(3)?,
                throughput_per_hour: row.get(4)?,
                utilization_pct:     row.get(5)?,
            })
        })?.collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}
