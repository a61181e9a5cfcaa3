//! Agent pool and dispatcher.
//!
//! Agents are scanned once per tick in ascending id order. Each free agent
//! (free_at <= now) takes the queue head. An agent assigned this tick is
//! not rescanned, so it serves at most one call per tick however short
//! the drawn duration.

use crate::{
    event::ServiceEvent,
    queue::CallQueue,
    rng::DrawSource,
    types::{AgentId, Seconds},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Agent {
    pub id:      AgentId,
    pub free_at: Seconds,
}

impl Agent {
    pub fn is_free(&self, now: Seconds) -> bool {
        self.free_at <= now
    }
}

#[derive(Debug)]
pub struct AgentPool {
    agents: Vec<Agent>,
}

impl AgentPool {
    /// Agents 1..=num_agents, all free at time 0.
    pub fn new(num_agents: AgentId) -> Self {
        let agents = (1..=num_agents).map(|id| Agent { id, free_at: 0.0 }).collect();
        Self { agents }
    }

    pub fn free_count(&self, now: Seconds) -> usize {
        self.agents.iter().filter(|a| a.is_free(now)).count()
    }

    /// One dispatch pass at `now`. Returns the events in assignment order.
    pub fn dispatch(
        &mut self,
        now: Seconds,
        queue: &mut CallQueue,
        mean_service_time: Seconds,
        draws: &mut dyn DrawSource,
    ) -> Vec<ServiceEvent> {
        let mut assigned = Vec::new();
        for agent in &mut self.agents {
            if !agent.is_free(now) {
                continue;
            }
            let Some(call) = queue.dequeue_if_nonempty() else {
                break;
            };
            let service_duration = draws.service_duration(mean_service_time);
            let service_end = now + service_duration;
            agent.free_at = service_end;

            log::debug!(
                "t={now} dispatch: call={} agent={} wait={:.2} service={:.2} queue={}",
                call.id,
                agent.id,
                now - call.arrival_time,
                service_duration,
                queue.len()
            );

            assigned.push(ServiceEvent {
                call_id:                 call.id,
                arrival_time:            call.arrival_time,
                service_start_time:      now,
                service_end_time:        service_end,
                waiting_time:            now - call.arrival_time,
                service_duration,
                agent_id:                agent.id,
                queue_length_on_arrival: queue.len(),
            });
        }
        assigned
    }
}
