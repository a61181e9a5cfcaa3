//! The engine's output record.
//!
//! One `ServiceEvent` is emitted per call assignment. The ordered
//! sequence of events is the only thing a run hands to the outside.

use crate::types::{AgentId, CallId, Seconds};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ServiceEvent {
    pub call_id:                 CallId,
    pub arrival_time:            Seconds,
    pub service_start_time:      Seconds,
    pub service_end_time:        Seconds,
    pub waiting_time:            Seconds,
    pub service_duration:        Seconds,
    pub agent_id:                AgentId,
    /// Calls still waiting right after this call left the queue.
    pub queue_length_on_arrival: usize,
}
