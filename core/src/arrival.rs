//! Arrival generator.
//!
//! Keeps a single `next_arrival` instant. When a tick reaches it, one call
//! is admitted stamped with the tick instant (not the exact arrival
//! instant) and the next gap is drawn. At most one call is admitted per
//! tick, even if several gaps would have elapsed inside it; the backlog of
//! theoretical arrivals is worked off one per tick afterwards.

use crate::{
    queue::Call,
    rng::DrawSource,
    types::{CallId, Seconds},
};

#[derive(Debug)]
pub struct ArrivalGenerator {
    arrival_rate: f64,
    next_arrival: Seconds,
    last_call_id: CallId,
}

impl ArrivalGenerator {
    /// Draws the first arrival instant.
    pub fn new(arrival_rate: f64, draws: &mut dyn DrawSource) -> Self {
        Self {
            arrival_rate,
            next_arrival: draws.inter_arrival_gap(arrival_rate),
            last_call_id: 0,
        }
    }

    /// Calls created so far.
    pub fn generated(&self) -> u64 {
        self.last_call_id
    }

    /// Admit at most one call at `now`.
    pub fn poll(&mut self, now: Seconds, draws: &mut dyn DrawSource) -> Option<Call> {
        if self.next_arrival > now {
            return None;
        }
        self.last_call_id += 1;
        self.next_arrival += draws.inter_arrival_gap(self.arrival_rate);
        Some(Call { id: self.last_call_id, arrival_time: now })
    }
}
