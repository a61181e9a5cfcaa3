//! Simulation clock: fixed one-second steps from 0 to the horizon.

use crate::types::{Seconds, Tick};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimClock {
    pub current_tick: Tick,
    pub horizon:      Tick,
}

impl SimClock {
    pub fn new(horizon: Tick) -> Self {
        Self { current_tick: 0, horizon }
    }

    /// The current instant in seconds.
    pub fn now(&self) -> Seconds {
        self.current_tick as Seconds
    }

    /// Advance one tick. Returns the new tick number.
    pub fn advance(&mut self) -> Tick {
        self.current_tick += 1;
        self.current_tick
    }

    pub fn is_finished(&self) -> bool {
        self.current_tick >= self.horizon
    }
}
