//! FIFO buffer of waiting calls. Unbounded: overload grows the queue,
//! it never rejects calls.

use crate::types::{CallId, Seconds};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Call {
    pub id:           CallId,
    pub arrival_time: Seconds,
}

#[derive(Debug, Default)]
pub struct CallQueue {
    waiting: VecDeque<Call>,
}

impl CallQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, call: Call) {
        self.waiting.push_back(call);
    }

    /// Remove and return the head, or `None` when nobody is waiting.
    pub fn dequeue_if_nonempty(&mut self) -> Option<Call> {
        self.waiting.pop_front()
    }

    pub fn len(&self) -> usize {
        self.waiting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waiting.is_empty()
    }
}
