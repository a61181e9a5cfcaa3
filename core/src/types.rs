//! Shared primitive types used across the entire simulation.

/// A simulation tick. One tick = one simulated second.
pub type Tick = u64;

/// A continuous instant or duration, in simulated seconds.
pub type Seconds = f64;

/// Per-run call identifier. Starts at 1.
pub type CallId = u64;

/// 1-based agent identity, stable for the run.
pub type AgentId = u32;
