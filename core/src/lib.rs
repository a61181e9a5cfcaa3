//! Call center capacity-planning simulation.
//!
//! A fixed-step queueing simulation: calls arrive with exponential gaps,
//! wait in a FIFO queue and are served by a fixed pool of agents for an
//! exponential duration. Each run yields an ordered sequence of
//! `ServiceEvent`s; `metrics`, `store` and `export` consume that sequence.

pub mod agent;
pub mod arrival;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod export;
pub mod metrics;
pub mod queue;
pub mod rng;
pub mod scenario;
pub mod store;
pub mod types;
