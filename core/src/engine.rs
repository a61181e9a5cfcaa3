//! The simulation engine.
//!
//! EXECUTION ORDER per tick (fixed, never reordered):
//!   1. Arrival generator: may admit one call into the queue.
//!   2. Dispatcher:        free agents, lowest id first, take calls.
//!   3. Clock:             advance one second.
//!
//! Arrivals run before dispatch, so a call admitted at `t` can start
//! service at `t`.
//!
//! RULES:
//!   - A run owns all of its state; nothing survives between runs.
//!   - All randomness flows through the `DrawSource` handed in by the caller.
//!   - Configuration is validated before the first tick; after that a run
//!     cannot fail.

use crate::{
    agent::AgentPool,
    arrival::ArrivalGenerator,
    clock::SimClock,
    config::RunConfig,
    error::SimResult,
    event::ServiceEvent,
    queue::CallQueue,
    rng::{DrawSource, SeededDraws},
    types::Tick,
};

pub struct SimEngine<'a> {
    pub config: RunConfig,
    pub clock:  SimClock,
    arrivals:   ArrivalGenerator,
    queue:      CallQueue,
    pool:       AgentPool,
    draws:      &'a mut dyn DrawSource,
    events:     Vec<ServiceEvent>,
}

impl<'a> SimEngine<'a> {
    /// Validate the config and set up a fresh run. Draws the first
    /// arrival instant.
    pub fn new(config: RunConfig, draws: &'a mut dyn DrawSource) -> SimResult<Self> {
        config.validate()?;
        let arrivals = ArrivalGenerator::new(config.arrival_rate, draws);
        Ok(Self {
            clock: SimClock::new(config.simulation_time),
            arrivals,
            queue: CallQueue::new(),
            pool: AgentPool::new(config.num_agents),
            draws,
            events: Vec::new(),
            config,
        })
    }

    /// Run one tick. Returns the events produced during it.
    /// Does nothing once the horizon is reached.
    pub fn tick(&mut self) -> &[ServiceEvent] {
        if self.clock.is_finished() {
            return &[];
        }
        let now = self.clock.now();
        let first_new = self.events.len();

        if let Some(call) = self.arrivals.poll(now, self.draws) {
            self.queue.enqueue(call);
        }

        let assigned = self.pool.dispatch(
            now,
            &mut self.queue,
            self.config.mean_service_time,
            self.draws,
        );
        self.events.extend(assigned);

        self.clock.advance();
        &self.events[first_new..]
    }

    /// Run the remaining ticks and return every event of the run.
    pub fn run_to_end(mut self) -> Vec<ServiceEvent> {
        log::info!(
            "run start: horizon={}s rate={} mean_service={}s agents={}",
            self.config.simulation_time,
            self.config.arrival_rate,
            self.config.mean_service_time,
            self.config.num_agents
        );
        while !self.clock.is_finished() {
            self.tick();
        }
        log::info!(
            "run end: agents={} calls={} served={} still_waiting={}",
            self.config.num_agents,
            self.arrivals.generated(),
            self.events.len(),
            self.queue.len()
        );
        if self.events.is_empty() {
            log::warn!("run with {} agents produced no service events", self.config.num_agents);
        }
        self.events
    }

    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn pool(&self) -> &AgentPool {
        &self.pool
    }

    pub fn calls_generated(&self) -> u64 {
        self.arrivals.generated()
    }

    pub fn events(&self) -> &[ServiceEvent] {
        &self.events
    }
}

/// Run one configuration to its horizon with the given draw source.
pub fn run(config: &RunConfig, draws: &mut dyn DrawSource) -> SimResult<Vec<ServiceEvent>> {
    Ok(SimEngine::new(*config, draws)?.run_to_end())
}

/// Run one configuration with a fresh seeded source.
pub fn run_seeded(config: &RunConfig, seed: u64) -> SimResult<Vec<ServiceEvent>> {
    let mut draws = SeededDraws::new(seed);
    run(config, &mut draws)
}
