//! Scripted draw source for exact-scenario tests.

#![allow(dead_code)]

use callcenter_core::rng::DrawSource;
use std::collections::VecDeque;

/// Gap that pushes the next arrival past any test horizon.
pub const NEVER: f64 = 1.0e9;

/// Replays fixed gaps and durations. Once the gaps run out no further
/// calls arrive; once the durations run out `fallback_duration` is used.
pub struct ScriptedDraws {
    gaps:              VecDeque<f64>,
    durations:         VecDeque<f64>,
    fallback_duration: f64,
    pub gap_draws:     usize,
    pub service_draws: usize,
}

impl ScriptedDraws {
    pub fn new(gaps: &[f64], durations: &[f64]) -> Self {
        Self {
            gaps:              gaps.iter().copied().collect(),
            durations:         durations.iter().copied().collect(),
            fallback_duration: 1.0,
            gap_draws:         0,
            service_draws:     0,
        }
    }

    pub fn with_fallback_duration(mut self, duration: f64) -> Self {
        self.fallback_duration = duration;
        self
    }
}

impl DrawSource for ScriptedDraws {
    fn inter_arrival_gap(&mut self, _arrival_rate: f64) -> f64 {
        self.gap_draws += 1;
        self.gaps.pop_front().unwrap_or(NEVER)
    }

    fn service_duration(&mut self, _mean_service_time: f64) -> f64 {
        self.service_draws += 1;
        self.durations.pop_front().unwrap_or(self.fallback_duration)
    }
}
