// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Repeated independent trials of one configuration.
//!
//! Every trial rebuilds the universe and runs the standard engine from
//! scratch; only the random stream carries over. The smallest suite seen is
//! kept by moving its rows out of the context.

use crate::config::GeneratorConfig;
use crate::context::GenerationContext;
use crate::engine::SearchEngine;
use crate::error::{AetgResult, ConfigError};
use crate::model::TestCase;
use crate::state::Statistics;
use std::time::{Duration, Instant};
use tracing::info;

/// Outcome of a batch of trials.
#[derive(Debug, Clone)]
pub struct TrialSummary {
    pub trials: usize,
    /// Tuples in the universe of each trial.
    pub universe_size: usize,
    pub best_size: usize,
    pub average_size: f64,
    pub worst_size: usize,
    pub mean_duration: Duration,
    /// Rows of the smallest suite, first found wins on equal size.
    pub best: Vec<TestCase>,
    /// Counters summed over every trial.
    pub statistics: Statistics,
}

/// Run `config.trials` trials and keep the smallest suite.
pub fn run_trials(config: &GeneratorConfig) -> AetgResult<TrialSummary> {
    config.validate()?;
    let system = config.build_system()?;
    let mut ctx = GenerationContext::new(system, config.strength, config.candidates, config.seed)?;
    run_trials_in(&mut ctx, config.trials)
}

/// Run `trials` trials on an existing context.
pub fn run_trials_in(ctx: &mut GenerationContext, trials: usize) -> AetgResult<TrialSummary> {
    if trials == 0 {
        return Err(ConfigError::NoTrials.into());
    }

    let mut best: Vec<TestCase> = Vec::new();
    let mut best_size = usize::MAX;
    let mut worst_size = 0;
    let mut total_size = 0;
    let mut total_duration = Duration::ZERO;
    let mut universe_size = 0;
    let mut statistics = Statistics::new();

    for trial in 0..trials {
        let start = Instant::now();
        universe_size = ctx.reset_trial()?;
        // The standard program always converges; it has no suspending phase.
        let _ = SearchEngine::standard().search(ctx);
        let elapsed = start.elapsed();

        let size = ctx.state.suite.len();
        info!(
            trial,
            size,
            elapsed_ms = elapsed.as_millis() as u64,
            "trial finished"
        );
        total_size += size;
        total_duration += elapsed;
        worst_size = worst_size.max(size);
        statistics.merge(&ctx.statistics);
        if size < best_size {
            best_size = size;
            best.clear();
            ctx.state.suite.transfer_out(&mut best);
        }
    }

    let summary = TrialSummary {
        trials,
        universe_size,
        best_size,
        average_size: total_size as f64 / trials as f64,
        worst_size,
        mean_duration: total_duration.div_f64(trials as f64),
        best,
        statistics,
    };
    info!(
        trials,
        best = summary.best_size,
        average = summary.average_size,
        worst = summary.worst_size,
        "trials complete"
    );
    Ok(summary)
}
