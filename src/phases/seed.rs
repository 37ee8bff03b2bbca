// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! SeedPhase - commits the two deterministic rows.
//!
//! Round 0 commits the row with every factor at its minimum level, round 1
//! the row with every factor at its maximum. Both are kept whatever they
//! cover.

use crate::context::GenerationContext;
use crate::engine::{Phase, PhaseResult};
use crate::model::TestCase;
use crate::state::Counters;
use tracing::debug;

#[derive(Debug)]
pub struct SeedPhase;

impl Phase for SeedPhase {
    fn try_phase(&mut self, ctx: &mut GenerationContext, round: usize) -> PhaseResult {
        let system = &ctx.memo.system;
        let row = if round == 0 {
            TestCase::from_levels(system.ranges().iter().map(|range| range.min()))
        } else {
            TestCase::from_levels(system.ranges().iter().map(|range| range.max()))
        };
        let before = ctx.state.universe.len();
        ctx.state.suite.commit(row, &mut ctx.state.universe);
        ctx.statistics.increment(Counters::SeedRows);
        debug!(
            round,
            covered = before - ctx.state.universe.len(),
            "committed seed row"
        );

        if round == 0 {
            PhaseResult::Repeat
        } else {
            ctx.state.seeded = true;
            PhaseResult::Advance
        }
    }

    fn name(&self) -> &str {
        "Seed"
    }
}
