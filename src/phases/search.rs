// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! SearchPhase - one greedy best-of-M round per call.
//!
//! Each round generates M candidates against the current universe, rescores
//! each with [`TupleUniverse::coverage_of`](crate::universe::TupleUniverse::coverage_of),
//! and commits the best. Equal non-zero scores go through the escalating tie
//! rule. The phase repeats until the universe is empty.
//!
//! A round where every candidate scores zero still commits its best-effort
//! row. Such rounds are counted and logged but never stop the search.

use crate::context::GenerationContext;
use crate::engine::{Phase, PhaseResult};
use crate::model::TestCase;
use crate::state::Counters;
use crate::tie_break::EscalatingTieBreak;
use rand::Rng;
use tracing::{trace, warn};

#[derive(Debug)]
pub struct SearchPhase;

impl Phase for SearchPhase {
    fn try_phase(&mut self, ctx: &mut GenerationContext, round: usize) -> PhaseResult {
        if ctx.state.universe.is_empty() {
            return PhaseResult::Advance;
        }

        let generator = ctx.memo.generator();
        let mut best: Option<(TestCase, usize)> = None;
        let mut tie = EscalatingTieBreak::new();
        for _ in 0..ctx.memo.candidates {
            let candidate = generator.generate(&ctx.memo.system, &ctx.state.universe, &mut ctx.rng);
            ctx.statistics.increment(Counters::CandidatesGenerated);
            let coverage = ctx.state.universe.coverage_of(&candidate.row);
            trace!(round, coverage, hint = candidate.coverage_hint, "scored candidate");

            let incumbent = best.as_ref().map(|(_, best_coverage)| *best_coverage);
            if displaces(incumbent, coverage, &mut tie, &mut ctx.rng) {
                if incumbent == Some(coverage) {
                    ctx.statistics.increment(Counters::TiesReplaced);
                }
                best = Some((candidate.row, coverage));
            }
        }

        let Some((row, coverage)) = best else {
            return PhaseResult::Advance;
        };
        if coverage == 0 {
            ctx.statistics.increment(Counters::ZeroCoverageRounds);
            warn!(
                round,
                remaining = ctx.state.universe.len(),
                "no candidate covered a new tuple"
            );
        }
        ctx.state.suite.add(row, &mut ctx.state.universe);
        ctx.statistics.increment(Counters::RowsCommitted);
        PhaseResult::Repeat
    }

    fn name(&self) -> &str {
        "Search"
    }
}

/// Whether a candidate scoring `coverage` displaces the incumbent score.
///
/// Equal positive scores go through the escalating rule; zero never ties.
fn displaces<R: Rng + ?Sized>(
    incumbent: Option<usize>,
    coverage: usize,
    tie: &mut EscalatingTieBreak,
    rng: &mut R,
) -> bool {
    match incumbent {
        None => true,
        Some(best) if coverage > best => true,
        Some(best) if coverage == best && coverage > 0 => tie.replace(rng),
        Some(_) => false,
    }
}
