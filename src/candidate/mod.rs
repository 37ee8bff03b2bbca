// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! AETG candidate row construction.
//!
//! One candidate is built per call:
//!
//! 1. The level occurring in the most uncovered tuples anchors the row and
//!    fixes its owning factor.
//! 2. The remaining factors are visited in a uniformly random order.
//! 3. While fewer than t-1 positions are assigned, no tuple can be completed
//!    yet, so the level with the highest raw occurrence count is chosen.
//!    Afterwards each level is scored by how many uncovered tuples the row
//!    completes with it, and the best is kept.
//!
//! The universe is only read here. Committing a row is the suite's job.

use crate::model::{FactorId, Level, TestCase};
use crate::system::ComponentSystem;
use crate::tie_break::{EscalatingTieBreak, UniformTieBreak};
use crate::universe::TupleUniverse;
use rand::Rng;
use tracing::trace;

/// A generated row and the coverage observed while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub row: TestCase,
    /// Coverage at the first decision that scored above zero.
    ///
    /// A lower bound on the finished row's coverage, not its score. Callers
    /// rescore with [`TupleUniverse::coverage_of`].
    pub coverage_hint: usize,
}

/// Builds candidate rows for one interaction strength.
#[derive(Debug, Clone, Copy)]
pub struct CandidateGenerator {
    strength: usize,
}

impl CandidateGenerator {
    pub fn new(strength: usize) -> Self {
        Self { strength }
    }

    /// Build one fully-assigned candidate row.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        system: &ComponentSystem,
        universe: &TupleUniverse,
        rng: &mut R,
    ) -> Candidate {
        let mut row = TestCase::new(system.factor_count());
        let mut coverage_hint = 0;

        let anchor = universe
            .greatest_occurring_level(rng)
            .and_then(|level| Some((system.factor_of(level)?, level)))
            .or_else(|| {
                let factor = system.sample_random_factor(rng)?;
                Some((factor, system.sample_random_level(factor, rng)?))
            });
        let anchor_factor = anchor.map(|(factor, level)| {
            row.assign(factor, level);
            factor
        });

        for factor in system.shuffled_factors(rng) {
            if Some(factor) == anchor_factor {
                continue;
            }
            let level = if row.assigned_count() + 1 < self.strength {
                most_frequent_level(system, universe, factor, rng)
            } else {
                let (level, coverage) = best_covering_level(system, universe, &mut row, factor, rng);
                if coverage_hint == 0 {
                    coverage_hint = coverage;
                }
                Some(level)
            };
            if let Some(level) = level {
                row.assign(factor, level);
            }
        }

        trace!(row = %row, coverage_hint, "generated candidate");
        Candidate { row, coverage_hint }
    }
}

/// The level of `factor` with the highest raw occurrence count.
///
/// Ties are broken uniformly. If every count is zero a uniformly random
/// level is returned.
fn most_frequent_level<R: Rng + ?Sized>(
    system: &ComponentSystem,
    universe: &TupleUniverse,
    factor: FactorId,
    rng: &mut R,
) -> Option<Level> {
    let mut best: Option<Level> = None;
    let mut best_count = 0u64;
    let mut tie = UniformTieBreak::new();
    for level in system.levels(factor) {
        let count = universe.level_count(level);
        if count > best_count {
            best_count = count;
            best = Some(level);
            tie.restart();
        } else if count == best_count && count > 0 && tie.replace(rng) {
            best = Some(level);
        }
    }
    best.or_else(|| system.sample_random_level(factor, rng))
}

/// The level of `factor` completing the most uncovered tuples, and its score.
///
/// `row` must have `factor` unassigned; it is left that way on return.
/// Equal positive scores go through the escalating tie rule. When nothing
/// scores, the factor's minimum level is returned with score 0.
fn best_covering_level<R: Rng + ?Sized>(
    system: &ComponentSystem,
    universe: &TupleUniverse,
    row: &mut TestCase,
    factor: FactorId,
    rng: &mut R,
) -> (Level, usize) {
    let base = universe.coverage_of(row);
    let mut best: Option<(Level, usize)> = None;
    let mut tie = EscalatingTieBreak::new();
    for level in system.levels(factor) {
        row.assign(factor, level);
        let coverage = base + universe.coverage_through(row, factor);
        match best {
            Some((_, best_coverage)) if coverage < best_coverage => {}
            Some((_, best_coverage)) if coverage == best_coverage => {
                if coverage > 0 && tie.replace(rng) {
                    best = Some((level, coverage));
                }
            }
            _ if coverage > 0 => best = Some((level, coverage)),
            _ => {}
        }
    }
    row.unassign(factor);

    match (best, system.min_level(factor)) {
        (Some(pick), _) => pick,
        (None, Some(min)) => (min, 0),
        (None, None) => (Level::new(0), 0),
    }
}
