// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The universe of uncovered t-way tuples.
//!
//! [`TupleUniverse`] owns the set of tuples no committed row realizes yet,
//! plus the number of uncovered tuples each level appears in. Both shrink
//! together and never regrow until the next [`generate`](TupleUniverse::generate).
//!
//! # Storage
//!
//! Tuples are packed into `u64` keys (see [`TupleCodec`]) and kept in an
//! `FxHashSet`, giving O(1) amortized membership and removal for universes of
//! millions of tuples. Level occurrence counts are a dense vector indexed by
//! level id.
//!
//! # Invariants
//!
//! - `level_count(l)` equals the number of uncovered tuples containing `l`.
//! - Every tuple holds one level per factor of an increasing factor subset,
//!   each within that factor's range.

use crate::combinatorics::Combinations;
use crate::error::{AetgError, AetgResult, ConfigError};
use crate::model::{FactorId, Level, TestCase, Tuple, TupleCodec};
use crate::system::ComponentSystem;
use crate::tie_break::EscalatingTieBreak;
use rand::Rng;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

/// Largest universe we preallocate for up front.
const MAX_PREALLOCATED_TUPLES: u64 = 1 << 26;

/// Uncovered t-way tuples and per-level occurrence counts.
#[derive(Debug, Clone)]
pub struct TupleUniverse {
    strength: usize,
    codec: TupleCodec,
    uncovered: FxHashSet<Tuple>,
    level_counts: Vec<u64>,
}

impl TupleUniverse {
    /// An empty universe; call [`generate`](Self::generate) to fill it.
    ///
    /// Queries on it are well defined: every candidate covers nothing.
    pub fn new(strength: usize) -> Result<Self, ConfigError> {
        if strength == 0 {
            return Err(ConfigError::InvalidStrength(strength));
        }
        Ok(Self {
            strength,
            codec: TupleCodec::unit(strength),
            uncovered: FxHashSet::default(),
            level_counts: Vec::new(),
        })
    }

    /// Build a universe for `system` at `strength` in one step.
    pub fn build(system: &ComponentSystem, strength: usize) -> AetgResult<Self> {
        let mut universe = Self::new(strength)?;
        universe.generate(system, strength)?;
        Ok(universe)
    }

    /// Replace the contents with every t-way tuple of `system`.
    ///
    /// Factor subsets are walked in lexicographic order; for each subset the
    /// Cartesian product of its level ranges is enumerated. Returns the
    /// number of tuples. A system with fewer than `strength` factors yields an
    /// empty universe.
    pub fn generate(&mut self, system: &ComponentSystem, strength: usize) -> AetgResult<usize> {
        if strength == 0 {
            return Err(ConfigError::InvalidStrength(strength).into());
        }
        system.validate()?;
        let max_level = system
            .max_system_level()
            .ok_or(ConfigError::NoFactors(0))?;
        let level_bound = max_level.value() as u64 + 1;
        let codec = TupleCodec::new(level_bound, strength).ok_or(AetgError::TupleKeyOverflow {
            strength,
            levels: level_bound,
        })?;

        self.strength = strength;
        self.codec = codec;
        self.uncovered.clear();
        self.level_counts.clear();
        self.level_counts.resize(level_bound as usize, 0);

        if let Some(expected) = system.t_way_configuration_count(strength) {
            self.uncovered
                .reserve(expected.min(MAX_PREALLOCATED_TUPLES) as usize);
        }

        let ranges = system.ranges();
        let mut subsets = Combinations::new(system.factor_count(), strength);
        let mut levels: Vec<Level> = Vec::with_capacity(strength);

        while subsets.advance() {
            let subset = subsets.current();
            levels.clear();
            levels.extend(subset.iter().map(|&factor| ranges[factor].min()));

            // Odometer over the product of the subset's ranges.
            'product: loop {
                let tuple = self.codec.encode(&levels);
                if !self.uncovered.insert(tuple) {
                    return Err(AetgError::DuplicateTuple {
                        strength,
                        levels: levels.iter().map(|level| level.value()).collect(),
                    });
                }
                for level in &levels {
                    self.level_counts[level.as_usize()] += 1;
                }

                let mut position = strength;
                loop {
                    if position == 0 {
                        break 'product;
                    }
                    position -= 1;
                    let range = ranges[subset[position]];
                    if levels[position] < range.max() {
                        levels[position] = Level::new(levels[position].value() + 1);
                        break;
                    }
                    levels[position] = range.min();
                }
            }
        }

        info!(
            strength,
            factors = system.factor_count(),
            tuples = self.uncovered.len(),
            "generated uncovered tuple universe"
        );
        Ok(self.uncovered.len())
    }

    /// Interaction strength t.
    pub fn strength(&self) -> usize {
        self.strength
    }

    /// Codec for decoding stored tuples.
    pub fn codec(&self) -> TupleCodec {
        self.codec
    }

    /// Number of uncovered tuples.
    pub fn len(&self) -> usize {
        self.uncovered.len()
    }

    /// True once every tuple has been covered.
    pub fn is_empty(&self) -> bool {
        self.uncovered.is_empty()
    }

    /// True if `tuple` is still uncovered.
    pub fn contains(&self, tuple: Tuple) -> bool {
        self.uncovered.contains(&tuple)
    }

    /// Number of uncovered tuples referencing `level`.
    pub fn level_count(&self, level: Level) -> u64 {
        self.level_counts.get(level.as_usize()).copied().unwrap_or(0)
    }

    /// Occurrence counts indexed by level id.
    pub fn level_counts(&self) -> &[u64] {
        &self.level_counts
    }

    /// Iterate over the uncovered tuples in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = Tuple> + '_ {
        self.uncovered.iter().copied()
    }

    /// Occurrence counts recomputed from the uncovered set.
    ///
    /// Always equal to [`level_counts`](Self::level_counts); exposed so tests
    /// can check the bookkeeping.
    pub fn recount_levels(&self) -> Vec<u64> {
        let mut counts = vec![0u64; self.level_counts.len()];
        let mut levels = Vec::with_capacity(self.strength);
        for &tuple in &self.uncovered {
            self.codec.decode_into(tuple, &mut levels);
            for level in &levels {
                counts[level.as_usize()] += 1;
            }
        }
        counts
    }

    /// The candidate's fully-assigned t-tuples.
    ///
    /// Tuples touching an unassigned position are skipped. A candidate with
    /// fewer than t assigned positions has none.
    pub fn tuples_of(&self, candidate: &TestCase) -> Vec<Tuple> {
        let assigned: Vec<Level> = candidate.levels().collect();
        let mut tuples = Vec::new();
        self.for_each_tuple(&assigned, |tuple| tuples.push(tuple));
        tuples
    }

    /// Number of the candidate's fully-assigned t-tuples that are uncovered.
    pub fn coverage_of(&self, candidate: &TestCase) -> usize {
        let assigned: Vec<Level> = candidate.levels().collect();
        let mut covered = 0;
        self.for_each_tuple(&assigned, |tuple| {
            if self.uncovered.contains(&tuple) {
                covered += 1;
            }
        });
        covered
    }

    /// Uncovered tuples of the candidate that include position `factor`.
    ///
    /// `coverage_of(c)` equals the coverage of `c` with `factor` unassigned
    /// plus this value, which lets callers score every level of one factor
    /// without rescanning the tuples that do not involve it. Returns 0 if
    /// `factor` is unassigned.
    pub fn coverage_through(&self, candidate: &TestCase, factor: FactorId) -> usize {
        let Some(pivot) = candidate.get(factor) else {
            return 0;
        };
        let t = self.strength;
        if t == 0 || self.uncovered.is_empty() {
            return 0;
        }
        let mut before = 0;
        let others: Vec<Level> = candidate
            .slots()
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != factor.value())
            .filter_map(|(i, slot)| {
                let level = (*slot)?;
                if i < factor.value() {
                    before += 1;
                }
                Some(level)
            })
            .collect();
        if others.len() + 1 < t {
            return 0;
        }

        let mut covered = 0;
        let mut levels: Vec<Level> = Vec::with_capacity(t);
        let mut combos = Combinations::new(others.len(), t - 1);
        while combos.advance() {
            levels.clear();
            let mut placed = false;
            for &i in combos.current() {
                if !placed && i >= before {
                    levels.push(pivot);
                    placed = true;
                }
                levels.push(others[i]);
            }
            if !placed {
                levels.push(pivot);
            }
            if let Some(tuple) = self.codec.try_encode(&levels) {
                if self.uncovered.contains(&tuple) {
                    covered += 1;
                }
            }
        }
        covered
    }

    /// Remove `tuples` from the uncovered set, decrementing level counts.
    ///
    /// Absent tuples are ignored. Returns how many were actually removed.
    pub fn remove(&mut self, tuples: &[Tuple]) -> usize {
        let mut removed = 0;
        let mut levels = Vec::with_capacity(self.strength);
        for tuple in tuples {
            if self.uncovered.remove(tuple) {
                self.codec.decode_into(*tuple, &mut levels);
                for level in &levels {
                    self.level_counts[level.as_usize()] -= 1;
                }
                removed += 1;
            }
        }
        debug!(removed, remaining = self.uncovered.len(), "removed covered tuples");
        removed
    }

    /// The level appearing in the most uncovered tuples.
    ///
    /// Ties go through [`EscalatingTieBreak`]. Returns None when every count
    /// is zero (the universe is empty).
    pub fn greatest_occurring_level<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Level> {
        let mut best: Option<Level> = None;
        let mut best_count = 0u64;
        let mut tie = EscalatingTieBreak::new();
        for (id, &count) in self.level_counts.iter().enumerate() {
            if count > best_count {
                best_count = count;
                best = Some(Level::new(id as u32));
            } else if count == best_count && count > 0 && tie.replace(rng) {
                best = Some(Level::new(id as u32));
            }
        }
        best
    }

    /// Call `visit` with every t-tuple over `assigned` (levels in factor order).
    ///
    /// Combinations with a level outside the codec's id space are skipped.
    fn for_each_tuple(&self, assigned: &[Level], mut visit: impl FnMut(Tuple)) {
        if self.strength == 0 || assigned.len() < self.strength {
            return;
        }
        let mut levels: Vec<Level> = Vec::with_capacity(self.strength);
        let mut combos = Combinations::new(assigned.len(), self.strength);
        while combos.advance() {
            levels.clear();
            levels.extend(combos.current().iter().map(|&i| assigned[i]));
            if let Some(tuple) = self.codec.try_encode(&levels) {
                visit(tuple);
            }
        }
    }
}
