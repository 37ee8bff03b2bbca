// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generation context combining MEMO and DYNAMIC state.
//!
//! The GenerationContext is the core data structure passed to every phase:
//! - Tier 1 (MEMO): the component system, strength and candidate count,
//!   fixed for the run
//! - Tier 2 (DYNAMIC): the uncovered tuples and the committed suite, rebuilt
//!   per trial
//!
//! The random source and the statistics ride alongside. Independent contexts
//! can be built from clones of the same MEMO data.

mod dynamic;
mod memoized;

pub use dynamic::DynamicState;
pub use memoized::MemoizedData;

use crate::error::AetgResult;
use crate::state::Statistics;
use crate::system::ComponentSystem;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Where a trial stands.
///
/// Seeding is checked first: a trial reports `Seeding` until the seed phase
/// has run, even if its universe is already empty (k < t). Only a seeded
/// trial can be `Converged`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Seed rows not yet committed, whatever the universe holds.
    Seeding,
    /// Uncovered tuples remain.
    Searching,
    /// Every tuple is covered.
    Converged,
}

#[derive(Debug)]
pub struct GenerationContext {
    /// Immutable run configuration (Tier 1)
    pub memo: MemoizedData,
    /// Mutable trial state (Tier 2)
    pub state: DynamicState,
    /// Random source for every draw of the run
    pub rng: StdRng,
    pub statistics: Statistics,
}

impl GenerationContext {
    /// Build a context and its full tuple universe.
    ///
    /// The random source is seeded from `seed` if given, from OS entropy
    /// otherwise.
    pub fn new(
        system: ComponentSystem,
        strength: usize,
        candidates: usize,
        seed: Option<u64>,
    ) -> AetgResult<Self> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(system, strength, candidates, rng)
    }

    pub fn with_rng(
        system: ComponentSystem,
        strength: usize,
        candidates: usize,
        rng: StdRng,
    ) -> AetgResult<Self> {
        let memo = MemoizedData::new(system, strength, candidates)?;
        Self::with_memo(memo, rng)
    }

    /// Create a context with existing MEMO data.
    pub fn with_memo(memo: MemoizedData, rng: StdRng) -> AetgResult<Self> {
        let state = DynamicState::new(&memo)?;
        Ok(Self {
            memo,
            state,
            rng,
            statistics: Statistics::new(),
        })
    }

    /// Start a new trial: full universe, empty suite, zeroed statistics.
    ///
    /// The random stream carries on from the previous trial.
    pub fn reset_trial(&mut self) -> AetgResult<usize> {
        self.statistics.reset();
        self.state.reset(&self.memo)
    }

    /// The trial's [`SearchState`].
    pub fn search_state(&self) -> SearchState {
        if !self.state.seeded {
            SearchState::Seeding
        } else if self.state.universe.is_empty() {
            SearchState::Converged
        } else {
            SearchState::Searching
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AetgError, ConfigError};

    #[test]
    fn test_new_context_holds_full_universe() {
        let system = ComponentSystem::uniform(4, 3).unwrap();
        let ctx = GenerationContext::new(system, 3, 50, Some(1)).unwrap();
        assert_eq!(ctx.state.universe.len(), 108);
        assert!(ctx.state.suite.is_empty());
        assert_eq!(ctx.search_state(), SearchState::Seeding);
    }

    #[test]
    fn test_zero_candidates_rejected() {
        let system = ComponentSystem::uniform(4, 3).unwrap();
        assert!(matches!(
            GenerationContext::new(system, 3, 0, None),
            Err(AetgError::Config(ConfigError::NoCandidates))
        ));
    }

    #[test]
    fn test_reset_trial_restores_universe() {
        let system = ComponentSystem::uniform(3, 2).unwrap();
        let mut ctx = GenerationContext::new(system, 2, 5, Some(3)).unwrap();
        let all: Vec<_> = ctx.state.universe.iter().collect();
        ctx.state.universe.remove(&all);
        ctx.state.seeded = true;
        assert_eq!(ctx.search_state(), SearchState::Converged);

        assert_eq!(ctx.reset_trial().unwrap(), 12);
        assert_eq!(ctx.search_state(), SearchState::Seeding);
    }

    #[test]
    fn test_unseeded_empty_universe_reports_seeding() {
        // Two factors at strength 3: nothing to cover, seeds still pending.
        let system = ComponentSystem::uniform(2, 3).unwrap();
        let mut ctx = GenerationContext::new(system, 3, 5, Some(6)).unwrap();
        assert!(ctx.state.universe.is_empty());
        assert_eq!(ctx.search_state(), SearchState::Seeding);

        ctx.state.seeded = true;
        assert_eq!(ctx.search_state(), SearchState::Converged);
    }

    #[test]
    fn test_independent_contexts_share_memo() {
        let memo = MemoizedData::new(ComponentSystem::uniform(3, 3).unwrap(), 2, 10).unwrap();
        let mut ctx1 = GenerationContext::with_memo(memo.clone(), StdRng::seed_from_u64(1)).unwrap();
        let ctx2 = GenerationContext::with_memo(memo, StdRng::seed_from_u64(2)).unwrap();
        let all: Vec<_> = ctx1.state.universe.iter().collect();
        ctx1.state.universe.remove(&all);
        assert_eq!(ctx2.state.universe.len(), 27);
    }
}
