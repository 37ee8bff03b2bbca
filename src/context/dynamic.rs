// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state (Tier 2: DYNAMIC).

use crate::error::AetgResult;
use crate::suite::TestSuite;
use crate::universe::TupleUniverse;

use super::MemoizedData;

/// Mutable state of one trial.
///
/// The universe only shrinks and the suite only grows while a trial runs.
/// [`reset`](Self::reset) rebuilds both for the next trial.
#[derive(Debug, Clone)]
pub struct DynamicState {
    /// Tuples not yet realized by a committed row.
    pub universe: TupleUniverse,

    /// Rows committed so far.
    pub suite: TestSuite,

    /// Whether the deterministic seed rows have been committed.
    pub seeded: bool,
}

impl DynamicState {
    /// Fresh state with the full tuple universe of `memo`.
    pub fn new(memo: &MemoizedData) -> AetgResult<Self> {
        Ok(Self {
            universe: TupleUniverse::build(&memo.system, memo.strength)?,
            suite: TestSuite::new(),
            seeded: false,
        })
    }

    /// Regenerate the universe and clear the suite. Returns the universe size.
    pub fn reset(&mut self, memo: &MemoizedData) -> AetgResult<usize> {
        let size = self.universe.generate(&memo.system, memo.strength)?;
        self.suite.clear();
        self.seeded = false;
        Ok(size)
    }
}
