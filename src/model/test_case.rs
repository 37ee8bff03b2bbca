// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A row of the covering array.
//!
//! While a candidate is under construction each position is either assigned
//! a level or left unassigned (`None`). Rows committed to a
//! [`TestSuite`](crate::suite::TestSuite) are fully assigned and only reachable
//! through shared references.

use crate::model::{FactorId, Level};
use std::fmt;

/// Per-factor level assignments, indexed by factor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestCase {
    levels: Vec<Option<Level>>,
}

impl TestCase {
    /// A row of `factor_count` unassigned positions.
    pub fn new(factor_count: usize) -> Self {
        Self {
            levels: vec![None; factor_count],
        }
    }

    /// A fully assigned row.
    pub fn from_levels(levels: impl IntoIterator<Item = Level>) -> Self {
        Self {
            levels: levels.into_iter().map(Some).collect(),
        }
    }

    /// Number of positions (the factor count).
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Level at `factor`, `None` if unassigned or out of range.
    pub fn get(&self, factor: FactorId) -> Option<Level> {
        self.levels.get(factor.value()).copied().flatten()
    }

    /// Assign `level` to `factor`. Returns false if `factor` is out of range.
    pub fn assign(&mut self, factor: FactorId, level: Level) -> bool {
        match self.levels.get_mut(factor.value()) {
            Some(slot) => {
                *slot = Some(level);
                true
            }
            None => false,
        }
    }

    /// Clear the assignment at `factor`.
    pub fn unassign(&mut self, factor: FactorId) {
        if let Some(slot) = self.levels.get_mut(factor.value()) {
            *slot = None;
        }
    }

    /// Reset every position to unassigned, resizing to `factor_count`.
    pub fn reset(&mut self, factor_count: usize) {
        self.levels.clear();
        self.levels.resize(factor_count, None);
    }

    /// Number of assigned positions.
    pub fn assigned_count(&self) -> usize {
        self.levels.iter().filter(|level| level.is_some()).count()
    }

    /// True once every position holds a level.
    pub fn is_complete(&self) -> bool {
        self.levels.iter().all(Option::is_some)
    }

    /// Raw per-position view.
    pub fn slots(&self) -> &[Option<Level>] {
        &self.levels
    }

    /// Assigned levels in factor order, skipping unassigned positions.
    pub fn levels(&self) -> impl Iterator<Item = Level> + '_ {
        self.levels.iter().flatten().copied()
    }
}

impl fmt::Display for TestCase {
    /// Space-separated level ids; unassigned positions print as `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.levels.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match slot {
                Some(level) => write!(f, "{}", level)?,
                None => write!(f, "-")?,
            }
        }
        Ok(())
    }
}
