// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The committed test suite of one trial.

use crate::model::TestCase;
use crate::universe::TupleUniverse;
use tracing::debug;

/// Ordered rows committed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestSuite {
    cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit `candidate`, removing its tuples from `universe`.
    ///
    /// Returns the new suite size, or 0 without appending if the candidate
    /// has fewer than t assigned positions. Committing a row whose tuples
    /// are already covered still appends it.
    pub fn add(&mut self, candidate: TestCase, universe: &mut TupleUniverse) -> usize {
        if candidate.assigned_count() < universe.strength() {
            return 0;
        }
        self.commit(candidate, universe)
    }

    /// Append `row` whatever its assigned count, removing any tuples it has.
    ///
    /// Seed rows go through here so a system with fewer factors than the
    /// strength still gets its two rows.
    pub fn commit(&mut self, row: TestCase, universe: &mut TupleUniverse) -> usize {
        let tuples = universe.tuples_of(&row);
        let removed = universe.remove(&tuples);
        debug!(
            row = %row,
            removed,
            remaining = universe.len(),
            suite = self.cases.len() + 1,
            "committed row"
        );
        self.cases.push(row);
        self.cases.len()
    }

    /// Drop every row.
    pub fn clear(&mut self) {
        self.cases.clear();
    }

    /// Move every row into `destination`, leaving this suite empty.
    ///
    /// Returns the destination's new length.
    pub fn transfer_out(&mut self, destination: &mut Vec<TestCase>) -> usize {
        destination.append(&mut self.cases);
        destination.len()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TestCase> {
        self.cases.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TestCase> {
        self.cases.iter()
    }

    pub fn as_slice(&self) -> &[TestCase] {
        &self.cases
    }
}

impl<'a> IntoIterator for &'a TestSuite {
    type Item = &'a TestCase;
    type IntoIter = std::slice::Iter<'a, TestCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}
