// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use aetg_search::combinatorics::Combinations;
use aetg_search::model::{FactorId, Level, TestCase};
use aetg_search::system::ComponentSystem;

/// A fully assigned row from raw level ids.
pub fn row(levels: &[u32]) -> TestCase {
    TestCase::from_levels(levels.iter().copied().map(Level::new))
}

/// Every row of `system` in lexicographic order.
pub fn all_rows(system: &ComponentSystem) -> Vec<TestCase> {
    let mut rows = vec![Vec::new()];
    for factor in system.factor_ids() {
        rows = rows
            .into_iter()
            .flat_map(|prefix: Vec<Level>| {
                system.levels(factor).map(move |level| {
                    let mut next = prefix.clone();
                    next.push(level);
                    next
                })
            })
            .collect();
    }
    rows.into_iter().map(TestCase::from_levels).collect()
}

/// t-way tuples of `system` no row in `rows` realizes, found by brute force.
///
/// Independent of the tuple universe: every factor subset and level
/// combination is checked directly against the rows.
pub fn missing_tuples(system: &ComponentSystem, strength: usize, rows: &[TestCase]) -> Vec<Vec<Level>> {
    let mut missing = Vec::new();
    for subset in Combinations::new(system.factor_count(), strength) {
        let factors: Vec<FactorId> = subset.into_iter().map(FactorId::new).collect();
        let mut choices: Vec<Vec<Level>> = vec![Vec::new()];
        for &factor in &factors {
            choices = choices
                .into_iter()
                .flat_map(|prefix| {
                    system.levels(factor).map(move |level| {
                        let mut next = prefix.clone();
                        next.push(level);
                        next
                    })
                })
                .collect();
        }
        for levels in choices {
            let covered = rows.iter().any(|row| {
                factors
                    .iter()
                    .zip(&levels)
                    .all(|(&factor, &level)| row.get(factor) == Some(level))
            });
            if !covered {
                missing.push(levels);
            }
        }
    }
    missing
}

/// Panic unless `rows` is a covering array of strength `strength`.
pub fn assert_covering(system: &ComponentSystem, strength: usize, rows: &[TestCase]) {
    let missing = missing_tuples(system, strength, rows);
    assert!(
        missing.is_empty(),
        "{} tuples uncovered, first {:?}",
        missing.len(),
        &missing[0]
    );
}
