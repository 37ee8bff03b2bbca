// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context and incremented by the phases as the
//! search runs. They are reset together with the rest of the dynamic state at
//! the start of each trial.

use std::fmt;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Deterministic rows committed before the greedy search.
    SeedRows,
    /// Rows committed by the greedy search.
    RowsCommitted,
    CandidatesGenerated,
    /// Rounds whose best candidate covered nothing new.
    ZeroCoverageRounds,
    /// Equal-scoring candidates that displaced the running best.
    TiesReplaced,
}

const ALL_COUNTERS: [Counters; Counters::COUNT] = [
    Counters::SeedRows,
    Counters::RowsCommitted,
    Counters::CandidatesGenerated,
    Counters::ZeroCoverageRounds,
    Counters::TiesReplaced,
];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    pub fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    pub fn reset(&mut self) {
        self.stats = [0; Counters::COUNT];
    }

    /// Fold another run's counters into these.
    pub fn merge(&mut self, other: &Statistics) {
        for (mine, theirs) in self.stats.iter_mut().zip(other.stats.iter()) {
            *mine += theirs;
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, counter) in ALL_COUNTERS.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}={}", counter, self.get(*counter))?;
        }
        Ok(())
    }
}
