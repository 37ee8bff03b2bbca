// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Factor and level identifiers.
//!
//! Levels are numbered globally: each factor owns a contiguous, inclusive
//! [`LevelRange`], and no two factors share a level id. A level therefore
//! identifies its factor on its own.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A globally numbered level (one admissible value of one factor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(u32);

impl Level {
    /// Wrap a raw level id.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the underlying value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Get the level as a usize (for indexing occurrence counts).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of a factor in `0..factor_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactorId(usize);

impl FactorId {
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    pub fn value(self) -> usize {
        self.0
    }
}

impl fmt::Display for FactorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f{}", self.0)
    }
}

/// Inclusive range of levels owned by one factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelRange {
    min: Level,
    max: Level,
}

impl LevelRange {
    /// Create a range, returning None if `min > max`.
    pub fn new(min: u32, max: u32) -> Option<Self> {
        if min <= max {
            Some(Self {
                min: Level(min),
                max: Level(max),
            })
        } else {
            None
        }
    }

    pub fn min(self) -> Level {
        self.min
    }

    pub fn max(self) -> Level {
        self.max
    }

    /// Number of levels in the range.
    pub fn len(self) -> usize {
        (self.max.0 - self.min.0) as usize + 1
    }

    /// Always false: a range holds at least one level.
    pub fn is_empty(self) -> bool {
        false
    }

    /// Inclusive membership test.
    pub fn contains(self, level: Level) -> bool {
        self.min <= level && level <= self.max
    }

    /// True if the two ranges share at least one level.
    pub fn overlaps(self, other: LevelRange) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// Iterate over the levels in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Level> {
        (self.min.0..=self.max.0).map(Level)
    }
}

impl fmt::Display for LevelRange {
    /// Format as "[min, max]".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_range_new() {
        let range = LevelRange::new(3, 5).unwrap();
        assert_eq!(range.min(), Level::new(3));
        assert_eq!(range.max(), Level::new(5));
        assert_eq!(range.len(), 3);
        assert!(LevelRange::new(5, 3).is_none());
    }

    #[test]
    fn test_level_range_single_level() {
        let range = LevelRange::new(7, 7).unwrap();
        assert_eq!(range.len(), 1);
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![Level::new(7)]);
    }

    #[test]
    fn test_level_range_contains() {
        let range = LevelRange::new(2, 4).unwrap();
        assert!(!range.contains(Level::new(1)));
        assert!(range.contains(Level::new(2)));
        assert!(range.contains(Level::new(4)));
        assert!(!range.contains(Level::new(5)));
    }

    #[test]
    fn test_level_range_overlaps() {
        let a = LevelRange::new(0, 2).unwrap();
        let b = LevelRange::new(3, 5).unwrap();
        let c = LevelRange::new(2, 3).unwrap();
        assert!(!a.overlaps(b));
        assert!(a.overlaps(c));
        assert!(c.overlaps(b));
    }

    #[test]
    fn test_display() {
        assert_eq!(LevelRange::new(0, 2).unwrap().to_string(), "[0, 2]");
        assert_eq!(FactorId::new(3).to_string(), "f3");
    }
}
