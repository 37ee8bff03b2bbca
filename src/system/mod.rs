// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The component system: factors, their level ranges, and random sampling.
//!
//! A system is configured once per run and is read-only afterwards. It plays
//! the role of precomputed data for the search: the tuple universe,
//! candidate generator and seeding phase all read it, none of them change it.
//!
//! Random draws take the random source as an argument, so tests can pass a
//! seeded generator and production code an entropy-seeded one.
//!
//! # Example
//!
//! ```
//! use aetg_search::system::ComponentSystem;
//! use aetg_search::model::{FactorId, Level};
//!
//! let system = ComponentSystem::uniform(4, 3).unwrap();
//! assert_eq!(system.min_level(FactorId::new(1)), Some(Level::new(3)));
//! assert_eq!(system.max_level(FactorId::new(1)), Some(Level::new(5)));
//! assert_eq!(system.factor_of(Level::new(7)), Some(FactorId::new(2)));
//! assert_eq!(system.t_way_configuration_count(3), Some(108));
//! ```

use crate::combinatorics::binomial;
use crate::error::ConfigError;
use crate::model::{FactorId, Level, LevelRange};
use rand::seq::SliceRandom;
use rand::Rng;

/// Factors and their inclusive, globally numbered level ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentSystem {
    factors: Vec<LevelRange>,
}

impl ComponentSystem {
    /// An empty system with no factors.
    pub fn new() -> Self {
        Self::default()
    }

    /// A uniform system where factor `i` owns `[i*levels, i*levels + levels - 1]`.
    pub fn uniform(factor_count: usize, level_count: usize) -> Result<Self, ConfigError> {
        let mut system = Self::new();
        system.init(factor_count, level_count)?;
        Ok(system)
    }

    /// A system with explicit `(min, max)` ranges, one per factor.
    pub fn from_ranges(ranges: &[(u32, u32)]) -> Result<Self, ConfigError> {
        if ranges.is_empty() {
            return Err(ConfigError::NoFactors(0));
        }
        let factors = ranges
            .iter()
            .enumerate()
            .map(|(factor, &(min, max))| {
                LevelRange::new(min, max).ok_or(ConfigError::InvertedRange { factor, min, max })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let system = Self { factors };
        system.validate()?;
        Ok(system)
    }

    /// (Re)initialize as a uniform system.
    ///
    /// Fails if either count is zero or the level ids would not fit in a
    /// `u32`; the previous configuration is kept untouched on failure.
    pub fn init(&mut self, factor_count: usize, level_count: usize) -> Result<(), ConfigError> {
        if factor_count == 0 {
            return Err(ConfigError::NoFactors(factor_count));
        }
        if level_count == 0 {
            return Err(ConfigError::NoLevels(level_count));
        }
        let overflow = ConfigError::LevelIdOverflow {
            factors: factor_count,
            levels: level_count,
        };
        let fits = factor_count
            .checked_mul(level_count)
            .is_some_and(|total| total - 1 <= u32::MAX as usize);
        if !fits {
            return Err(overflow);
        }

        let factors = (0..factor_count)
            .map(|factor| {
                let min = factor * level_count;
                let max = min + level_count - 1;
                LevelRange::new(min as u32, max as u32)
            })
            .collect::<Option<Vec<_>>>()
            .ok_or(overflow)?;
        self.factors = factors;
        Ok(())
    }

    /// Override the level range of one factor.
    ///
    /// The factor must exist and `min <= max`. Overlaps with other factors
    /// are only detected by [`validate`](Self::validate), so a set of
    /// overrides can pass through intermediate overlapping states.
    pub fn set_level_range(&mut self, factor: FactorId, min: u32, max: u32) -> Result<(), ConfigError> {
        let factor_count = self.factors.len();
        let slot = self
            .factors
            .get_mut(factor.value())
            .ok_or(ConfigError::FactorOutOfRange {
                factor: factor.value(),
                factor_count,
            })?;
        *slot = LevelRange::new(min, max).ok_or(ConfigError::InvertedRange {
            factor: factor.value(),
            min,
            max,
        })?;
        Ok(())
    }

    /// Check that the system has factors and that the ranges tile the level
    /// ids `0..=max_system_level` without overlaps or gaps.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.factors.is_empty() {
            return Err(ConfigError::NoFactors(0));
        }
        let mut order: Vec<usize> = (0..self.factors.len()).collect();
        order.sort_by_key(|&i| self.factors[i].min());
        for pair in order.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if self.factors[a].overlaps(self.factors[b]) {
                return Err(ConfigError::OverlappingRanges {
                    first: a.min(b),
                    second: a.max(b),
                });
            }
        }
        // Overlap-free, so each id after a range's max is the next one free.
        let mut expected = 0u32;
        for &factor in &order {
            let range = self.factors[factor];
            let found = range.min().value();
            if found != expected {
                return Err(ConfigError::LevelGap { factor, expected, found });
            }
            expected = range.max().value().saturating_add(1);
        }
        Ok(())
    }

    /// Number of configured factors.
    pub fn factor_count(&self) -> usize {
        self.factors.len()
    }

    /// Common level count if every factor has the same number of levels.
    pub fn level_count(&self) -> Option<usize> {
        let first = self.factors.first()?.len();
        self.factors
            .iter()
            .all(|range| range.len() == first)
            .then_some(first)
    }

    /// All factor ids in order.
    pub fn factor_ids(&self) -> impl Iterator<Item = FactorId> {
        (0..self.factors.len()).map(FactorId::new)
    }

    /// All ranges, indexed by factor.
    pub fn ranges(&self) -> &[LevelRange] {
        &self.factors
    }

    pub fn range(&self, factor: FactorId) -> Option<LevelRange> {
        self.factors.get(factor.value()).copied()
    }

    /// Levels of `factor` in increasing order; empty for an unknown factor.
    pub fn levels(&self, factor: FactorId) -> impl Iterator<Item = Level> {
        self.range(factor).into_iter().flat_map(LevelRange::iter)
    }

    pub fn min_level(&self, factor: FactorId) -> Option<Level> {
        self.range(factor).map(LevelRange::min)
    }

    pub fn max_level(&self, factor: FactorId) -> Option<Level> {
        self.range(factor).map(LevelRange::max)
    }

    /// Largest level id owned by any factor.
    pub fn max_system_level(&self) -> Option<Level> {
        self.factors.iter().map(|range| range.max()).max()
    }

    /// The factor owning `level` (linear scan).
    pub fn factor_of(&self, level: Level) -> Option<FactorId> {
        self.factors
            .iter()
            .position(|range| range.contains(level))
            .map(FactorId::new)
    }

    /// Uniformly random level of `factor`.
    pub fn sample_random_level<R: Rng + ?Sized>(&self, factor: FactorId, rng: &mut R) -> Option<Level> {
        let range = self.range(factor)?;
        Some(Level::new(rng.gen_range(range.min().value()..=range.max().value())))
    }

    /// Uniformly random factor.
    pub fn sample_random_factor<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<FactorId> {
        if self.factors.is_empty() {
            return None;
        }
        Some(FactorId::new(rng.gen_range(0..self.factors.len())))
    }

    /// Uniformly random permutation of all factor ids (Fisher–Yates).
    pub fn shuffled_factors<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<FactorId> {
        let mut order: Vec<FactorId> = self.factor_ids().collect();
        order.shuffle(rng);
        order
    }

    /// C(k, t): the number of t-factor subsets.
    pub fn combination_count(&self, strength: usize) -> Option<u64> {
        binomial(self.factors.len(), strength)
    }

    /// Number of t-way variable-value configurations.
    ///
    /// This is the sum over all t-factor subsets of the product of their
    /// range sizes, which is `v^t * C(k, t)` for a uniform system.
    pub fn t_way_configuration_count(&self, strength: usize) -> Option<u64> {
        // Elementary symmetric sum e_t of the range sizes.
        let mut sums = vec![0u64; strength + 1];
        sums[0] = 1;
        for range in &self.factors {
            let size = range.len() as u64;
            for j in (1..=strength).rev() {
                sums[j] = sums[j].checked_add(sums[j - 1].checked_mul(size)?)?;
            }
        }
        Some(sums[strength])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_ranges_are_contiguous() {
        let system = ComponentSystem::uniform(3, 4).unwrap();
        assert_eq!(system.factor_count(), 3);
        assert_eq!(system.level_count(), Some(4));
        for factor in system.factor_ids() {
            let i = factor.value() as u32;
            assert_eq!(system.min_level(factor), Some(Level::new(i * 4)));
            assert_eq!(system.max_level(factor), Some(Level::new(i * 4 + 3)));
        }
        assert_eq!(system.max_system_level(), Some(Level::new(11)));
    }

    #[test]
    fn test_init_rejects_zero_counts() {
        assert_eq!(ComponentSystem::uniform(0, 3), Err(ConfigError::NoFactors(0)));
        assert_eq!(ComponentSystem::uniform(3, 0), Err(ConfigError::NoLevels(0)));
    }

    #[test]
    fn test_failed_init_keeps_previous_state() {
        let mut system = ComponentSystem::uniform(2, 2).unwrap();
        let before = system.clone();
        assert!(system.init(0, 5).is_err());
        assert_eq!(system, before);
    }

    #[test]
    fn test_init_rejects_level_id_overflow() {
        let err = ComponentSystem::uniform(1 << 20, 1 << 20).unwrap_err();
        assert!(matches!(err, ConfigError::LevelIdOverflow { .. }));
    }

    #[test]
    fn test_invalid_index_access_returns_none() {
        let system = ComponentSystem::uniform(2, 2).unwrap();
        let missing = FactorId::new(2);
        assert_eq!(system.min_level(missing), None);
        assert_eq!(system.max_level(missing), None);
        assert_eq!(system.factor_of(Level::new(4)), None);
        assert_eq!(ComponentSystem::new().max_system_level(), None);
    }

    #[test]
    fn test_set_level_range() {
        let mut system = ComponentSystem::uniform(2, 2).unwrap();
        system.set_level_range(FactorId::new(1), 2, 6).unwrap();
        assert_eq!(system.max_level(FactorId::new(1)), Some(Level::new(6)));
        assert_eq!(system.level_count(), None);

        let out_of_range = system.set_level_range(FactorId::new(2), 0, 1);
        assert_eq!(
            out_of_range,
            Err(ConfigError::FactorOutOfRange {
                factor: 2,
                factor_count: 2
            })
        );
        assert!(system.set_level_range(FactorId::new(0), 5, 1).is_err());
        assert_eq!(system.max_level(FactorId::new(0)), Some(Level::new(1)));
    }

    #[test]
    fn test_validate_detects_overlap() {
        let mut system = ComponentSystem::uniform(3, 2).unwrap();
        system.set_level_range(FactorId::new(2), 1, 5).unwrap();
        assert_eq!(
            system.validate(),
            Err(ConfigError::OverlappingRanges { first: 0, second: 2 })
        );
    }

    #[test]
    fn test_validate_detects_gaps() {
        assert_eq!(
            ComponentSystem::from_ranges(&[(0, 1), (2, 3), (4_000_000_000, 4_000_000_001)]),
            Err(ConfigError::LevelGap {
                factor: 2,
                expected: 4,
                found: 4_000_000_000
            })
        );
        assert_eq!(
            ComponentSystem::from_ranges(&[(1, 2), (3, 4)]),
            Err(ConfigError::LevelGap {
                factor: 0,
                expected: 0,
                found: 1
            })
        );

        // Order of factors does not matter, only the tiling.
        let mut system = ComponentSystem::uniform(2, 2).unwrap();
        system.set_level_range(FactorId::new(0), 2, 3).unwrap();
        system.set_level_range(FactorId::new(1), 0, 1).unwrap();
        assert_eq!(system.validate(), Ok(()));
        system.set_level_range(FactorId::new(1), 0, 0).unwrap();
        assert!(matches!(system.validate(), Err(ConfigError::LevelGap { factor: 0, .. })));
    }

    #[test]
    fn test_from_ranges() {
        let system = ComponentSystem::from_ranges(&[(0, 1), (2, 4), (5, 5)]).unwrap();
        assert_eq!(system.factor_of(Level::new(3)), Some(FactorId::new(1)));
        assert_eq!(system.factor_of(Level::new(5)), Some(FactorId::new(2)));
        assert!(ComponentSystem::from_ranges(&[(0, 2), (2, 3)]).is_err());
        assert!(ComponentSystem::from_ranges(&[]).is_err());
    }

    #[test]
    fn test_counts() {
        let system = ComponentSystem::uniform(4, 3).unwrap();
        assert_eq!(system.combination_count(3), Some(4));
        assert_eq!(system.t_way_configuration_count(3), Some(108));
        assert_eq!(system.t_way_configuration_count(2), Some(54));
        assert_eq!(system.combination_count(5), Some(0));
        assert_eq!(system.t_way_configuration_count(5), Some(0));

        // Mixed sizes 2, 3, 1: pairs = 2*3 + 2*1 + 3*1.
        let mixed = ComponentSystem::from_ranges(&[(0, 1), (2, 4), (5, 5)]).unwrap();
        assert_eq!(mixed.t_way_configuration_count(2), Some(11));
    }

    #[test]
    fn test_random_sampling_stays_in_range() {
        let system = ComponentSystem::uniform(5, 3).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let factor = system.sample_random_factor(&mut rng).unwrap();
            let level = system.sample_random_level(factor, &mut rng).unwrap();
            assert_eq!(system.factor_of(level), Some(factor));
        }
        assert_eq!(system.sample_random_level(FactorId::new(9), &mut rng), None);
        assert_eq!(ComponentSystem::new().sample_random_factor(&mut rng), None);
    }

    #[test]
    fn test_shuffled_factors_is_permutation() {
        let system = ComponentSystem::uniform(8, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let mut order = system.shuffled_factors(&mut rng);
        order.sort();
        assert_eq!(order, system.factor_ids().collect::<Vec<_>>());
    }
}
