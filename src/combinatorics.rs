// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Combination counting and lexicographic subset enumeration.
//!
//! Both the tuple universe and the per-candidate tuple scans walk the
//! strictly increasing `k`-subsets of `0..n` in lexicographic order. They share
//! [`Combinations`], which keeps its current subset in place so the hot path
//! never allocates per step.
//!
//! # Examples
//!
//! ```
//! use aetg_search::combinatorics::{binomial, Combinations};
//!
//! assert_eq!(binomial(5, 2), Some(10));
//!
//! let all: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
//! assert_eq!(all.len(), 6);
//! assert_eq!(all[0], vec![0, 1]);
//! assert_eq!(all[5], vec![2, 3]);
//! ```

/// C(n, k), or `None` if the result does not fit in a `u64`.
///
/// Returns `Some(0)` when `k > n` and `Some(1)` when `k == 0`.
pub fn binomial(n: usize, k: usize) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        // result * (n - i) is always divisible by (i + 1) at this point.
        result = result.checked_mul((n - i) as u128)? / (i as u128 + 1);
        if result > u64::MAX as u128 {
            return None;
        }
    }
    Some(result as u64)
}

/// Advance `subset` to the next lexicographically greater increasing subset
/// of `0..n` with the same size.
///
/// Returns `false` (leaving `subset` unspecified) once the last subset
/// `[n-k, ..., n-1]` has been passed.
pub fn next_combination(subset: &mut [usize], n: usize) -> bool {
    let k = subset.len();
    if k > n {
        return false;
    }
    for i in (0..k).rev() {
        let max_val = n - (k - i);
        if subset[i] < max_val {
            subset[i] += 1;
            for j in (i + 1)..k {
                subset[j] = subset[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

/// Restartable lazy sequence of the increasing `k`-subsets of `0..n`.
///
/// Use [`advance`](Self::advance) and [`current`](Self::current) on hot
/// paths; the `Iterator` impl clones each subset and is meant for tests and
/// setup code.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl Combinations {
    /// Sequence over the `k`-subsets of `0..n`. Empty when `k > n`.
    ///
    /// `k == 0` produces exactly one (empty) subset.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            exhausted: k > n,
        }
    }

    /// Rewind to before the first subset.
    pub fn reset(&mut self) {
        let k = self.indices.len();
        for (slot, value) in self.indices.iter_mut().zip(0..k) {
            *slot = value;
        }
        self.started = false;
        self.exhausted = k > self.n;
    }

    /// Move to the next subset. Returns `false` once the sequence is done.
    pub fn advance(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        if !self.started {
            self.started = true;
            return true;
        }
        if !next_combination(&mut self.indices, self.n) {
            self.exhausted = true;
            return false;
        }
        true
    }

    /// The subset produced by the last successful [`advance`](Self::advance).
    pub fn current(&self) -> &[usize] {
        &self.indices
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            Some(self.indices.clone())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomial_small_values() {
        assert_eq!(binomial(0, 0), Some(1));
        assert_eq!(binomial(4, 0), Some(1));
        assert_eq!(binomial(4, 4), Some(1));
        assert_eq!(binomial(4, 3), Some(4));
        assert_eq!(binomial(6, 3), Some(20));
        assert_eq!(binomial(3, 5), Some(0));
    }

    #[test]
    fn test_binomial_beyond_fifty() {
        // The old fixed-size memo table stopped at 50 factors.
        assert_eq!(binomial(100, 3), Some(161_700));
        assert_eq!(binomial(67, 33), Some(14_226_520_737_620_288_370));
    }

    #[test]
    fn test_binomial_overflow() {
        assert_eq!(binomial(200, 100), None);
    }

    #[test]
    fn test_next_combination_walks_lexicographically() {
        let mut subset = vec![0, 1, 2];
        let mut seen = vec![subset.clone()];
        while next_combination(&mut subset, 5) {
            seen.push(subset.clone());
        }
        assert_eq!(seen.len(), 10);
        assert_eq!(seen[1], vec![0, 1, 3]);
        assert_eq!(seen[9], vec![2, 3, 4]);
        let mut sorted = seen.clone();
        sorted.sort();
        assert_eq!(sorted, seen);
    }

    #[test]
    fn test_combinations_count_matches_binomial() {
        for n in 0..8 {
            for k in 0..=n + 1 {
                let count = Combinations::new(n, k).count() as u64;
                assert_eq!(Some(count), binomial(n, k), "n={} k={}", n, k);
            }
        }
    }

    #[test]
    fn test_combinations_reset_restarts() {
        let mut combos = Combinations::new(4, 3);
        let first: Vec<Vec<usize>> = combos.by_ref().collect();
        assert!(!combos.advance());

        combos.reset();
        let second: Vec<Vec<usize>> = combos.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_combinations_empty_subset() {
        let all: Vec<Vec<usize>> = Combinations::new(3, 0).collect();
        assert_eq!(all, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_combinations_k_greater_than_n() {
        let mut combos = Combinations::new(2, 3);
        assert!(!combos.advance());
    }
}
