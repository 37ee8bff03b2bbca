// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! t-way tuples and their packed hash keys.
//!
//! A tuple is the sequence of levels chosen for an increasing subset of
//! factors. Levels are globally unique per factor, so the level sequence
//! already pins down the factor subset, and two tuples are equal exactly when
//! their level sequences are.
//!
//! Tuples are stored as a position-weighted key
//! `Σ level_i · base^(t-1-i)` with `base = max_system_level + 1`. Every
//! level is below `base`, so the packing is a bijection onto `0..base^t` as
//! long as that bound fits in a `u64`, which [`TupleCodec::new`] checks.

use crate::model::Level;
use std::fmt;

/// A packed t-way tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tuple(u64);

impl Tuple {
    /// The packed key.
    pub fn key(self) -> u64 {
        self.0
    }
}

/// Encodes and decodes tuples of one fixed strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TupleCodec {
    base: u64,
    strength: usize,
}

impl TupleCodec {
    /// Codec for `strength`-way tuples over level ids `0..level_bound`.
    ///
    /// Returns None if `level_bound^strength` overflows a `u64`.
    pub fn new(level_bound: u64, strength: usize) -> Option<Self> {
        let exponent = u32::try_from(strength).ok()?;
        level_bound.max(1).checked_pow(exponent)?;
        Some(Self {
            base: level_bound.max(1),
            strength,
        })
    }

    /// Codec with base 1, used by empty universes before generation.
    pub(crate) fn unit(strength: usize) -> Self {
        Self { base: 1, strength }
    }

    pub fn strength(self) -> usize {
        self.strength
    }

    /// Pack `levels`, which must hold exactly `strength` levels below `base`.
    pub fn encode(self, levels: &[Level]) -> Tuple {
        debug_assert_eq!(levels.len(), self.strength);
        let mut key = 0u64;
        for level in levels {
            debug_assert!((level.value() as u64) < self.base);
            key = key * self.base + level.value() as u64;
        }
        Tuple(key)
    }

    /// Pack `levels` if every one of them is below `base`.
    ///
    /// Levels outside the codec's id space cannot belong to any tuple it
    /// produced, so callers treat None as "not in the universe".
    pub fn try_encode(self, levels: &[Level]) -> Option<Tuple> {
        if levels.len() != self.strength || levels.iter().any(|level| level.value() as u64 >= self.base) {
            return None;
        }
        Some(self.encode(levels))
    }

    /// Unpack `tuple` into `out`, replacing its contents.
    pub fn decode_into(self, tuple: Tuple, out: &mut Vec<Level>) {
        out.clear();
        out.resize(self.strength, Level::new(0));
        let mut key = tuple.0;
        for slot in out.iter_mut().rev() {
            *slot = Level::new((key % self.base) as u32);
            key /= self.base;
        }
    }

    /// Unpack `tuple` into a fresh vector.
    pub fn decode(self, tuple: Tuple) -> Vec<Level> {
        let mut out = Vec::with_capacity(self.strength);
        self.decode_into(tuple, &mut out);
        out
    }

    /// Displayable view of `tuple`.
    pub fn display(self, tuple: Tuple) -> TupleDisplay {
        TupleDisplay(self.decode(tuple))
    }
}

/// Formats a decoded tuple as "( a, b, c )".
pub struct TupleDisplay(Vec<Level>);

impl fmt::Display for TupleDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, level) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {}", level)?;
        }
        write!(f, " )")
    }
}
