// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Domain types for covering-array construction.
//!
//! - Level, FactorId: globally numbered level ids and factor indices
//! - LevelRange: the inclusive levels owned by one factor
//! - TestCase: a (possibly partial) row of level assignments
//! - Tuple, TupleCodec: packed t-way tuples

pub mod level;
pub mod test_case;
pub mod tuple;

pub use level::{FactorId, Level, LevelRange};
pub use test_case::TestCase;
pub use tuple::{Tuple, TupleCodec};

/// Default interaction strength.
pub const DEFAULT_STRENGTH: usize = 3;

/// Candidates generated per round, as in the AETG literature.
pub const DEFAULT_CANDIDATES: usize = 50;
