// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Greedy construction of t-way covering arrays.
//!
//! Given k factors, each with its own range of levels, a covering array is a
//! set of rows such that every combination of levels across any t factors
//! appears in at least one row. This crate builds one with the AETG greedy
//! heuristic: keep the universe of still-uncovered t-way tuples, build many
//! randomized candidate rows against it, commit the one covering the most,
//! and repeat until nothing is left.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Configured once and read-only for the run:
//! - The component system (factors and their level ranges)
//! - Interaction strength t and candidates per round M
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Rebuilt for every trial:
//! - The uncovered tuple set and per-level occurrence counts
//! - The committed test suite
//!
//! # Search Algorithm
//!
//! The engine runs three phases:
//!
//! 1. **SeedPhase**: commit the all-minimum and all-maximum rows
//! 2. **SearchPhase**: each round generates M candidates, rescored against the
//!    universe, and commits the best, until the universe is empty
//! 3. **ConvergedPhase**: stop
//!
//! # Example
//!
//! ```
//! use aetg_search::config::GeneratorConfig;
//! use aetg_search::trials::run_trials;
//!
//! let mut config = GeneratorConfig::new(4, 3);
//! config.seed = Some(42);
//! let summary = run_trials(&config).unwrap();
//! assert_eq!(summary.universe_size, 108);
//! assert_eq!(summary.best.len(), summary.best_size);
//! ```
//!
//! # References
//!
//! - Cohen, D. M., Dalal, S. R., Fredman, M. L., Patton, G. C. (1997). "The AETG
//!   system: an approach to testing based on combinatorial design." IEEE TSE 23(7).

pub mod candidate;
pub mod combinatorics;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod model;
pub mod output;
pub mod phases;
pub mod state;
pub mod suite;
pub mod system;
pub mod tie_break;
pub mod trials;
pub mod universe;

// Re-export commonly used types
pub use candidate::{Candidate, CandidateGenerator};
pub use context::GenerationContext;
pub use engine::{Phase, PhaseResult, SearchEngine};
pub use error::{AetgError, AetgResult, ConfigError};
pub use suite::TestSuite;
pub use system::ComponentSystem;
pub use universe::TupleUniverse;
