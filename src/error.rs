// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for configuration and tuple-universe construction.
//!
//! Index lookups never error: accessors on [`ComponentSystem`](crate::system::ComponentSystem)
//! return `Option` instead. The variants here cover the remaining fallible
//! operations, which are configuration, universe construction and the
//! I/O performed by the ambient layers.

use std::io;
use thiserror::Error;

/// Rejected configuration. Operations returning this leave no partial state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A system needs at least one factor.
    #[error("factor count must be positive, got {0}")]
    NoFactors(usize),

    /// Every factor needs at least one level.
    #[error("level count must be positive, got {0}")]
    NoLevels(usize),

    /// Factor index outside `0..factor_count`.
    #[error("factor {factor} is out of range (system has {factor_count} factors)")]
    FactorOutOfRange { factor: usize, factor_count: usize },

    /// `factors * levels` global level ids do not fit in a `u32`.
    #[error("{factors} factors with {levels} levels each exceed the level id space")]
    LevelIdOverflow { factors: usize, levels: usize },

    /// A level range whose minimum exceeds its maximum.
    #[error("factor {factor} has inverted level range [{min}, {max}]")]
    InvertedRange { factor: usize, min: u32, max: u32 },

    /// Two factors claim the same level id.
    #[error("level ranges of factors {first} and {second} overlap")]
    OverlappingRanges { first: usize, second: usize },

    /// Level ids must run contiguously from 0; `factor` starts past the next free id.
    #[error("level range of factor {factor} starts at {found}, expected {expected}")]
    LevelGap { factor: usize, expected: u32, found: u32 },

    /// Interaction strength must be at least one.
    #[error("strength must be positive, got {0}")]
    InvalidStrength(usize),

    /// At least one candidate per round is required.
    #[error("candidate count must be positive")]
    NoCandidates,

    /// At least one trial is required.
    #[error("trial count must be positive")]
    NoTrials,
}

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum AetgError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `(max_system_level + 1)^strength` does not fit in a 64-bit tuple key.
    #[error("tuple keys overflow for strength {strength} with {levels} distinct level ids")]
    TupleKeyOverflow { strength: usize, levels: u64 },

    /// The same tuple was produced twice while building the universe.
    #[error("duplicate tuple {levels:?} generated for strength {strength}")]
    DuplicateTuple { strength: usize, levels: Vec<u32> },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid configuration file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type AetgResult<T> = Result<T, AetgError>;
