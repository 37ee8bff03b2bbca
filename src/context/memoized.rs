// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable run configuration (Tier 1: MEMO).

use crate::candidate::CandidateGenerator;
use crate::error::ConfigError;
use crate::system::ComponentSystem;

/// Immutable data fixed for the whole run.
///
/// Every trial of a run reads the same system, strength and candidate count;
/// nothing in here changes once the context is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoizedData {
    /// Factors and their level ranges.
    pub system: ComponentSystem,

    /// Interaction strength t.
    pub strength: usize,

    /// Candidates generated per greedy round (M).
    pub candidates: usize,
}

impl MemoizedData {
    /// Check and freeze the run configuration.
    pub fn new(system: ComponentSystem, strength: usize, candidates: usize) -> Result<Self, ConfigError> {
        if strength == 0 {
            return Err(ConfigError::InvalidStrength(strength));
        }
        if candidates == 0 {
            return Err(ConfigError::NoCandidates);
        }
        system.validate()?;
        Ok(Self {
            system,
            strength,
            candidates,
        })
    }

    pub fn generator(&self) -> CandidateGenerator {
        CandidateGenerator::new(self.strength)
    }
}
