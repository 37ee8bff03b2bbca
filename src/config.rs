// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! JSON run configuration.
//!
//! ```json
//! { "factors": 4, "levels": 3, "strength": 3, "candidates": 50,
//!   "trials": 1, "seed": null,
//!   "ranges": [ { "factor": 3, "min": 9, "max": 13 } ] }
//! ```
//!
//! Only `factors` and `levels` are required. `ranges` overrides individual
//! factors after uniform initialization; the overrides are validated
//! together, so they may be listed in any order.

use crate::error::{AetgResult, ConfigError};
use crate::model::{FactorId, DEFAULT_CANDIDATES, DEFAULT_STRENGTH};
use crate::system::ComponentSystem;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One factor's level range override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeOverride {
    pub factor: usize,
    pub min: u32,
    pub max: u32,
}

/// Everything needed to run the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    pub factors: usize,
    pub levels: usize,
    #[serde(default = "default_strength")]
    pub strength: usize,
    #[serde(default = "default_candidates")]
    pub candidates: usize,
    #[serde(default = "default_trials")]
    pub trials: usize,
    /// Fixed seed for reproducible runs; OS entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ranges: Vec<RangeOverride>,
}

fn default_strength() -> usize {
    DEFAULT_STRENGTH
}

fn default_candidates() -> usize {
    DEFAULT_CANDIDATES
}

fn default_trials() -> usize {
    1
}

impl GeneratorConfig {
    /// A uniform configuration with default strength, candidates and trials.
    pub fn new(factors: usize, levels: usize) -> Self {
        Self {
            factors,
            levels,
            strength: DEFAULT_STRENGTH,
            candidates: DEFAULT_CANDIDATES,
            trials: default_trials(),
            seed: None,
            ranges: Vec::new(),
        }
    }

    pub fn from_json_str(json: &str) -> AetgResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> AetgResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Check the search parameters. The system itself is checked by
    /// [`build_system`](Self::build_system).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strength == 0 {
            return Err(ConfigError::InvalidStrength(self.strength));
        }
        if self.candidates == 0 {
            return Err(ConfigError::NoCandidates);
        }
        if self.trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        Ok(())
    }

    /// The validated component system this configuration describes.
    pub fn build_system(&self) -> Result<ComponentSystem, ConfigError> {
        let mut system = ComponentSystem::uniform(self.factors, self.levels)?;
        for range in &self.ranges {
            system.set_level_range(FactorId::new(range.factor), range.min, range.max)?;
        }
        system.validate()?;
        Ok(system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AetgError;
    use crate::model::Level;

    #[test]
    fn test_defaults_applied() {
        let config = GeneratorConfig::from_json_str(r#"{ "factors": 4, "levels": 3 }"#).unwrap();
        assert_eq!(config, GeneratorConfig::new(4, 3));
        assert_eq!(config.strength, 3);
        assert_eq!(config.candidates, 50);
    }

    #[test]
    fn test_range_overrides() {
        // Factor 0 grows into ids freed by moving factor 1 up.
        let json = r#"{
            "factors": 2, "levels": 2, "strength": 2, "seed": 42,
            "ranges": [ { "factor": 0, "min": 0, "max": 2 },
                        { "factor": 1, "min": 3, "max": 4 } ]
        }"#;
        let config = GeneratorConfig::from_json_str(json).unwrap();
        assert_eq!(config.seed, Some(42));
        let system = config.build_system().unwrap();
        assert_eq!(system.max_level(FactorId::new(0)), Some(Level::new(2)));
        assert_eq!(system.t_way_configuration_count(2), Some(6));
    }

    #[test]
    fn test_sparse_overrides_rejected() {
        let mut config = GeneratorConfig::new(3, 2);
        config.strength = 2;
        config.ranges.push(RangeOverride {
            factor: 2,
            min: 4_000_000_000,
            max: 4_000_000_001,
        });
        assert_eq!(
            config.build_system(),
            Err(ConfigError::LevelGap {
                factor: 2,
                expected: 4,
                found: 4_000_000_000
            })
        );
    }

    #[test]
    fn test_overlapping_overrides_rejected() {
        let mut config = GeneratorConfig::new(3, 2);
        config.ranges.push(RangeOverride { factor: 0, min: 0, max: 2 });
        assert_eq!(
            config.build_system(),
            Err(ConfigError::OverlappingRanges { first: 0, second: 1 })
        );
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        assert!(matches!(
            GeneratorConfig::from_json_str(r#"{ "factors": 4, "levels": 3, "strength": 0 }"#),
            Err(AetgError::Config(ConfigError::InvalidStrength(0)))
        ));
        assert!(matches!(
            GeneratorConfig::from_json_str(r#"{ "factors": 4, "levels": 3, "trials": 0 }"#),
            Err(AetgError::Config(ConfigError::NoTrials))
        ));
        assert!(matches!(
            GeneratorConfig::from_json_str(r#"{ "factors": 4 }"#),
            Err(AetgError::Json(_))
        ));
        assert!(matches!(
            GeneratorConfig::from_json_str(r#"{ "factors": 4, "levels": 3, "colour": 1 }"#),
            Err(AetgError::Json(_))
        ));
    }

    #[test]
    fn test_zero_factors_rejected_by_build() {
        let config = GeneratorConfig::new(0, 3);
        assert_eq!(config.build_system(), Err(ConfigError::NoFactors(0)));
    }
}
