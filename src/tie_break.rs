// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Randomized tie-breaking rules used when scoring levels and candidates.
//!
//! Two rules are in play:
//!
//! - [`EscalatingTieBreak`]: an equal score replaces the current pick with
//!   probability 1/2, then 1/3, 1/4, ... where the denominator only advances
//!   when a replacement actually happens. Earlier ties are favored, and the
//!   outcome depends on scan order. Used for the anchor level, per-factor
//!   coverage maximization and best-of-M selection.
//! - [`UniformTieBreak`]: reservoir sampling, so every tied item is equally
//!   likely. Used by the early-factor raw-count fallback.

use rand::Rng;

/// Order-dependent tie rule with an escalating denominator.
#[derive(Debug, Clone)]
pub struct EscalatingTieBreak {
    denominator: u32,
}

impl EscalatingTieBreak {
    pub fn new() -> Self {
        Self { denominator: 2 }
    }

    /// Decide whether a new tie replaces the current pick.
    pub fn replace<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if rng.gen_range(0..self.denominator) == 0 {
            self.denominator = self.denominator.saturating_add(1);
            true
        } else {
            false
        }
    }
}

impl Default for EscalatingTieBreak {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform tie rule over the items tied at the current best score.
#[derive(Debug, Clone, Default)]
pub struct UniformTieBreak {
    tied: u32,
}

impl UniformTieBreak {
    pub fn new() -> Self {
        Self::default()
    }

    /// A strictly better score was seen; it becomes the only tied item.
    pub fn restart(&mut self) {
        self.tied = 1;
    }

    /// Decide whether another item at the best score replaces the pick.
    pub fn replace<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.tied = self.tied.saturating_add(1);
        rng.gen_range(0..self.tied) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_escalating_denominator_advances_only_on_replace() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut tie = EscalatingTieBreak::new();
        let mut replacements = 0;
        for _ in 0..1000 {
            if tie.replace(&mut rng) {
                replacements += 1;
            }
        }
        assert_eq!(tie.denominator, 2 + replacements);
        // Harmonic-like growth: far fewer replacements than trials.
        assert!(replacements > 0 && replacements < 100);
    }

    #[test]
    fn test_uniform_tie_break_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut hits = [0u32; 4];
        for _ in 0..4000 {
            let mut tie = UniformTieBreak::new();
            tie.restart();
            let mut pick = 0;
            for item in 1..4 {
                if tie.replace(&mut rng) {
                    pick = item;
                }
            }
            hits[pick] += 1;
        }
        for count in hits {
            assert!((800..1200).contains(&count), "hits = {:?}", hits);
        }
    }
}
