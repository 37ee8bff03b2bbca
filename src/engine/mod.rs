// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Phase-sequencing engine for greedy generation.
//!
//! The engine runs phases in order over a shared [`GenerationContext`]:
//! 1. Call try_phase(round) on the current phase
//! 2. If Advance: move to the next phase at round 0
//! 3. If Repeat: increment round, stay at the same phase
//! 4. If Converged: stop, generation is complete
//! 5. If Suspend: pause and return control to caller
//!
//! The standard program is `Seed → Search → Converged`, see
//! [`SearchEngine::standard`].
//!
//! # Example
//!
//! ```
//! use aetg_search::context::GenerationContext;
//! use aetg_search::engine::SearchEngine;
//! use aetg_search::system::ComponentSystem;
//!
//! let system = ComponentSystem::uniform(4, 3).unwrap();
//! let mut ctx = GenerationContext::new(system, 3, 50, Some(7)).unwrap();
//!
//! // Engine is consumed, returns Some(engine) only if suspended
//! assert!(SearchEngine::standard().search(&mut ctx).is_none());
//! assert!(ctx.state.universe.is_empty());
//! ```

pub mod phase;

pub use phase::{Phase, PhaseResult, TerminalPhase};

use crate::context::GenerationContext;
use crate::phases::{ConvergedPhase, SearchPhase, SeedPhase};
use tracing::debug;

/// Position of the engine within its phase sequence.
#[derive(Debug, Clone, Copy, Default)]
struct Cursor {
    phase_index: usize,
    round: usize,
}

/// Engine that runs phases in sequence until one converges.
pub struct SearchEngine {
    phases: Vec<Box<dyn Phase>>,

    cursor: Cursor,

    /// Statistics: number of try_phase calls.
    try_count: u64,
}

impl SearchEngine {
    /// Create a new engine with the given phases.
    ///
    /// Prefer [`EngineBuilder`], which enforces a terminal phase. Running
    /// off the end of an unterminated sequence counts as convergence.
    pub fn new(phases: Vec<Box<dyn Phase>>) -> Self {
        Self {
            phases,
            cursor: Cursor::default(),
            try_count: 0,
        }
    }

    /// The standard program: seed rows, greedy rounds, stop.
    pub fn standard() -> Self {
        EngineBuilder::new()
            .add(Box::new(SeedPhase))
            .add(Box::new(SearchPhase))
            .terminal(Box::new(ConvergedPhase))
            .build()
    }

    /// Run phases until convergence or suspension.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended; calling `search` again resumes at the
    ///   phase after the suspending one
    /// - `None` once converged
    pub fn search(mut self, ctx: &mut GenerationContext) -> Option<Self> {
        loop {
            let Cursor { phase_index, round } = self.cursor;
            let Some(phase) = self.phases.get_mut(phase_index) else {
                return None;
            };
            self.try_count += 1;
            let result = phase.try_phase(ctx, round);
            if round == 0 {
                debug!(phase = phase.name(), ?result, "phase entered");
            }

            match result {
                PhaseResult::Advance => {
                    self.cursor = Cursor {
                        phase_index: phase_index + 1,
                        round: 0,
                    };
                }
                PhaseResult::Repeat => {
                    self.cursor.round += 1;
                }
                PhaseResult::Converged => {
                    return None;
                }
                PhaseResult::Suspend => {
                    self.cursor = Cursor {
                        phase_index: phase_index + 1,
                        round: 0,
                    };
                    return Some(self);
                }
            }
        }
    }

    /// Number of try_phase calls so far.
    pub fn statistics(&self) -> u64 {
        self.try_count
    }
}

/// Builds a phase sequence that always ends in a terminal phase.
#[derive(Default)]
pub struct EngineBuilder {
    phases: Vec<Box<dyn Phase>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, phase: Box<dyn Phase>) -> Self {
        self.phases.push(phase);
        self
    }

    /// Close the sequence with a terminal phase.
    pub fn terminal<T: TerminalPhase + 'static>(self, phase: Box<T>) -> TerminatedBuilder {
        let mut phases = self.phases;
        phases.push(phase);
        TerminatedBuilder { phases }
    }
}

/// A phase sequence with its terminal phase in place.
pub struct TerminatedBuilder {
    phases: Vec<Box<dyn Phase>>,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.phases)
    }
}
