// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Phase trait for the greedy generation engine.
//!
//! The engine works by running phases in sequence. Each phase may run for
//! several rounds before handing over to the next one.
//!
//! # Example
//!
//! ```
//! use aetg_search::engine::{Phase, PhaseResult};
//! use aetg_search::context::GenerationContext;
//!
//! #[derive(Debug)]
//! struct ThreeRounds;
//!
//! impl Phase for ThreeRounds {
//!     fn try_phase(&mut self, _ctx: &mut GenerationContext, round: usize) -> PhaseResult {
//!         if round < 2 {
//!             PhaseResult::Repeat
//!         } else {
//!             PhaseResult::Advance
//!         }
//!     }
//!
//!     fn name(&self) -> &str {
//!         "ThreeRounds"
//!     }
//! }
//! ```

use crate::context::GenerationContext;
use std::fmt::Debug;

/// Result of running a phase for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseResult {
    /// Phase is done. Move to the next phase in sequence.
    Advance,

    /// Stay at the same phase with the next round.
    /// Lets one phase run many times (e.g., once per committed row).
    Repeat,

    /// Generation is complete. The engine stops.
    Converged,

    /// Pause execution. The engine returns control with its position kept.
    /// Useful for testing and inspection of intermediate states.
    Suspend,
}

/// A phase that ends a generation program.
///
/// Terminal phases never return `Advance`, so a sequence ending in one can
/// never run off its end.
pub trait TerminalPhase: Phase {}

/// One step of the generation program.
pub trait Phase: Debug {
    /// Run this phase for round `round`.
    ///
    /// The round starts at 0 and increments each time the phase returns
    /// `Repeat`.
    fn try_phase(&mut self, ctx: &mut GenerationContext, round: usize) -> PhaseResult;

    /// Optional: Get a name for this phase (for logging).
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
