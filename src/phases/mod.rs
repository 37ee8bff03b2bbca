// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generation phases.
//!
//! # Organization
//!
//! - `seed`: SeedPhase commits the all-minimum and all-maximum rows
//! - `search`: SearchPhase runs one best-of-M greedy round per call
//! - Built-in terminal phases: `ConvergedPhase`, `SuspendPhase`

pub mod search;
pub mod seed;

pub use search::SearchPhase;
pub use seed::SeedPhase;

use crate::context::GenerationContext;
use crate::engine::{Phase, PhaseResult, TerminalPhase};

/// Built-in terminal phase that ends generation.
#[derive(Debug)]
pub struct ConvergedPhase;

impl Phase for ConvergedPhase {
    fn try_phase(&mut self, _ctx: &mut GenerationContext, _round: usize) -> PhaseResult {
        PhaseResult::Converged
    }

    fn name(&self) -> &str {
        "Converged"
    }
}

impl TerminalPhase for ConvergedPhase {}

/// Built-in phase that suspends the engine.
///
/// Used in tests to inspect the context between phases, for instance right
/// after seeding.
#[derive(Debug)]
pub struct SuspendPhase;

impl Phase for SuspendPhase {
    fn try_phase(&mut self, _ctx: &mut GenerationContext, _round: usize) -> PhaseResult {
        PhaseResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPhase for SuspendPhase {}
