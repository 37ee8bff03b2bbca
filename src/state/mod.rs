// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-run bookkeeping kept alongside the dynamic search state.

pub mod statistics;

pub use statistics::{Counters, Statistics};
