//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the generic nested containers (`Matrix`, `Vector`) and their `Shape`
//! - the demo system (`Scenario`)
//! - backend tuning (`SolverConfig`)

pub mod types;

pub use types::*;
