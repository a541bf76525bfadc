//! `lsq-bridge` library crate.
//!
//! Moves numeric data between nested `Vec` containers and nalgebra's dense types,
//! and solves `A x ≈ b` in the least-squares sense.
//!
//! The binary (`lsq`) is a thin wrapper around this library so that the
//! conversion and solve layers are testable without spawning processes.

pub mod app;
pub mod convert;
pub mod domain;
pub mod error;
pub mod math;
pub mod report;
pub mod solve;
