//! Reporting: text rendering of matrices, vectors and full runs.
//!
//! Formatting lives here so the conversion and solve code stays free of I/O.

pub mod format;

pub use format::*;
