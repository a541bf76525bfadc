//! Numerical backend: the dense solver interface and its nalgebra implementation.

pub mod ols;

pub use ols::*;
