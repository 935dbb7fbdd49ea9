//! Numerical routines.

pub mod ols;

pub use ols::*;
