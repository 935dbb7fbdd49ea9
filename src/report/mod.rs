//! Reporting utilities: formatted tables and summaries.

pub mod format;

pub use format::*;
