//! Input/output helpers.
//!
//! - series/forecast CSV exports (`export`)
//! - forecast JSON read/write (`forecast`)

pub mod export;
pub mod forecast;

pub use export::*;
pub use forecast::*;
