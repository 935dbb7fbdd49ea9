//! Price forecasting via a fitted linear trend.
//!
//! - `split`: seeded train/test partition
//! - `engine`: fit, evaluate, project

pub mod engine;
pub mod split;

pub use engine::*;
pub use split::*;
