//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - input configuration (`AnalysisConfig`, `SourceKind`, `SyntheticMode`)
//! - validated observations (`Observation`, `Series`)
//! - fit and forecast outputs (`FitModel`, `EvaluationResult`, `ForecastResult`, etc.)

pub mod types;

pub use types::*;
