//! Dividly Core - dividend cadence detection and income projection.
//!
//! This crate contains the forecasting engine for Dividly. It is
//! persistence-agnostic: callers load dividend records from storage and
//! hand them to the engine, which returns freshly allocated projection,
//! chart, ranking, exclusion and calendar models. The engine holds no
//! state between calls and is a pure function of its input.

pub mod dividends;
pub mod errors;
pub mod projection;
pub mod utils;

// Re-export common types from the dividend and projection modules
pub use dividends::*;
pub use projection::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
