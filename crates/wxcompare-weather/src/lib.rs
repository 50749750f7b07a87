//! Weather logic for WeatherCompare
//!
//! Derives prioritized advice from a set of city observations and builds the
//! side-by-side comparison table.

pub mod types;
pub mod advice;
pub mod compare;

pub use types::*;
pub use advice::{advise, evaluate, evaluate_with, AdviceThresholds, Conditions};
pub use compare::{compare, ComparisonCell, ComparisonRow, ComparisonTable, Metric, Trend};
