//! Loading and aggregation for hogbench.
//!
//! This crate provides:
//! - Loading per-method measurement files with per-file failure isolation
//! - Derived columns (pixel count, resolution label, cumulative time)
//! - Per-method summary statistics and the text report
//! - Pure chart-series computation

pub mod analyzer;
pub mod enrich;
pub mod loader;
pub mod metrics;
pub mod report;
pub mod series;

pub use analyzer::{Analysis, Analyzer};
pub use loader::{LoadReport, Loader, MethodOutcome, SkipReason};
pub use metrics::summarize;
pub use report::Report;
