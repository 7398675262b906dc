//! Core types for the hogbench toolchain.
//!
//! This crate defines the data structures shared by the analysis, plotting
//! and CLI crates: raw measurements, enriched per-method tables, summary
//! records, chart descriptions, the analysis configuration and the error type.
//! It contains no pipeline logic.

pub mod chart;
pub mod config;
pub mod error;
pub mod measurement;
pub mod summary;

pub use chart::{Bar, BarSet, Chart, ChartBody, ChartKind, ImageFormat, LineSeries, Rgb};
pub use config::{AnalysisConfig, MethodSpec};
pub use error::{Error, Result};
pub use measurement::{FrameRecord, Measurement, MethodTable};
pub use summary::Summary;
