//! Per-frame measurement types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One processed frame as written by a benchmark run.
///
/// `time_ms` is NaN when the source cell was empty or not a number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub frame: u64,
    pub width: u32,
    pub height: u32,
    pub time_ms: f64,
}

impl Measurement {
    pub fn new(frame: u64, width: u32, height: u32, time_ms: f64) -> Self {
        Self {
            frame,
            width,
            height,
            time_ms,
        }
    }
}

/// A measurement together with its derived columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub frame: u64,
    pub width: u32,
    pub height: u32,
    pub time_ms: f64,
    /// `width * height`.
    pub pixels: u64,
    /// `"{width}x{height}"`.
    pub resolution: String,
    /// Running sum of `time_ms` in file order, in seconds.
    pub cumulative_s: f64,
}

/// All frames recorded for one benchmark method, in file order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodTable {
    pub method: String,
    pub source: PathBuf,
    pub rows: Vec<FrameRecord>,
}

impl MethodTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the raw per-frame times.
    pub fn times_ms(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|r| r.time_ms)
    }
}
