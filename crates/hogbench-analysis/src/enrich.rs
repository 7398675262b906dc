use hogbench_core::{FrameRecord, Measurement, MethodTable};
use std::path::PathBuf;

/// Attach derived columns to a method's measurements.
///
/// Rows keep their file order; the cumulative column is a prefix sum over
/// that order. A NaN time yields a NaN cumulative value on that row only.
pub fn enrich(method: &str, source: PathBuf, rows: &[Measurement]) -> MethodTable {
    let mut running_ms = 0.0;
    let rows = rows
        .iter()
        .map(|m| {
            let cumulative_s = if m.time_ms.is_nan() {
                f64::NAN
            } else {
                running_ms += m.time_ms;
                running_ms / 1000.0
            };
            FrameRecord {
                frame: m.frame,
                width: m.width,
                height: m.height,
                time_ms: m.time_ms,
                pixels: u64::from(m.width) * u64::from(m.height),
                resolution: format!("{}x{}", m.width, m.height),
                cumulative_s,
            }
        })
        .collect();

    MethodTable {
        method: method.to_string(),
        source,
        rows,
    }
}
