//! Per-method summary statistics.
//!
//! NaN times are skipped by the statistics but still count as frames for FPS.

use hogbench_core::{MethodTable, Summary};

/// Aggregate one method's table.
pub fn summarize(table: &MethodTable) -> Summary {
    let times: Vec<f64> = table.times_ms().filter(|t| !t.is_nan()).collect();

    let total_time_s = times.iter().sum::<f64>() / 1000.0;
    let fps = if total_time_s > 0.0 {
        table.len() as f64 / total_time_s
    } else {
        0.0
    };

    Summary {
        method: table.method.clone(),
        frames: table.len(),
        total_time_s,
        mean_time_ms: mean(&times),
        std_dev_ms: sample_std_dev(&times),
        fps,
    }
}

pub fn summarize_all<'a>(tables: impl IntoIterator<Item = &'a MethodTable>) -> Vec<Summary> {
    tables.into_iter().map(summarize).collect()
}

/// Arithmetic mean; NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Standard deviation with the N-1 denominator; NaN below two values.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (sq / (values.len() - 1) as f64).sqrt()
}
