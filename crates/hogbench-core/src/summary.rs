use serde::{Deserialize, Serialize};

/// Aggregate statistics for one method.
///
/// Values are kept at full precision; rounding is a presentation concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub method: String,
    pub frames: usize,
    pub total_time_s: f64,
    pub mean_time_ms: f64,
    /// Sample standard deviation; NaN with fewer than two values.
    pub std_dev_ms: f64,
    /// Frames per second over the whole run; 0 when no time was recorded.
    pub fps: f64,
}
