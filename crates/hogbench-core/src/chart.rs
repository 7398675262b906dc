//! Backend-independent chart descriptions.
//!
//! The analysis crate turns tables and summaries into [`Chart`] values; a
//! renderer turns those into image files. Nothing here knows how to draw.

use serde::{Deserialize, Serialize};

/// Output image encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// The fixed set of charts produced per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    /// Mean time per resolution.
    Scalability,
    /// Running total of time per frame.
    Cumulative,
    TotalTime,
    Fps,
    /// Raw per-frame time.
    Timeline,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::Scalability,
        ChartKind::Cumulative,
        ChartKind::TotalTime,
        ChartKind::Fps,
        ChartKind::Timeline,
    ];

    pub fn file_stem(&self) -> &'static str {
        match self {
            ChartKind::Scalability => "benchmark_scalability",
            ChartKind::Cumulative => "benchmark_cumulative",
            ChartKind::TotalTime => "benchmark_total_time",
            ChartKind::Fps => "benchmark_fps",
            ChartKind::Timeline => "benchmark_timeline",
        }
    }

    pub fn file_name(&self, format: ImageFormat) -> String {
        format!("{}.{}", self.file_stem(), format.extension())
    }

    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Scalability => "Performance vs Resolution (Scalability)",
            ChartKind::Cumulative => "Cumulative Processing Time (Video Progress)",
            ChartKind::TotalTime => "Total Execution Time (Lower is Better)",
            ChartKind::Fps => "Average FPS (Higher is Better)",
            ChartKind::Timeline => "Per-Frame Processing Time (Stability)",
        }
    }

    pub fn x_desc(&self) -> &'static str {
        match self {
            ChartKind::Scalability => "Image Size (Pixels)",
            ChartKind::Cumulative | ChartKind::Timeline => "Frame Number",
            ChartKind::TotalTime | ChartKind::Fps => "",
        }
    }

    pub fn y_desc(&self) -> &'static str {
        match self {
            ChartKind::Scalability => "Processing Time (ms)",
            ChartKind::Cumulative => "Total Time Elapsed (Seconds)",
            ChartKind::TotalTime => "Time (Seconds)",
            ChartKind::Fps => "FPS",
            ChartKind::Timeline => "Time (ms)",
        }
    }

    /// Canvas size in pixels.
    pub fn size(&self) -> (u32, u32) {
        match self {
            ChartKind::Scalability | ChartKind::Cumulative => (1000, 600),
            ChartKind::TotalTime | ChartKind::Fps => (800, 500),
            ChartKind::Timeline => (1200, 500),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// One named polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub name: String,
    pub points: Vec<(f64, f64)>,
    /// Per-point annotations; empty when the series is not annotated.
    pub labels: Vec<String>,
    pub markers: bool,
    pub stroke_width: u32,
    /// 0.0 (invisible) to 1.0 (opaque).
    pub opacity: f64,
}

impl LineSeries {
    pub fn new(name: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        Self {
            name: name.into(),
            points,
            labels: Vec::new(),
            markers: false,
            stroke_width: 2,
            opacity: 1.0,
        }
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_markers(mut self) -> Self {
        self.markers = true;
        self
    }

    pub fn with_stroke(mut self, width: u32, opacity: f64) -> Self {
        self.stroke_width = width;
        self.opacity = opacity;
        self
    }

    /// Points whose coordinates are both finite, with their labels.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64, Option<&str>)> + '_ {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, (x, y))| x.is_finite() && y.is_finite())
            .map(|(i, &(x, y))| (x, y, self.labels.get(i).map(String::as_str)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Text drawn above the bar.
    pub annotation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSet {
    pub bars: Vec<Bar>,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartBody {
    Lines(Vec<LineSeries>),
    Bars(BarSet),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub kind: ChartKind,
    pub body: ChartBody,
}

impl Chart {
    pub fn new(kind: ChartKind, body: ChartBody) -> Self {
        Self { kind, body }
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        let names: Vec<_> = ChartKind::ALL
            .iter()
            .map(|k| k.file_name(ImageFormat::Png))
            .collect();
        assert_eq!(
            names,
            [
                "benchmark_scalability.png",
                "benchmark_cumulative.png",
                "benchmark_total_time.png",
                "benchmark_fps.png",
                "benchmark_timeline.png",
            ]
        );
        assert_eq!(ChartKind::Fps.file_name(ImageFormat::Svg), "benchmark_fps.svg");
    }

    #[test]
    fn test_finite_points_skips_nan() {
        let series = LineSeries::new("m", vec![(0.0, 1.0), (1.0, f64::NAN), (2.0, 3.0)])
            .with_labels(vec!["a".into(), "b".into(), "c".into()]);
        let points: Vec<_> = series.finite_points().collect();
        assert_eq!(points, vec![(0.0, 1.0, Some("a")), (2.0, 3.0, Some("c"))]);
    }
}
