//! Pure chart computation.
//!
//! Each function here turns enriched tables or summaries into a [`Chart`]
//! description. Rendering happens elsewhere.

use crate::report::format_value;
use hogbench_core::{Bar, BarSet, Chart, ChartBody, ChartKind, LineSeries, MethodTable, Rgb, Summary};
use std::collections::BTreeMap;

pub const TOTAL_TIME_COLOR: Rgb = Rgb(0xe7, 0x4c, 0x3c);
pub const FPS_COLOR: Rgb = Rgb(0x2e, 0xcc, 0x71);

/// Mean processing time for one distinct pixel count.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalabilityPoint {
    pub pixels: u64,
    pub mean_ms: f64,
    /// Resolution label of the first row with this pixel count.
    pub resolution: String,
}

/// Group a table by pixel count, ascending.
pub fn scalability_points(table: &MethodTable) -> Vec<ScalabilityPoint> {
    struct Group<'a> {
        sum: f64,
        count: usize,
        resolution: &'a str,
    }

    let mut groups: BTreeMap<u64, Group<'_>> = BTreeMap::new();
    for row in &table.rows {
        let group = groups.entry(row.pixels).or_insert(Group {
            sum: 0.0,
            count: 0,
            resolution: &row.resolution,
        });
        if !row.time_ms.is_nan() {
            group.sum += row.time_ms;
            group.count += 1;
        }
    }

    groups
        .into_iter()
        .map(|(pixels, g)| ScalabilityPoint {
            pixels,
            mean_ms: if g.count == 0 {
                f64::NAN
            } else {
                g.sum / g.count as f64
            },
            resolution: g.resolution.to_string(),
        })
        .collect()
}

pub fn scalability_chart(tables: &[MethodTable]) -> Chart {
    let series = tables
        .iter()
        .map(|table| {
            let points = scalability_points(table);
            let (xy, labels): (Vec<_>, Vec<_>) = points
                .into_iter()
                .map(|p| ((p.pixels as f64, p.mean_ms), format!(" {}", p.resolution)))
                .unzip();
            LineSeries::new(&table.method, xy)
                .with_labels(labels)
                .with_markers()
        })
        .collect();
    Chart::new(ChartKind::Scalability, ChartBody::Lines(series))
}

pub fn cumulative_chart(tables: &[MethodTable]) -> Chart {
    let series = tables
        .iter()
        .map(|table| {
            let points = table
                .rows
                .iter()
                .map(|r| (r.frame as f64, r.cumulative_s))
                .collect();
            LineSeries::new(&table.method, points)
        })
        .collect();
    Chart::new(ChartKind::Cumulative, ChartBody::Lines(series))
}

pub fn timeline_chart(tables: &[MethodTable]) -> Chart {
    let series = tables
        .iter()
        .map(|table| {
            let points = table
                .rows
                .iter()
                .map(|r| (r.frame as f64, r.time_ms))
                .collect();
            LineSeries::new(&table.method, points).with_stroke(1, 0.6)
        })
        .collect();
    Chart::new(ChartKind::Timeline, ChartBody::Lines(series))
}

pub fn total_time_chart(summaries: &[Summary]) -> Chart {
    let bars = summaries
        .iter()
        .map(|s| Bar {
            label: s.method.clone(),
            value: s.total_time_s,
            annotation: format!("{}s", format_value(s.total_time_s)),
        })
        .collect();
    Chart::new(
        ChartKind::TotalTime,
        ChartBody::Bars(BarSet {
            bars,
            color: TOTAL_TIME_COLOR,
        }),
    )
}

pub fn fps_chart(summaries: &[Summary]) -> Chart {
    let bars = summaries
        .iter()
        .map(|s| Bar {
            label: s.method.clone(),
            value: s.fps,
            annotation: format_value(s.fps),
        })
        .collect();
    Chart::new(
        ChartKind::Fps,
        ChartBody::Bars(BarSet {
            bars,
            color: FPS_COLOR,
        }),
    )
}

/// All five charts, in [`ChartKind::ALL`] order.
pub fn build_charts(tables: &[MethodTable], summaries: &[Summary]) -> Vec<Chart> {
    vec![
        scalability_chart(tables),
        cumulative_chart(tables),
        total_time_chart(summaries),
        fps_chart(summaries),
        timeline_chart(tables),
    ]
}
