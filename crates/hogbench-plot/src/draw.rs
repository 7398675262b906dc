//! `plotters` renderer for PNG and SVG output.

use crate::font::{ensure_registered, FONT_FAMILY};
use crate::renderer::ChartRenderer;
use hogbench_core::{BarSet, Chart, ChartBody, ChartKind, Error, ImageFormat, LineSeries as SeriesSpec, Result, Rgb};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;
use std::path::{Path, PathBuf};

const PALETTE: [RGBColor; 6] = [
    RGBColor(0x34, 0x8a, 0xbd),
    RGBColor(0xe2, 0x4a, 0x33),
    RGBColor(0x98, 0x8e, 0xd5),
    RGBColor(0x77, 0x77, 0x77),
    RGBColor(0xfb, 0xc1, 0x5e),
    RGBColor(0x8e, 0xba, 0x42),
];

fn series_color(idx: usize) -> RGBColor {
    PALETTE[idx % PALETTE.len()]
}

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

/// Renders charts with `plotters`, as PNG bitmaps or SVG documents.
pub struct PlottersRenderer {
    format: ImageFormat,
    font: PathBuf,
}

impl PlottersRenderer {
    /// Create a renderer, registering the chart font first.
    ///
    /// Fails when no font can be loaded, since every chart carries text.
    pub fn new(format: ImageFormat, font_path: Option<&Path>) -> Result<Self> {
        let font = ensure_registered(font_path)?;
        Ok(Self { format, font })
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn font(&self) -> &Path {
        &self.font
    }
}

impl ChartRenderer for PlottersRenderer {
    fn name(&self) -> &'static str {
        match self.format {
            ImageFormat::Png => "plotters-png",
            ImageFormat::Svg => "plotters-svg",
        }
    }

    fn render(&self, chart: &Chart, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(chart.kind.file_name(self.format));
        let size = chart.kind.size();
        match self.format {
            ImageFormat::Png => draw(BitMapBackend::new(&path, size).into_drawing_area(), chart)?,
            ImageFormat::Svg => draw(SVGBackend::new(&path, size).into_drawing_area(), chart)?,
        }
        Ok(path)
    }
}

fn draw<DB: DrawingBackend>(root: DrawingArea<DB, Shift>, chart: &Chart) -> Result<()> {
    root.fill(&WHITE).map_err(Error::render)?;
    match &chart.body {
        ChartBody::Lines(series) => draw_lines(&root, chart.kind, series)?,
        ChartBody::Bars(set) => draw_bars(&root, chart.kind, set)?,
    }
    root.present().map_err(Error::render)
}

fn draw_lines<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    kind: ChartKind,
    series: &[SeriesSpec],
) -> Result<()> {
    let (x_range, y_range) = line_bounds(series);
    let legend_at = legend_position(series, &x_range, &y_range);
    let mut chart = ChartBuilder::on(root)
        .caption(kind.title(), (FONT_FAMILY, 22))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(65)
        .build_cartesian_2d(x_range, y_range)
        .map_err(Error::render)?;

    chart
        .configure_mesh()
        .x_desc(kind.x_desc())
        .y_desc(kind.y_desc())
        .x_label_formatter(&format_tick)
        .label_style((FONT_FAMILY, 13))
        .axis_desc_style((FONT_FAMILY, 15))
        .light_line_style(BLACK.mix(0.05))
        .draw()
        .map_err(Error::render)?;

    for (idx, spec) in series.iter().enumerate() {
        let color = series_color(idx).mix(spec.opacity);
        let points: Vec<(f64, f64)> = spec.finite_points().map(|(x, y, _)| (x, y)).collect();

        let mut line = LineSeries::new(points, color.stroke_width(spec.stroke_width));
        if spec.markers {
            line = line.point_size(4);
        }
        chart
            .draw_series(line)
            .map_err(Error::render)?
            .label(spec.name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));

        chart
            .draw_series(spec.finite_points().filter_map(|(x, y, label)| {
                label.map(|text| Text::new(text.to_string(), (x, y), (FONT_FAMILY, 11)))
            }))
            .map_err(Error::render)?;
    }

    chart
        .configure_series_labels()
        .position(legend_at)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((FONT_FAMILY, 13))
        .draw()
        .map_err(Error::render)?;
    Ok(())
}

fn draw_bars<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    kind: ChartKind,
    set: &BarSet,
) -> Result<()> {
    let top = set
        .bars
        .iter()
        .map(|b| b.value)
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    let y_max = if top > 0.0 { top * 1.15 } else { 1.0 };
    let centers: Vec<f64> = (0..set.bars.len()).map(|i| i as f64).collect();

    let mut chart = ChartBuilder::on(root)
        .caption(kind.title(), (FONT_FAMILY, 22))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(65)
        .build_cartesian_2d(bar_axis(set.bars.len()).with_key_points(centers), 0.0..y_max)
        .map_err(Error::render)?;

    let label_of = |value: &f64| bar_label(set, *value).unwrap_or_default();

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&label_of)
        .y_desc(kind.y_desc())
        .label_style((FONT_FAMILY, 13))
        .axis_desc_style((FONT_FAMILY, 15))
        .light_line_style(BLACK.mix(0.05))
        .draw()
        .map_err(Error::render)?;

    let fill = rgb(set.color).mix(0.8).filled();
    let finite = || {
        set.bars
            .iter()
            .enumerate()
            .filter(|(_, b)| b.value.is_finite())
            .map(|(i, b)| (i as f64, b))
    };
    chart
        .draw_series(finite().map(|(x, b)| {
            Rectangle::new(
                [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, b.value)],
                fill,
            )
        }))
        .map_err(Error::render)?;

    let annotation = TextStyle::from((FONT_FAMILY, 14, FontStyle::Bold).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series(
            finite().map(|(x, b)| Text::new(b.annotation.clone(), (x, b.value), annotation.clone())),
        )
        .map_err(Error::render)?;
    Ok(())
}

/// Half the width of a bar, in category units.
const BAR_HALF_WIDTH: f64 = 0.35;

/// One unit-wide slot per bar, centred on the bar index.
fn bar_axis(count: usize) -> Range<f64> {
    -0.5..(count.max(1) as f64 - 0.5)
}

fn bar_label(set: &BarSet, x: f64) -> Option<String> {
    let idx = x.round();
    if idx < 0.0 || (x - idx).abs() > 1e-6 {
        return None;
    }
    set.bars.get(idx as usize).map(|b| b.label.clone())
}

/// Tick text without a spurious fractional part.
fn format_tick(value: &f64) -> String {
    // Adding zero folds -0.0 into 0.0.
    let v = *value + 0.0;
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        let text = format!("{v:.3}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Corner of the plot area covering the fewest data points.
fn legend_position(series: &[SeriesSpec], x: &Range<f64>, y: &Range<f64>) -> SeriesLabelPosition {
    let corners = [
        (SeriesLabelPosition::UpperLeft, false, true),
        (SeriesLabelPosition::UpperRight, true, true),
        (SeriesLabelPosition::LowerRight, true, false),
        (SeriesLabelPosition::LowerLeft, false, false),
    ];
    let (w, h) = (x.end - x.start, y.end - y.start);

    let mut best = (SeriesLabelPosition::UpperLeft, usize::MAX);
    for (position, right, upper) in corners {
        let covered = series
            .iter()
            .flat_map(SeriesSpec::finite_points)
            .filter(|&(px, py, _)| {
                let fx = (px - x.start) / w;
                let fy = (py - y.start) / h;
                let in_x = if right { fx >= 0.5 } else { fx <= 0.5 };
                let in_y = if upper { fy >= 0.65 } else { fy <= 0.35 };
                in_x && in_y
            })
            .count();
        if covered < best.1 {
            best = (position, covered);
        }
    }
    best.0
}

/// Axis ranges covering every finite point, padded by 5 %.
///
/// The y axis always includes zero.
fn line_bounds(series: &[SeriesSpec]) -> (Range<f64>, Range<f64>) {
    let mut x = (f64::INFINITY, f64::NEG_INFINITY);
    let mut y = (0.0_f64, f64::NEG_INFINITY);
    for (px, py, _) in series.iter().flat_map(SeriesSpec::finite_points) {
        x = (x.0.min(px), x.1.max(px));
        y = (y.0.min(py), y.1.max(py));
    }
    (padded(x.0, x.1), padded(y.0, y.1))
}

fn padded(lo: f64, hi: f64) -> Range<f64> {
    if !(lo.is_finite() && hi.is_finite()) {
        return 0.0..1.0;
    }
    if hi <= lo {
        return (lo - 1.0)..(hi + 1.0);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad)..(hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::discover_font;
    use hogbench_core::Bar;
    use std::fs;

    fn line_chart(kind: ChartKind) -> Chart {
        let a = SeriesSpec::new("Sequential CPU", vec![(76_800.0, 2.0), (307_200.0, 11.0)])
            .with_labels(vec![" 320x240".into(), " 640x480".into()])
            .with_markers();
        let b = SeriesSpec::new("CUDA GPU", vec![(76_800.0, 0.4), (307_200.0, f64::NAN)])
            .with_stroke(1, 0.6);
        Chart::new(kind, ChartBody::Lines(vec![a, b]))
    }

    fn bar_chart(kind: ChartKind) -> Chart {
        let bars = vec![
            Bar {
                label: "Sequential CPU".into(),
                value: 0.03,
                annotation: "0.03s".into(),
            },
            Bar {
                label: "CUDA GPU".into(),
                value: 0.0,
                annotation: "0.00s".into(),
            },
        ];
        Chart::new(
            kind,
            ChartBody::Bars(BarSet {
                bars,
                color: Rgb(0xe7, 0x4c, 0x3c),
            }),
        )
    }

    fn all_charts() -> Vec<Chart> {
        vec![
            line_chart(ChartKind::Scalability),
            line_chart(ChartKind::Cumulative),
            bar_chart(ChartKind::TotalTime),
            bar_chart(ChartKind::Fps),
            line_chart(ChartKind::Timeline),
        ]
    }

    fn renderer(format: ImageFormat) -> Option<PlottersRenderer> {
        // Rendering needs a real font; skip on machines without one.
        discover_font()?;
        Some(PlottersRenderer::new(format, None).unwrap())
    }

    #[test]
    fn test_padded() {
        assert_eq!(padded(0.0, 10.0), -0.5..10.5);
        assert_eq!(padded(5.0, 5.0), 4.0..6.0);
        assert_eq!(padded(f64::INFINITY, f64::NEG_INFINITY), 0.0..1.0);
    }

    #[test]
    fn test_line_bounds_skip_nan_and_include_zero() {
        let chart = line_chart(ChartKind::Scalability);
        let ChartBody::Lines(series) = &chart.body else {
            panic!("Expected line chart");
        };
        let (x, y) = line_bounds(series);
        assert!(x.start < 76_800.0 && x.end > 307_200.0);
        assert!(y.start < 0.0 && y.end > 11.0 && y.end < 12.0);
    }

    fn fps_bars(values: &[f64]) -> Chart {
        let bars = values
            .iter()
            .enumerate()
            .map(|(i, v)| Bar {
                label: format!("method {i}"),
                value: *v,
                annotation: format!("{v:.2}"),
            })
            .collect();
        Chart::new(
            ChartKind::Fps,
            ChartBody::Bars(BarSet {
                bars,
                color: Rgb(0x2e, 0xcc, 0x71),
            }),
        )
    }

    /// `(x, width)` of every rectangle filled with `fill`.
    fn rects_filled(svg: &str, fill: &str) -> Vec<(i32, i32)> {
        let attr = |line: &str, name: &str| -> i32 {
            let key = format!(" {name}=\"");
            let start = line.find(&key).unwrap() + key.len();
            let end = start + line[start..].find('"').unwrap();
            line[start..end].parse().unwrap()
        };
        let fill = format!("fill=\"{fill}\"");
        svg.lines()
            .filter(|l| l.starts_with("<rect") && l.contains(&fill))
            .map(|l| (attr(l, "x"), attr(l, "width")))
            .collect()
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(&400_000.0), "400000");
        assert_eq!(format_tick(&2_073_600.0), "2073600");
        assert_eq!(format_tick(&-0.0), "0");
        assert_eq!(format_tick(&0.25), "0.25");
        assert_eq!(format_tick(&1.5), "1.5");
    }

    #[test]
    fn test_bar_axis_one_slot_per_bar() {
        assert_eq!(bar_axis(0), -0.5..0.5);
        assert_eq!(bar_axis(1), -0.5..0.5);
        assert_eq!(bar_axis(4), -0.5..3.5);

        let ChartBody::Bars(set) = fps_bars(&[1.0, 2.0]).body else {
            panic!("Expected bar chart");
        };
        assert_eq!(bar_label(&set, 0.0).as_deref(), Some("method 0"));
        assert_eq!(bar_label(&set, 1.0).as_deref(), Some("method 1"));
        assert_eq!(bar_label(&set, 2.0), None);
        assert_eq!(bar_label(&set, 0.5), None);
        assert_eq!(bar_label(&set, -1.0), None);
    }

    #[test]
    fn test_legend_avoids_points() {
        // A lone point sits top-centre after padding.
        let lone = [SeriesSpec::new("a", vec![(307_200.0, 11.0)])];
        let (x, y) = line_bounds(&lone);
        assert_eq!(legend_position(&lone, &x, &y), SeriesLabelPosition::LowerRight);

        // A rising line leaves the upper left free.
        let rising = [SeriesSpec::new(
            "a",
            (0..20).map(|i| (i as f64, i as f64 * 0.01)).collect(),
        )];
        let (x, y) = line_bounds(&rising);
        assert_eq!(legend_position(&rising, &x, &y), SeriesLabelPosition::UpperLeft);

        // A falling line leaves the upper right free.
        let falling = [SeriesSpec::new(
            "a",
            (0..20).map(|i| (i as f64, 20.0 - i as f64)).collect(),
        )];
        let (x, y) = line_bounds(&falling);
        assert_eq!(legend_position(&falling, &x, &y), SeriesLabelPosition::UpperRight);
    }

    #[test]
    fn test_bars_fill_plot_width() {
        let Some(renderer) = renderer(ImageFormat::Svg) else {
            return;
        };
        let dir = tempfile::tempdir().unwrap();
        // Plot area spans x = 80..785 on the 800 px wide chart.
        let plot_center = (80 + 785) / 2;

        let path = renderer.render(&fps_bars(&[46.3]), dir.path()).unwrap();
        let rects = rects_filled(&fs::read_to_string(&path).unwrap(), "#2ECC71");
        assert_eq!(rects.len(), 1);
        let (x, width) = rects[0];
        assert!((x + width / 2 - plot_center).abs() <= 10, "bar at {x}+{width}");
        assert!(width > 450, "bar width {width}");

        let path = renderer.render(&fps_bars(&[46.3, 120.0]), dir.path()).unwrap();
        let rects = rects_filled(&fs::read_to_string(&path).unwrap(), "#2ECC71");
        assert_eq!(rects.len(), 2);
        let (left, right) = (rects[0], rects[1]);
        assert!((left.1 - right.1).abs() <= 2);
        assert!(left.1 > 220, "bar width {}", left.1);
        // No empty trailing slot: the pair is centred in the plot area.
        let pair_center = (left.0 + right.0 + right.1) / 2;
        assert!((pair_center - plot_center).abs() <= 10, "pair centred at {pair_center}");
    }

    #[test]
    fn test_render_png() {
        let Some(renderer) = renderer(ImageFormat::Png) else {
            return;
        };
        let dir = tempfile::tempdir().unwrap();
        for chart in all_charts() {
            let path = renderer.render(&chart, dir.path()).unwrap();
            assert_eq!(path, dir.path().join(chart.kind.file_name(ImageFormat::Png)));
            let bytes = fs::read(&path).unwrap();
            assert_eq!(&bytes[..4], b"\x89PNG");
        }
    }

    #[test]
    fn test_render_svg() {
        let Some(renderer) = renderer(ImageFormat::Svg) else {
            return;
        };
        let dir = tempfile::tempdir().unwrap();
        let path = renderer
            .render(&bar_chart(ChartKind::Fps), dir.path())
            .unwrap();
        let text = fs::read_to_string(path).unwrap();
        assert!(text.contains("<svg"));
        assert!(text.contains("Average FPS (Higher is Better)"));
        assert!(text.contains("0.03s"));
    }

    #[test]
    fn test_render_into_missing_dir_fails() {
        let Some(renderer) = renderer(ImageFormat::Png) else {
            return;
        };
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(renderer
            .render(&line_chart(ChartKind::Timeline), &missing)
            .is_err());
    }
}
