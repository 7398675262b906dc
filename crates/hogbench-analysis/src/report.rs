use hogbench_core::Summary;

const SEPARATOR_WIDTH: usize = 40;
const HEADERS: [&str; 5] = [
    "Method",
    "Total Time (s)",
    "Avg Time (ms)",
    "FPS",
    "Stability (StdDev)",
];

/// Fixed-width text rendering of the per-method summaries.
pub struct Report<'a> {
    summaries: &'a [Summary],
}

impl<'a> Report<'a> {
    pub fn new(summaries: &'a [Summary]) -> Self {
        Self { summaries }
    }

    /// Generate the summary table framed by separator lines.
    pub fn to_text(&self) -> String {
        let separator = "=".repeat(SEPARATOR_WIDTH);
        let mut out = String::new();
        out.push_str(&separator);
        out.push('\n');
        out.push_str("       BENCHMARK RESULTS\n");
        out.push_str(&separator);
        out.push('\n');
        for line in self.table_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str(&separator);
        out.push('\n');
        out
    }

    fn table_lines(&self) -> Vec<String> {
        let rows: Vec<[String; 5]> = self
            .summaries
            .iter()
            .map(|s| {
                [
                    s.method.clone(),
                    format_value(s.total_time_s),
                    format_value(s.mean_time_ms),
                    format_value(s.fps),
                    format_value(s.std_dev_ms),
                ]
            })
            .collect();

        // Padding counts chars, so widths must too.
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header = HEADERS.map(String::from);
        std::iter::once(&header)
            .chain(&rows)
            .map(|cells| {
                cells
                    .iter()
                    .zip(widths)
                    .map(|(cell, width)| format!("{cell:>width$}"))
                    .collect::<Vec<_>>()
                    .join("  ")
            })
            .collect()
    }
}

/// Two decimals, or `NaN`.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(method: &str, total: f64, mean: f64, std: f64, fps: f64) -> Summary {
        Summary {
            method: method.into(),
            frames: 3,
            total_time_s: total,
            mean_time_ms: mean,
            std_dev_ms: std,
            fps,
        }
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0.03), "0.03");
        assert_eq!(format_value(100.000_000_1), "100.00");
        assert_eq!(format_value(2.0 / 3.0), "0.67");
        assert_eq!(format_value(f64::NAN), "NaN");
    }

    #[test]
    fn test_report_layout() {
        let summaries = vec![
            summary("Sequential CPU", 0.03, 10.0, 2.0, 100.0),
            summary("CUDA GPU", 0.001, 0.333, f64::NAN, 3000.0),
        ];
        let text = Report::new(&summaries).to_text();
        let lines: Vec<_> = text.lines().collect();

        let separator = "=".repeat(40);
        assert_eq!(lines[0], separator);
        assert_eq!(lines[1], "       BENCHMARK RESULTS");
        assert_eq!(lines[2], separator);
        assert_eq!(lines.last().copied(), Some(separator.as_str()));
        assert_eq!(lines.len(), 7);

        assert!(lines[3].contains("Total Time (s)"));
        assert!(lines[4].starts_with("Sequential CPU"));
        assert!(lines[4].contains("0.03"));
        assert!(lines[4].contains("100.00"));
        assert!(lines[5].trim_start().starts_with("CUDA GPU"));
        assert!(lines[5].ends_with("NaN"));
        assert!(lines[5].contains("3000.00"));

        // Every table line has the same width.
        assert_eq!(lines[3].len(), lines[4].len());
        assert_eq!(lines[4].len(), lines[5].len());
    }

    #[test]
    fn test_report_aligns_non_ascii_names() {
        let summaries = vec![
            summary("Séquentiel CPU à 4 cœurs", 0.03, 10.0, 2.0, 100.0),
            summary("CUDA GPU", 0.001, 0.333, 0.1, 3000.0),
        ];
        let text = Report::new(&summaries).to_text();
        let lines: Vec<_> = text.lines().collect();

        let widths: Vec<_> = lines[3..6].iter().map(|l| l.chars().count()).collect();
        assert_eq!(widths[0], widths[1]);
        assert_eq!(widths[1], widths[2]);
        assert!(lines[4].starts_with("Séquentiel CPU à 4 cœurs  "));
    }

    #[test]
    fn test_empty_report() {
        let text = Report::new(&[]).to_text();
        assert_eq!(text.lines().count(), 5);
    }
}
