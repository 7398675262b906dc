//! Renderer trait.

use hogbench_core::{Chart, Result};
use std::path::{Path, PathBuf};

/// Turns a chart description into a file.
///
/// Implementations choose the file name from the chart kind; the caller only
/// picks the directory.
pub trait ChartRenderer {
    /// Short identifier for log output.
    fn name(&self) -> &'static str;

    /// Render `chart` into `dir` and return the path written.
    fn render(&self, chart: &Chart, dir: &Path) -> Result<PathBuf>;
}
