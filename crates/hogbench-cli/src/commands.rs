//! Command implementations for the hogbench CLI.

use crate::InputArgs;
use anyhow::{bail, Context, Result};
use hogbench_analysis::{Analysis, Analyzer, Report};
use hogbench_core::AnalysisConfig;
use hogbench_plot::{ChartRenderer, PlottersRenderer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// How an analysis run ended.
#[derive(Debug)]
pub enum RunOutcome {
    NoData,
    Completed { saved: Vec<PathBuf> },
}

/// Build the configuration from an optional file plus command-line overrides.
pub fn load_config(input: &InputArgs) -> Result<AnalysisConfig> {
    let mut config = match &input.config {
        Some(path) => AnalysisConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    if let Some(dir) = &input.dir {
        config.working_dir = dir.clone();
    }
    if let Some(dir) = &input.results_dir {
        config.results_dir = dir.clone();
    }
    Ok(config)
}

/// Analyze command: summary table plus all charts.
pub fn analyze(config: AnalysisConfig) -> Result<()> {
    let outcome = analyze_with(config, |config| {
        let renderer = PlottersRenderer::new(config.format, config.font_path.as_deref())?;
        Ok(Box::new(renderer) as Box<dyn ChartRenderer>)
    })?;
    if let RunOutcome::Completed { saved } = outcome {
        debug!("Saved {} charts", saved.len());
    }
    Ok(())
}

/// Run the full pipeline with a caller-supplied renderer.
///
/// The renderer is only built once there is data to draw.
pub fn analyze_with<F>(config: AnalysisConfig, make_renderer: F) -> Result<RunOutcome>
where
    F: FnOnce(&AnalysisConfig) -> hogbench_core::Result<Box<dyn ChartRenderer>>,
{
    println!("--- Starting HOG Benchmark Analysis ---");

    let analyzer = Analyzer::new(config);
    let analysis = analyzer.analyze();
    if !analysis.has_data() {
        println!("No data found.");
        return Ok(RunOutcome::NoData);
    }

    print_report(&analysis);

    let out_dir = analyzer.output_dir();
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let renderer = make_renderer(analyzer.config()).context("Failed to set up chart rendering")?;
    debug!("Rendering with {} into {}", renderer.name(), out_dir.display());

    let mut saved = Vec::new();
    for chart in analysis.charts() {
        let path = renderer
            .render(&chart, &out_dir)
            .with_context(|| format!("Failed to render {}", chart.kind.file_stem()))?;
        println!("[Saved] {}", display_name(&path));
        saved.push(path);
    }

    Ok(RunOutcome::Completed { saved })
}

/// Summary command: print the table without drawing anything.
pub fn summary(config: AnalysisConfig) -> Result<()> {
    let analysis = Analyzer::new(config).analyze();
    if !analysis.has_data() {
        println!("No data found.");
        return Ok(());
    }
    print_report(&analysis);
    Ok(())
}

/// Init command: write the default configuration as JSON.
pub fn init(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", output.display());
    }
    let json = AnalysisConfig::default().to_json()?;
    fs::write(output, json + "\n")
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Wrote default configuration to {}", output.display());
    Ok(())
}

fn print_report(analysis: &Analysis) {
    println!();
    print!("{}", Report::new(&analysis.summaries).to_text());
    println!();
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
