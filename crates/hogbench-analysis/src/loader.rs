//! Locating and parsing per-method measurement files.
//!
//! Every configured method produces exactly one [`MethodOutcome`]. A missing
//! or broken file never stops the remaining methods from loading.

use crate::enrich::enrich;
use hogbench_core::{AnalysisConfig, Error, Measurement, MethodSpec, MethodTable, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Column whose absence marks a file written by an older benchmark build.
pub const REQUIRED_COLUMN: &str = "Width";

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Frame")]
    frame: u64,
    #[serde(rename = "Width")]
    width: u32,
    #[serde(rename = "Height")]
    height: u32,
    #[serde(rename = "Time_ms", deserialize_with = "csv::invalid_option")]
    time_ms: Option<f64>,
}

/// Why a method contributed no data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NotFound,
    MissingColumn(String),
    Unreadable(String),
}

#[derive(Debug, Clone)]
pub enum MethodOutcome {
    Loaded(MethodTable),
    Skipped { method: String, reason: SkipReason },
}

impl MethodOutcome {
    pub fn method(&self) -> &str {
        match self {
            MethodOutcome::Loaded(table) => &table.method,
            MethodOutcome::Skipped { method, .. } => method,
        }
    }

    pub fn table(&self) -> Option<&MethodTable> {
        match self {
            MethodOutcome::Loaded(table) => Some(table),
            MethodOutcome::Skipped { .. } => None,
        }
    }
}

/// Outcomes for every configured method, in configuration order.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub outcomes: Vec<MethodOutcome>,
}

impl LoadReport {
    pub fn tables(&self) -> impl Iterator<Item = &MethodTable> {
        self.outcomes.iter().filter_map(MethodOutcome::table)
    }

    pub fn loaded_count(&self) -> usize {
        self.tables().count()
    }

    pub fn has_data(&self) -> bool {
        self.loaded_count() > 0
    }

    pub fn all_loaded(&self) -> bool {
        self.loaded_count() == self.outcomes.len()
    }

    pub fn skipped(&self) -> impl Iterator<Item = (&str, &SkipReason)> {
        self.outcomes.iter().filter_map(|o| match o {
            MethodOutcome::Skipped { method, reason } => Some((method.as_str(), reason)),
            MethodOutcome::Loaded(_) => None,
        })
    }

    pub fn into_tables(self) -> Vec<MethodTable> {
        self.outcomes
            .into_iter()
            .filter_map(|o| match o {
                MethodOutcome::Loaded(table) => Some(table),
                MethodOutcome::Skipped { .. } => None,
            })
            .collect()
    }
}

/// Loads the measurement files named by an [`AnalysisConfig`].
pub struct Loader<'a> {
    config: &'a AnalysisConfig,
}

impl<'a> Loader<'a> {
    pub fn new(config: &'a AnalysisConfig) -> Self {
        Self { config }
    }

    /// Find `file` in the working directory, then in the results directory.
    pub fn locate(&self, file: &str) -> Option<PathBuf> {
        self.config
            .search_dirs()
            .into_iter()
            .map(|dir| dir.join(file))
            .find(|candidate| candidate.is_file())
    }

    /// Load every configured method.
    pub fn load(&self) -> LoadReport {
        let outcomes = self
            .config
            .methods
            .iter()
            .enumerate()
            .map(|(idx, spec)| self.load_method(spec, idx == 0))
            .collect();
        LoadReport { outcomes }
    }

    fn load_method(&self, spec: &MethodSpec, is_baseline: bool) -> MethodOutcome {
        let skipped = |reason| MethodOutcome::Skipped {
            method: spec.name.clone(),
            reason,
        };

        let Some(path) = self.locate(&spec.file) else {
            if is_baseline {
                warn!("Could not find {}. Run the benchmark first.", spec.file);
            } else {
                debug!("Skipping {}: {} not found", spec.name, spec.file);
            }
            return skipped(SkipReason::NotFound);
        };

        info!("Loading {} from {}...", spec.name, path.display());

        match read_measurements(&path) {
            Ok(rows) => MethodOutcome::Loaded(enrich(&spec.name, path, &rows)),
            Err(Error::MissingColumn { column, .. }) => {
                error!("{} is old format. Re-run the benchmark.", spec.file);
                skipped(SkipReason::MissingColumn(column))
            }
            Err(e) => {
                error!("Reading {}: {}", path.display(), e);
                skipped(SkipReason::Unreadable(e.to_string()))
            }
        }
    }
}

/// Parse one measurement file.
///
/// Fails when the header lacks [`REQUIRED_COLUMN`], when any other required
/// column is missing or malformed, or when a row has a zero dimension. An
/// empty or non-numeric time cell is read as NaN.
pub fn read_measurements(path: &Path) -> Result<Vec<Measurement>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    if !reader.headers()?.iter().any(|h| h == REQUIRED_COLUMN) {
        return Err(Error::MissingColumn {
            path: path.to_path_buf(),
            column: REQUIRED_COLUMN.to_string(),
        });
    }

    let mut rows = Vec::new();
    for (idx, record) in reader.deserialize::<RawRow>().enumerate() {
        let raw = record?;
        if raw.width == 0 || raw.height == 0 {
            return Err(Error::InvalidRow {
                row: idx + 1,
                reason: format!("zero dimension {}x{}", raw.width, raw.height),
            });
        }
        rows.push(Measurement::new(
            raw.frame,
            raw.width,
            raw.height,
            raw.time_ms.unwrap_or(f64::NAN),
        ));
    }
    Ok(rows)
}
