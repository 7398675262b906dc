//! Analysis configuration.

use crate::chart::ImageFormat;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A benchmark method and the file its measurements are written to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSpec {
    pub name: String,
    pub file: String,
}

impl MethodSpec {
    pub fn new(name: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
        }
    }
}

/// Everything the pipeline needs to know about where to read and write.
///
/// Every field has a default, so a JSON file only needs to name the values
/// it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Methods in load order. The first one is the baseline.
    pub methods: Vec<MethodSpec>,
    pub working_dir: PathBuf,
    /// Secondary search location, relative to `working_dir`.
    pub results_dir: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    pub format: ImageFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            methods: default_methods(),
            working_dir: PathBuf::from("."),
            results_dir: PathBuf::from("results"),
            output_dir: None,
            format: ImageFormat::default(),
            font_path: None,
        }
    }
}

impl AnalysisConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn baseline(&self) -> Option<&MethodSpec> {
        self.methods.first()
    }

    /// The secondary search directory, resolved against `working_dir`.
    pub fn results_path(&self) -> PathBuf {
        self.working_dir.join(&self.results_dir)
    }

    /// Directories searched for input files, in priority order.
    pub fn search_dirs(&self) -> [PathBuf; 2] {
        [self.working_dir.clone(), self.results_path()]
    }
}

fn default_methods() -> Vec<MethodSpec> {
    vec![
        MethodSpec::new("Sequential CPU", "Sequential.csv"),
        MethodSpec::new("OpenMP Parallel", "OpenMP.csv"),
        MethodSpec::new("CUDA GPU", "CUDA.csv"),
        MethodSpec::new("OpenCL GPU", "OpenCL.csv"),
    ]
}
