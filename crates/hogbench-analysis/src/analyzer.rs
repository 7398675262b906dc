use crate::loader::{LoadReport, Loader};
use crate::metrics::summarize_all;
use crate::series::build_charts;
use hogbench_core::{AnalysisConfig, Chart, MethodTable, Summary};
use std::path::PathBuf;

/// Result of loading and aggregating every configured method.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub load: LoadReport,
    /// One per loaded table, in the same order.
    pub summaries: Vec<Summary>,
}

impl Analysis {
    pub fn tables(&self) -> Vec<MethodTable> {
        self.load.tables().cloned().collect()
    }

    pub fn has_data(&self) -> bool {
        self.load.has_data()
    }

    /// Compute the five chart descriptions.
    pub fn charts(&self) -> Vec<Chart> {
        build_charts(&self.tables(), &self.summaries)
    }
}

/// Drives the load → enrich → aggregate stages for one configuration.
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Load all methods and summarize the ones that loaded.
    pub fn analyze(&self) -> Analysis {
        let load = Loader::new(&self.config).load();
        let summaries = summarize_all(load.tables());
        Analysis { load, summaries }
    }

    /// Directory charts are written to.
    ///
    /// An explicit `output_dir` always wins. Otherwise charts go to the
    /// results directory when the baseline file is absent from the working
    /// directory and the results directory exists, else to the working
    /// directory.
    pub fn output_dir(&self) -> PathBuf {
        if let Some(dir) = &self.config.output_dir {
            return dir.clone();
        }

        let baseline_in_working_dir = self
            .config
            .baseline()
            .is_some_and(|m| self.config.working_dir.join(&m.file).exists());
        let results = self.config.results_path();

        if !baseline_in_working_dir && results.is_dir() {
            results
        } else {
            self.config.working_dir.clone()
        }
    }
}
