//! Run configuration.
//!
//! [`RunConfig`] gathers the input path, the disciplines to run and the
//! output format. The CLI builds one from its arguments; library callers use
//! the `with_*` builders on top of [`RunConfig::default`].

use std::path::PathBuf;

use crate::scheduler::Algorithm;

/// Default workload location, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "data/datafile.txt";

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Per-process table and metrics block
    #[default]
    Table,
    /// Pretty-printed JSON of every run
    Json,
}

/// Configuration for one simulator invocation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Workload file (tab-separated, header line first).
    pub input_path: PathBuf,
    /// Disciplines to run, in order.
    pub algorithms: Vec<Algorithm>,
    /// Report format written to stdout.
    pub output: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            algorithms: vec![Algorithm::Fifo],
            output: OutputFormat::Table,
        }
    }
}

impl RunConfig {
    /// Sets the workload file.
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Sets the disciplines to run.
    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Sets the output format.
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Whether more than one discipline runs, enabling the comparison summary.
    pub fn is_comparison(&self) -> bool {
        self.algorithms.len() > 1
    }
}
