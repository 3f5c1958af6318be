//! Crate-wide error and result types.
//!
//! Every variant is fatal: the pipeline never retries, and reporting
//! never runs against a partially loaded store.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Failures surfaced by the analysis pipeline.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A results directory could not be enumerated.
    #[error("failed to read results directory '{}': {source}", .path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    /// A result file could not be opened.
    #[error("failed to read result file '{}': {source}", .path.display())]
    ReadFile { path: PathBuf, source: io::Error },

    /// A result file held malformed JSON or an unknown status code.
    #[error("failed to parse result file '{}': {source}", .path.display())]
    ParseResult {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A name in the results tree was not valid UTF-8.
    #[error("non-UTF-8 name in results tree: '{}'", .path.display())]
    NonUtf8Name { path: PathBuf },

    /// A plot was requested with no solvers to display.
    #[error("no solvers to plot")]
    EmptySolverOrder,

    /// A solver requested for display is absent from the loaded results.
    #[error("solver '{solver}' not present in the loaded results")]
    MissingSolver { solver: String },

    /// A solver selected for plotting has no objective values left after
    /// filtering.
    #[error("no objective values to plot for solver '{solver}'")]
    EmptyDistribution { solver: String },

    /// A solved instance carries no objective value.
    #[error("missing objective value for solved instance '{instance}' of solver '{solver}'")]
    MissingObjective { solver: String, instance: String },

    /// The chart backend failed to render or write the plot.
    #[error("failed to render chart '{}': {message}", .path.display())]
    Render { path: PathBuf, message: String },

    /// The count summary could not be written to its sink.
    #[error("failed to write report: {0}")]
    WriteReport(#[from] io::Error),
}
