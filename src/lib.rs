//! Solver benchmark analysis for scheduling experiments.
//!
//! Loads per-instance result records produced by several optimization
//! solvers, derives cross-solver statistics, and reports an
//! objective-value box-plot plus optimal-solve counts.
//!
//! # Modules
//!
//! - **`models`**: Result record types (`SolveStatus`, `SolverResult`)
//! - **`loader`**: Single-record JSON loading
//! - **`store`**: Three-level results-tree walk into a `ResultStore`
//! - **`aggregate`**: Cross-solver derived views (unsolved set, objective
//!   distributions, optimal counts, runtime means)
//! - **`report`**: Box-plot rendering and count summaries
//! - **`config`**: Explicit per-run configuration
//! - **`pipeline`**: The linear load, aggregate, report pass
//! - **`error`**: Crate-wide error type
//!
//! # Input Layout
//!
//! ```text
//! <root>/<solver>/<prescription>/<instance>.json
//! ```
//!
//! Each leaf file holds one JSON record with an integer `status`, a
//! numeric `objectiveValue`, and a `startTimes` array. Instances are
//! compared across solvers under the key `{prescription}-{instance}`.
//!
//! # Usage
//!
//! ```no_run
//! use u_solverbench::config::AnalysisConfig;
//! use u_solverbench::pipeline;
//!
//! let config = AnalysisConfig::new("experiment-data/results")
//!     .with_plot_output("objective-values.svg")
//!     .with_solver_order(vec!["greedy".into(), "tabu1".into()]);
//! pipeline::run(&config).unwrap();
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod store;
