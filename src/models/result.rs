//! Solver result record model.
//!
//! One record per (solver, prescription, instance) triple, written by
//! the experiment runners and read back here for analysis.
//!
//! # Wire Format
//!
//! A JSON object with camelCase field names:
//!
//! ```json
//! {
//!   "status": 1,
//!   "objectiveValue": 42.5,
//!   "startTimes": [0, 3, 7],
//!   "solverRuntimeInMilliseconds": 1250,
//!   "optional": { "tabuListLength": "15" }
//! }
//! ```
//!
//! `status`, `objectiveValue`, and `startTimes` form the core record;
//! the runtime measurement and the annotation map are written by some
//! runners only and default to empty here.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::SolveStatus;

/// One solver's output for one problem instance.
///
/// Immutable once loaded; owned by the store entry that holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverResult {
    /// Outcome classification.
    pub status: SolveStatus,
    /// Objective value; meaningful only when the status carries a solution.
    #[serde(default)]
    pub objective_value: Option<f64>,
    /// Operation start times, one entry per scheduled operation.
    pub start_times: Vec<i64>,
    /// Wall-clock solver runtime, when the runner measured it.
    #[serde(
        rename = "solverRuntimeInMilliseconds",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub runtime_ms: Option<i64>,
    /// Solver-specific annotations (free-form key/value strings).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub optional: HashMap<String, String>,
}

impl SolverResult {
    /// Creates a result with the given status and no measurements.
    pub fn new(status: SolveStatus) -> Self {
        Self {
            status,
            objective_value: None,
            start_times: Vec::new(),
            runtime_ms: None,
            optional: HashMap::new(),
        }
    }

    /// Sets the objective value.
    pub fn with_objective(mut self, objective_value: f64) -> Self {
        self.objective_value = Some(objective_value);
        self
    }

    /// Sets the operation start times.
    pub fn with_start_times(mut self, start_times: Vec<i64>) -> Self {
        self.start_times = start_times;
        self
    }

    /// Sets the measured runtime (ms).
    pub fn with_runtime_ms(mut self, runtime_ms: i64) -> Self {
        self.runtime_ms = Some(runtime_ms);
        self
    }

    /// Adds one solver-specific annotation.
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.optional.insert(key.into(), value.into());
        self
    }

    /// Whether the solver produced a usable solution (optimal or feasible).
    #[inline]
    pub fn has_solution(&self) -> bool {
        self.status.has_solution()
    }
}
