//! Cross-solver aggregate statistics.
//!
//! Pure derivations over a loaded [`ResultStore`]; nothing here touches
//! the file system.
//!
//! # Views
//!
//! | View | Definition |
//! |------|-----------|
//! | Unsolved set | Instances some solver reported without a solution |
//! | Objective values | Per-solver objectives over the remaining instances |
//! | Optimal counts | Instances per solver with a proven optimum |
//! | Runtime means | Mean measured runtime per solver |

use std::collections::{HashMap, HashSet};

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::SolveStatus;
use crate::store::ResultStore;

/// Instance keys for which at least one solver reported a result without
/// a solution (status neither optimal nor feasible).
///
/// Only reported results count: an instance absent from a solver's
/// results is not flagged on that solver's behalf.
pub fn instances_without_solution(store: &ResultStore) -> HashSet<String> {
    let mut unsolved = HashSet::new();
    for (_, results) in store.iter() {
        for (key, result) in results {
            if !result.has_solution() {
                unsolved.insert(key.clone());
            }
        }
    }
    unsolved
}

/// Objective values per solver, over every instance not in `excluded`.
///
/// The exclusion set is normally [`instances_without_solution`], so the
/// distributions compare solvers on instances everyone solved. Every
/// solver in the store gets an entry, possibly empty. A retained
/// instance without an objective value is a data-integrity error.
pub fn objective_values_by_solver(
    store: &ResultStore,
    excluded: &HashSet<String>,
) -> AnalysisResult<HashMap<String, Vec<f64>>> {
    let mut values: HashMap<String, Vec<f64>> = HashMap::new();
    for (solver, results) in store.iter() {
        let entry = values.entry(solver.to_string()).or_default();
        for (key, result) in results {
            if excluded.contains(key) {
                continue;
            }
            let objective =
                result
                    .objective_value
                    .ok_or_else(|| AnalysisError::MissingObjective {
                        solver: solver.to_string(),
                        instance: key.clone(),
                    })?;
            entry.push(objective);
        }
    }
    Ok(values)
}

/// Number of instances each solver solved to proven optimality.
///
/// Counts exact optimal statuses on the raw store; the unsolved-instance
/// filter does not apply here.
pub fn optimal_counts(store: &ResultStore) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for (solver, results) in store.iter() {
        let optimal = results
            .values()
            .filter(|r| r.status == SolveStatus::Optimal)
            .count();
        counts.insert(solver.to_string(), optimal);
    }
    counts
}

/// Mean measured runtime per solver, in milliseconds.
///
/// Averages over the results that carry a runtime; a solver with no
/// measured runtimes has no entry.
pub fn mean_runtime_ms(store: &ResultStore) -> HashMap<String, f64> {
    let mut means = HashMap::new();
    for (solver, results) in store.iter() {
        let runtimes: Vec<i64> = results.values().filter_map(|r| r.runtime_ms).collect();
        if !runtimes.is_empty() {
            let total: i64 = runtimes.iter().sum();
            means.insert(solver.to_string(), total as f64 / runtimes.len() as f64);
        }
    }
    means
}
