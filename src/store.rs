//! Loaded experiment results, keyed by solver and instance.
//!
//! The store is built once per run by walking a three-level results
//! tree, and is read-only afterward:
//!
//! ```text
//! <root>/<solver>/<prescription>/<instance>.json
//! ```
//!
//! Solver names are the first-level directory names discovered at load
//! time. Instance keys combine the prescription directory name with the
//! file stem: `{prescription}-{instance}`. Iteration order over the
//! store is unspecified; display code orders explicitly.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{AnalysisError, AnalysisResult};
use crate::loader;
use crate::models::SolverResult;

/// All loaded results: solver name to (instance key to result).
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    results: HashMap<String, HashMap<String, SolverResult>>,
}

impl ResultStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every result file under `root`.
    ///
    /// Fail-fast: the first unreadable directory or file, or the first
    /// record that fails to parse, aborts the whole load. A solver
    /// directory with no result files still registers the solver.
    pub fn load(root: &Path) -> AnalysisResult<Self> {
        let mut store = Self::new();
        for solver_entry in read_dir_entries(root)? {
            let solver = entry_name(&solver_entry)?;
            let solver_results = store.results.entry(solver.clone()).or_default();
            for prescription_entry in read_dir_entries(&solver_entry.path())? {
                let prescription = entry_name(&prescription_entry)?;
                for file_entry in read_dir_entries(&prescription_entry.path())? {
                    let file_path = file_entry.path();
                    let instance = file_stem(&file_path)?;
                    let key = instance_key(&prescription, &instance);
                    let result = loader::load_result(&file_path)?;
                    solver_results.insert(key, result);
                }
            }
            debug!(
                "loaded {} results for solver '{}'",
                solver_results.len(),
                solver
            );
        }
        Ok(store)
    }

    /// Inserts one result. Reinserting a key replaces the entry.
    pub fn insert(
        &mut self,
        solver: impl Into<String>,
        key: impl Into<String>,
        result: SolverResult,
    ) {
        self.results
            .entry(solver.into())
            .or_default()
            .insert(key.into(), result);
    }

    /// Solver names present in the store, in unspecified order.
    pub fn solver_names(&self) -> impl Iterator<Item = &str> {
        self.results.keys().map(String::as_str)
    }

    /// Results for one solver, if present.
    pub fn results_for(&self, solver: &str) -> Option<&HashMap<String, SolverResult>> {
        self.results.get(solver)
    }

    /// Iterates over (solver name, per-instance results) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashMap<String, SolverResult>)> {
        self.results.iter().map(|(name, map)| (name.as_str(), map))
    }

    /// Number of solvers.
    pub fn solver_count(&self) -> usize {
        self.results.len()
    }

    /// Total number of loaded results across all solvers.
    pub fn result_count(&self) -> usize {
        self.results.values().map(HashMap::len).sum()
    }

    /// Whether the store holds no solvers.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Forms the instance key for a prescription and an instance identifier.
pub fn instance_key(prescription: &str, instance: &str) -> String {
    format!("{prescription}-{instance}")
}

fn read_dir_entries(path: &Path) -> AnalysisResult<Vec<fs::DirEntry>> {
    let read_dir_error = |source| AnalysisError::ReadDir {
        path: path.to_path_buf(),
        source,
    };
    let mut entries = Vec::new();
    for entry in fs::read_dir(path).map_err(read_dir_error)? {
        entries.push(entry.map_err(read_dir_error)?);
    }
    Ok(entries)
}

fn entry_name(entry: &fs::DirEntry) -> AnalysisResult<String> {
    entry
        .file_name()
        .into_string()
        .map_err(|_| AnalysisError::NonUtf8Name { path: entry.path() })
}

fn file_stem(path: &Path) -> AnalysisResult<String> {
    path.file_stem()
        .and_then(OsStr::to_str)
        .map(str::to_string)
        .ok_or_else(|| AnalysisError::NonUtf8Name {
            path: path.to_path_buf(),
        })
}
