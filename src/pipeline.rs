//! The analysis pipeline.
//!
//! One linear batch pass: load the store, derive the aggregates, render
//! the box-plot, print the optimal counts. Every stage fails fast; no
//! partial report is ever produced.

use std::io;

use log::info;

use crate::aggregate;
use crate::config::AnalysisConfig;
use crate::error::AnalysisResult;
use crate::report;
use crate::store::ResultStore;

/// Runs one full analysis over `config.results_root`.
pub fn run(config: &AnalysisConfig) -> AnalysisResult<()> {
    let store = ResultStore::load(&config.results_root)?;
    info!(
        "loaded {} results from {} solvers under '{}'",
        store.result_count(),
        store.solver_count(),
        config.results_root.display()
    );

    let unsolved = aggregate::instances_without_solution(&store);
    info!(
        "{} instances lack a solution from at least one solver",
        unsolved.len()
    );

    let objectives = aggregate::objective_values_by_solver(&store, &unsolved)?;
    let counts = aggregate::optimal_counts(&store);

    let mut runtime_means: Vec<(String, f64)> =
        aggregate::mean_runtime_ms(&store).into_iter().collect();
    runtime_means.sort_by(|a, b| a.0.cmp(&b.0));
    for (solver, mean) in runtime_means {
        info!("solver '{solver}': mean runtime {mean:.1} ms");
    }

    let order = display_order(config, &store);
    report::render_objective_boxplot(&objectives, &order, &config.plot_output)?;
    report::write_optimal_counts(io::stdout(), &counts)?;
    Ok(())
}

/// Display order for the plot: the configured list, or every discovered
/// solver sorted by name when none was given.
fn display_order(config: &AnalysisConfig, store: &ResultStore) -> Vec<String> {
    if config.solver_order.is_empty() {
        let mut order: Vec<String> = store.solver_names().map(str::to_string).collect();
        order.sort();
        order
    } else {
        config.solver_order.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use crate::models::{SolveStatus, SolverResult};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_result_file(root: &Path, solver: &str, prescription: &str, file: &str, body: &str) {
        let dir = root.join(solver).join(prescription);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), body).unwrap();
    }

    #[test]
    fn test_run_end_to_end() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("results");
        write_result_file(
            &root,
            "greedy",
            "p1",
            "a.json",
            r#"{"status":1,"objectiveValue":10.0,"startTimes":[0]}"#,
        );
        write_result_file(&root, "greedy", "p1", "b.json", r#"{"status":2,"startTimes":[]}"#);
        write_result_file(
            &root,
            "tabu1",
            "p1",
            "a.json",
            r#"{"status":1,"objectiveValue":8.0,"startTimes":[0]}"#,
        );
        write_result_file(
            &root,
            "tabu1",
            "p1",
            "b.json",
            r#"{"status":1,"objectiveValue":5.0,"startTimes":[0]}"#,
        );
        let plot = dir.path().join("objective-values.svg");

        let config = AnalysisConfig::new(&root).with_plot_output(&plot);
        run(&config).unwrap();

        assert!(plot.exists());
    }

    #[test]
    fn test_run_fails_on_empty_results_root() {
        let dir = TempDir::new().unwrap();
        let config = AnalysisConfig::new(dir.path());

        let err = run(&config).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptySolverOrder));
    }

    #[test]
    fn test_display_order_prefers_configured_list() {
        let config = AnalysisConfig::new("unused")
            .with_solver_order(vec!["tabu1".to_string(), "greedy".to_string()]);
        let mut store = ResultStore::new();
        store.insert("greedy", "p1-a", SolverResult::new(SolveStatus::Optimal));

        let order = display_order(&config, &store);
        assert_eq!(order, vec!["tabu1", "greedy"]);
    }

    #[test]
    fn test_display_order_defaults_to_discovered_sorted() {
        let config = AnalysisConfig::new("unused");
        let mut store = ResultStore::new();
        store.insert("tabu1", "p1-a", SolverResult::new(SolveStatus::Optimal));
        store.insert("bab", "p1-a", SolverResult::new(SolveStatus::Optimal));
        store.insert("greedy", "p1-a", SolverResult::new(SolveStatus::Optimal));

        let order = display_order(&config, &store);
        assert_eq!(order, vec!["bab", "greedy", "tabu1"]);
    }
}
