//! Run configuration.
//!
//! All inputs of an analysis run are explicit; there is no process-wide
//! default results location.

use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Root of the results tree (`<root>/<solver>/<prescription>/...`).
    pub results_root: PathBuf,
    /// Output path for the objective-value box-plot (SVG).
    pub plot_output: PathBuf,
    /// Solver display order for the box-plot. Empty means every
    /// discovered solver, sorted by name.
    pub solver_order: Vec<String>,
    /// Human-readable solver labels. Carried for callers that want them;
    /// reports label solvers by their raw directory names.
    pub friendly_names: HashMap<String, String>,
}

impl AnalysisConfig {
    /// Creates a configuration with defaults for everything but the root.
    pub fn new(results_root: impl Into<PathBuf>) -> Self {
        Self {
            results_root: results_root.into(),
            plot_output: PathBuf::from("objective-values.svg"),
            solver_order: Vec::new(),
            friendly_names: HashMap::new(),
        }
    }

    /// Sets the chart output path.
    pub fn with_plot_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.plot_output = path.into();
        self
    }

    /// Sets the solver display order.
    pub fn with_solver_order(mut self, order: Vec<String>) -> Self {
        self.solver_order = order;
        self
    }

    /// Sets the friendly-name mapping.
    pub fn with_friendly_names(mut self, names: HashMap<String, String>) -> Self {
        self.friendly_names = names;
        self
    }

    /// Adds one friendly name.
    pub fn with_friendly_name(
        mut self,
        solver: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.friendly_names.insert(solver.into(), label.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AnalysisConfig::new("results");
        assert_eq!(config.results_root, PathBuf::from("results"));
        assert_eq!(config.plot_output, PathBuf::from("objective-values.svg"));
        assert!(config.solver_order.is_empty());
        assert!(config.friendly_names.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = AnalysisConfig::new("results")
            .with_plot_output("out/plot.svg")
            .with_solver_order(vec!["greedy".into(), "tabu1".into()])
            .with_friendly_name("tabu1", "Tabu")
            .with_friendly_name("bab", "BranchAndBound");

        assert_eq!(config.plot_output, PathBuf::from("out/plot.svg"));
        assert_eq!(config.solver_order, vec!["greedy", "tabu1"]);
        assert_eq!(config.friendly_names.get("tabu1"), Some(&"Tabu".to_string()));
        assert_eq!(config.friendly_names.len(), 2);
    }
}
