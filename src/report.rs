//! Comparison reporting: box-plot rendering and count summaries.
//!
//! The box-plot is written as an SVG file so headless runs are
//! reproducible; count lines go to any `Write` sink (stdout in the
//! pipeline). Both label solvers by their raw directory names.
//!
//! # Reference
//! Tukey (1977), "Exploratory Data Analysis", Ch. 2 (box-and-whisker displays)

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use log::info;
use plotters::data::fitting_range;
use plotters::prelude::*;

use crate::error::{AnalysisError, AnalysisResult};

/// Chart pixel dimensions.
const CHART_SIZE: (u32, u32) = (900, 600);

/// Renders one vertical box per solver, in `solver_order`, from that
/// solver's objective values.
///
/// A solver listed in `solver_order` but absent from `values` is an
/// error rather than a silently missing box, as is a solver with no
/// values left to plot. An empty `solver_order` is rejected up front.
pub fn render_objective_boxplot(
    values: &HashMap<String, Vec<f64>>,
    solver_order: &[String],
    out_path: &Path,
) -> AnalysisResult<()> {
    if solver_order.is_empty() {
        return Err(AnalysisError::EmptySolverOrder);
    }

    let mut boxes = Vec::with_capacity(solver_order.len());
    let mut all_values: Vec<f32> = Vec::new();
    for solver in solver_order {
        let solver_values = values
            .get(solver)
            .ok_or_else(|| AnalysisError::MissingSolver {
                solver: solver.clone(),
            })?;
        if solver_values.is_empty() {
            return Err(AnalysisError::EmptyDistribution {
                solver: solver.clone(),
            });
        }
        all_values.extend(solver_values.iter().map(|&v| v as f32));
        boxes.push((solver, Quartiles::new(solver_values)));
    }

    let y_range = fitting_range(all_values.iter());
    let y_pad = ((y_range.end - y_range.start) * 0.05).max(1.0);

    let root = SVGBackend::new(out_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| chart_error(out_path, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Objective values", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(
            solver_order.into_segmented(),
            (y_range.start - y_pad)..(y_range.end + y_pad),
        )
        .map_err(|e| chart_error(out_path, e))?;

    chart
        .configure_mesh()
        .x_desc("Solver")
        .y_desc("Objective value")
        .draw()
        .map_err(|e| chart_error(out_path, e))?;

    chart
        .draw_series(boxes.iter().map(|(solver, quartiles)| {
            Boxplot::new_vertical(SegmentValue::CenterOf(*solver), quartiles)
        }))
        .map_err(|e| chart_error(out_path, e))?;

    root.present().map_err(|e| chart_error(out_path, e))?;
    info!("wrote objective-value box-plot to '{}'", out_path.display());
    Ok(())
}

/// Writes one `Optimal instances for <solver>: <count>` line per solver.
///
/// Lines are sorted by solver name so output is stable across runs.
pub fn write_optimal_counts<W: Write>(
    mut sink: W,
    counts: &HashMap<String, usize>,
) -> AnalysisResult<()> {
    let mut entries: Vec<(&str, usize)> = counts
        .iter()
        .map(|(solver, count)| (solver.as_str(), *count))
        .collect();
    entries.sort();
    for (solver, count) in entries {
        writeln!(sink, "Optimal instances for {solver}: {count}")?;
    }
    Ok(())
}

fn chart_error(path: &Path, err: impl std::error::Error) -> AnalysisError {
    AnalysisError::Render {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn values_for(entries: &[(&str, &[f64])]) -> HashMap<String, Vec<f64>> {
        entries
            .iter()
            .map(|(solver, values)| (solver.to_string(), values.to_vec()))
            .collect()
    }

    #[test]
    fn test_count_lines_sorted_by_solver() {
        let mut counts = HashMap::new();
        counts.insert("tabu1".to_string(), 12);
        counts.insert("greedy".to_string(), 7);
        counts.insert("bab".to_string(), 31);

        let mut out = Vec::new();
        write_optimal_counts(&mut out, &counts).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Optimal instances for bab: 31\n\
             Optimal instances for greedy: 7\n\
             Optimal instances for tabu1: 12\n"
        );
    }

    #[test]
    fn test_count_lines_empty() {
        let mut out = Vec::new();
        write_optimal_counts(&mut out, &HashMap::new()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_boxplot_missing_solver_fails() {
        let values = values_for(&[("greedy", &[1.0, 2.0])]);
        let order = vec!["greedy".to_string(), "vanished".to_string()];

        let err =
            render_objective_boxplot(&values, &order, Path::new("unused.svg")).unwrap_err();
        assert!(matches!(err, AnalysisError::MissingSolver { solver } if solver == "vanished"));
    }

    #[test]
    fn test_boxplot_empty_distribution_fails() {
        let values = values_for(&[("greedy", &[])]);
        let order = vec!["greedy".to_string()];

        let err =
            render_objective_boxplot(&values, &order, Path::new("unused.svg")).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyDistribution { solver } if solver == "greedy"));
    }

    #[test]
    fn test_boxplot_empty_order_fails() {
        let values = values_for(&[("greedy", &[1.0, 2.0])]);

        let err = render_objective_boxplot(&values, &[], Path::new("unused.svg")).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptySolverOrder));
    }

    #[test]
    fn test_boxplot_writes_svg() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("plot.svg");
        let values = values_for(&[("greedy", &[10.0, 12.0, 11.0]), ("tabu1", &[8.0, 9.0])]);
        let order = vec!["greedy".to_string(), "tabu1".to_string()];

        render_objective_boxplot(&values, &order, &out).unwrap();

        let svg = fs::read_to_string(&out).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("greedy"));
        assert!(svg.contains("tabu1"));
    }
}
