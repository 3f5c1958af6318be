//! Command-line entry point for the solver benchmark analysis.

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use log::{error, LevelFilter};

use u_solverbench::config::AnalysisConfig;
use u_solverbench::error::AnalysisResult;
use u_solverbench::pipeline;

/// Analyzes solver experiment results: renders an objective-value
/// box-plot and prints per-solver optimal-solve counts.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Root of the results tree: <root>/<solver>/<prescription>/<instance>.json
    results_root: PathBuf,

    /// Output path for the objective-value box-plot (SVG).
    #[arg(long, default_value = "objective-values.svg")]
    out: PathBuf,

    /// Solver display order for the plot; repeatable. Defaults to every
    /// discovered solver, sorted by name.
    #[arg(long = "solver")]
    solvers: Vec<String>,

    /// Friendly label for a solver, as <name>=<label>; repeatable.
    #[arg(long = "label", value_parser = parse_label)]
    labels: Vec<(String, String)>,

    /// Enables debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_label(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((solver, label)) if !solver.is_empty() && !label.is_empty() => {
            Ok((solver.to_string(), label.to_string()))
        }
        _ => Err(format!("expected '<solver>=<label>', got '{raw}'")),
    }
}

fn configure_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter_level(level)
        .init();
}

fn run(args: Args) -> AnalysisResult<()> {
    let config = AnalysisConfig::new(args.results_root)
        .with_plot_output(args.out)
        .with_solver_order(args.solvers)
        .with_friendly_names(args.labels.into_iter().collect::<HashMap<_, _>>());
    pipeline::run(&config)
}

fn main() {
    let args = Args::parse();
    configure_logging(args.verbose);

    if let Err(err) = run(args) {
        error!("analysis failed: {err}");
        exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label() {
        assert_eq!(
            parse_label("tabu1=Tabu"),
            Ok(("tabu1".to_string(), "Tabu".to_string()))
        );
        assert!(parse_label("tabu1").is_err());
        assert!(parse_label("=Tabu").is_err());
        assert!(parse_label("tabu1=").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from([
            "u-solverbench",
            "results",
            "--out",
            "plot.svg",
            "--solver",
            "greedy",
            "--solver",
            "tabu1",
            "--label",
            "tabu1=Tabu",
        ]);
        assert_eq!(args.results_root, PathBuf::from("results"));
        assert_eq!(args.out, PathBuf::from("plot.svg"));
        assert_eq!(args.solvers, vec!["greedy", "tabu1"]);
        assert_eq!(
            args.labels,
            vec![("tabu1".to_string(), "Tabu".to_string())]
        );
        assert!(!args.verbose);
    }
}
