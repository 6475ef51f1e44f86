/// Configuration resolution module
///
/// This module handles:
/// - Building a ReportConfig from CLI arguments
/// - Expanding the default solver lineup
/// - Verifying every input table exists before any work starts
use crate::cli::CliArgs;
use log::debug;
use std::path::PathBuf;

/// One configured solver: the NAME selects its input file, the LABEL
/// prefixes its runtime column in the combined table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverSpec {
    pub name: String,
    pub label: String,
}

/// Fully resolved pipeline configuration.
///
/// The solver list is the canonical order: tables are merged, classified,
/// and rendered in exactly this sequence.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub solvers: Vec<SolverSpec>,
    pub results_dir: PathBuf,
    pub combined_path: PathBuf,
    pub report_path: PathBuf,
    pub json_path: Option<PathBuf>,
    pub skip_report: bool,
}

impl ReportConfig {
    /// Path of one solver's raw result table.
    pub fn input_path(&self, solver: &SolverSpec) -> PathBuf {
        self.results_dir.join(format!("results_{}.csv", solver.name))
    }

    /// Column labels in canonical order.
    pub fn labels(&self) -> Vec<String> {
        self.solvers.iter().map(|s| s.label.clone()).collect()
    }
}

/// The lineup used when no --solver flag is given.
fn default_solvers() -> Vec<SolverSpec> {
    [
        ("CRTSolver (Integer Mode)", "CRT-INT"),
        ("CRTSolver (Bit-Vector Mode)", "CRT-BV"),
        ("Z3", "Z3"),
        ("cvc5", "cvc5"),
    ]
    .iter()
    .map(|(name, label)| SolverSpec { name: name.to_string(), label: label.to_string() })
    .collect()
}

/// Parse one --solver value ("NAME" or "NAME=LABEL").
fn parse_solver_spec(arg: &str) -> Result<SolverSpec, String> {
    let (name, label) = match arg.split_once('=') {
        Some((name, label)) => (name.trim(), label.trim()),
        None => (arg.trim(), arg.trim()),
    };
    if name.is_empty() || label.is_empty() {
        return Err(format!("invalid solver spec '{}': empty name or label", arg));
    }
    Ok(SolverSpec { name: name.to_string(), label: label.to_string() })
}

/// Build a complete ReportConfig from CLI arguments.
///
/// All validation happens up front: duplicate labels and missing input
/// tables are rejected here so the combiner never starts on a partial set.
pub fn build_config(args: &CliArgs) -> Result<ReportConfig, String> {
    debug!("Building report config from CLI args");

    let solvers = if args.solvers.is_empty() {
        default_solvers()
    } else {
        args.solvers.iter().map(|s| parse_solver_spec(s)).collect::<Result<Vec<_>, _>>()?
    };

    for (i, solver) in solvers.iter().enumerate() {
        if solvers[..i].iter().any(|other| other.label == solver.label) {
            return Err(format!("duplicate solver label '{}'", solver.label));
        }
    }

    let config = ReportConfig {
        solvers,
        results_dir: args.results_dir.clone(),
        combined_path: args.combined_out.clone(),
        report_path: args.report_out.clone(),
        json_path: args.json.clone(),
        skip_report: args.skip_report,
    };

    // Missing input is fatal before any output is produced: the merge
    // needs every configured solver's table.
    for solver in &config.solvers {
        let path = config.input_path(solver);
        if !path.is_file() {
            return Err(format!(
                "missing results table for solver '{}': {}",
                solver.name,
                path.display()
            ));
        }
    }

    debug!("Resolved {} solvers from {}", config.solvers.len(), config.results_dir.display());

    Ok(config)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
