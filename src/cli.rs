use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "solver-report")]
#[command(about = "Merge per-solver benchmark CSVs into a reconciled table and a LaTeX report")]
#[command(version)]
pub struct CliArgs {
    /// Directory containing the per-solver result tables
    /// (one "results_<NAME>.csv" per configured solver)
    #[arg(long, value_name = "DIR", default_value = "results")]
    pub results_dir: PathBuf,

    /// Solver to include, in merge order (repeatable)
    /// Accepts "NAME" or "NAME=LABEL"; NAME selects the input file,
    /// LABEL prefixes the runtime column (defaults to NAME)
    /// Omitting the flag selects the built-in four-solver lineup
    #[arg(long = "solver", value_name = "NAME[=LABEL]", num_args = 1..)]
    pub solvers: Vec<String>,

    /// Combined CSV output path
    #[arg(long, value_name = "PATH", default_value = "output/combined_results.csv")]
    pub combined_out: PathBuf,

    /// LaTeX table body output path
    #[arg(long, value_name = "PATH", default_value = "output/latex_table.txt")]
    pub report_out: PathBuf,

    /// Also export the combined table as JSON
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Stop after writing the combined CSV (skip the LaTeX pass)
    #[arg(long)]
    pub skip_report: bool,
}

impl CliArgs {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations before any file is touched
    pub fn validate(&self) -> Result<(), String> {
        if self.combined_out == self.report_out {
            return Err("--combined-out and --report-out must be different paths".to_string());
        }
        if let Some(json) = &self.json {
            if *json == self.combined_out || *json == self.report_out {
                return Err("--json must not collide with another output path".to_string());
            }
        }
        Ok(())
    }
}
