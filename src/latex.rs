/// LaTeX table body generation
///
/// Re-reads the combined CSV fresh from disk and renders one `&`-delimited,
/// `\\`-terminated line per record. The surrounding tabular environment is
/// supplied by the consuming document, so there is no header or footer.
///
/// Runtime cells follow a two-branch numeric rule: below one second,
/// scientific notation with three significant figures as an explicit
/// power-of-ten expression; otherwise fixed point with three decimals.
use crate::config::ReportConfig;
use lazy_static::lazy_static;
use log::info;
use regex::Regex;
use std::fs;
use std::path::Path;

/// One row read back from the combined CSV; runtime cells stay text
/// because sentinels live alongside plain numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedRow {
    pub file_name: String,
    pub variables: String,
    pub degree: String,
    pub status: String,
    pub cells: Vec<String>,
}

/// Read the combined table back. Layout is fixed (see combine module), so
/// fields are taken positionally: four leading columns, then one runtime
/// cell per solver.
pub fn read_combined(path: &Path, solver_count: usize) -> Result<Vec<CombinedRow>, String> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| format!("failed to open {}: {}", path.display(), e))?;

    let mut rows = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record =
            result.map_err(|e| format!("{}: CSV parse error at row {}: {}", path.display(), row_idx + 2, e))?;
        if record.len() != 4 + solver_count {
            return Err(format!(
                "{}: row {} has {} columns, expected {}",
                path.display(),
                row_idx + 2,
                record.len(),
                4 + solver_count
            ));
        }
        rows.push(CombinedRow {
            file_name: record[0].to_string(),
            variables: record[1].to_string(),
            degree: record[2].to_string(),
            status: record[3].to_string(),
            cells: record.iter().skip(4).map(|s| s.to_string()).collect(),
        });
    }

    Ok(rows)
}

/// Format a plain runtime in seconds.
pub fn format_seconds(r: f64) -> String {
    if r < 1.0 { scientific(r) } else { format!("${:.3}$", r) }
}

/// Scientific notation with exactly 3 significant figures: one digit
/// before the decimal point, two after, and a power-of-ten term.
fn scientific(r: f64) -> String {
    if r <= 0.0 {
        // Zero has no magnitude; measured runtimes of 0.0 do occur when a
        // solver's timer granularity is coarser than the solve.
        return "$0.00 \\times 10^{0}$".to_string();
    }
    let mut exponent = r.log10().floor() as i32;
    let mut mantissa = r / 10f64.powi(exponent);
    // Rounding the mantissa to two decimals can push it to 10.00.
    if format!("{:.2}", mantissa) == "10.00" {
        mantissa /= 10.0;
        exponent += 1;
    }
    format!("${:.2} \\times 10^{{{}}}$", mantissa, exponent)
}

/// Format one runtime cell of the combined table.
///
/// `T/O` passes through, `I/O (v)` unwraps and formats v recursively as
/// `U (<formatted>)`, an empty cell (coverage gap) renders blank, and
/// anything else must be a plain number.
pub fn format_cell(field: &str) -> Result<String, String> {
    lazy_static! {
        static ref ERROR_CELL: Regex = Regex::new(r"^I/O\s*\((\d*\.?\d+)\)$").unwrap();
    }
    let field = field.trim();
    if field.is_empty() {
        return Ok(String::new());
    }
    if field == "T/O" {
        return Ok("T/O".to_string());
    }
    if let Some(captures) = ERROR_CELL.captures(field) {
        let wrapped: f64 = captures[1]
            .parse()
            .map_err(|_| format!("bad error cell '{}'", field))?;
        return Ok(format!("U ({})", format_seconds(wrapped)));
    }
    let r: f64 = field.parse().map_err(|_| format!("bad runtime cell '{}'", field))?;
    Ok(format_seconds(r))
}

/// Render one combined-table row as a LaTeX table body line.
///
/// The fourth field is the equation count, which no solver reports yet;
/// it renders as a literal `?` placeholder.
pub fn format_row(row: &CombinedRow) -> Result<String, String> {
    let cells: Vec<String> = row
        .cells
        .iter()
        .map(|cell| format_cell(cell).map_err(|e| format!("'{}': {}", row.file_name, e)))
        .collect::<Result<_, _>>()?;
    Ok(format!(
        "{} & {} & {} & ? & {} & {} \\\\",
        row.file_name,
        row.variables,
        row.degree,
        row.status,
        cells.join(" & ")
    ))
}

/// Read the combined table and write the LaTeX table body.
pub fn run(config: &ReportConfig) -> Result<(), String> {
    let rows = read_combined(&config.combined_path, config.solvers.len())?;
    let lines: Vec<String> = rows.iter().map(format_row).collect::<Result<_, _>>()?;
    info!("Formatted {} LaTeX rows", lines.len());

    if let Some(parent) = config.report_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("cannot create {}: {}", parent.display(), e))?;
        }
    }
    fs::write(&config.report_path, lines.join("\n"))
        .map_err(|e| format!("cannot write {}: {}", config.report_path.display(), e))?;

    Ok(())
}

#[cfg(test)]
#[path = "latex_test.rs"]
mod latex_test;
