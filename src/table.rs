/// Raw table loading and merging
///
/// This module handles:
/// - Reading one CSV per solver and selecting the schema columns
/// - Dropping the trailing summary footer each table carries
/// - Outer-joining all tables on the problem file name
/// - Normalizing the free-text metadata fields
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;

/// One data row of a raw solver table, schema columns only.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub file_name: String,
    pub variables: String,
    pub degree: String,
    pub runtime: String,
    pub result: String,
}

/// One solver's contribution to a merged row.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    pub runtime: String,
    pub result: String,
}

/// Outer-joined row before classification: metadata still free text, one
/// optional entry per solver in canonical order (None = coverage gap).
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRow {
    pub file_name: String,
    pub variables: String,
    pub degree: String,
    pub entries: Vec<Option<RawEntry>>,
}

/// Merged row with metadata normalized to integers, ready to classify.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    pub file_name: String,
    pub variables: u32,
    pub degree: u32,
    pub entries: Vec<Option<RawEntry>>,
}

const SCHEMA: [&str; 5] = ["FileName", "Variables", "Degree", "Runtime (s)", "Result"];

/// Load one solver's result table.
///
/// Precondition: the table ends with a summary footer row; the final row is
/// always discarded. Columns are located by header name, so extra columns
/// in the input are ignored.
pub fn load_solver_table(path: &Path) -> Result<Vec<RawRow>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| format!("failed to open {}: {}", path.display(), e))?;

    let headers = reader
        .headers()
        .map_err(|e| format!("{}: cannot read header row: {}", path.display(), e))?
        .clone();
    let mut indices = [0usize; SCHEMA.len()];
    for (i, column) in SCHEMA.iter().enumerate() {
        indices[i] = headers
            .iter()
            .position(|h| h == *column)
            .ok_or_else(|| format!("{}: missing column '{}'", path.display(), column))?;
    }

    let mut rows = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record =
            result.map_err(|e| format!("{}: CSV parse error at row {}: {}", path.display(), row_idx + 2, e))?;
        let field = |i: usize| record.get(indices[i]).unwrap_or("").to_string();
        rows.push(RawRow {
            file_name: field(0),
            variables: field(1),
            degree: field(2),
            runtime: field(3),
            result: field(4),
        });
    }

    // The last row is the summary footer, never data.
    rows.pop();

    debug!("Loaded {} data rows from {}", rows.len(), path.display());

    Ok(rows)
}

/// Outer-join the solver tables on file name.
///
/// The first table seeds row order and metadata; a file first seen in a
/// later table still gets its metadata from that table, so every file in
/// the union of the inputs appears exactly once.
pub fn merge_tables(tables: &[Vec<RawRow>]) -> Vec<MergedRow> {
    let mut merged: Vec<MergedRow> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (solver_idx, table) in tables.iter().enumerate() {
        for row in table {
            let at = match index.get(&row.file_name) {
                Some(&at) => at,
                None => {
                    index.insert(row.file_name.clone(), merged.len());
                    merged.push(MergedRow {
                        file_name: row.file_name.clone(),
                        variables: row.variables.clone(),
                        degree: row.degree.clone(),
                        entries: vec![None; tables.len()],
                    });
                    merged.len() - 1
                }
            };
            merged[at].entries[solver_idx] =
                Some(RawEntry { runtime: row.runtime.clone(), result: row.result.clone() });
        }
    }

    merged
}

/// Extract the first decimal-digit run from a free-text field
/// (e.g. "3 variables" -> 3). No digit run is a fatal data-quality error.
pub fn extract_int(text: &str, file_name: &str, field: &str) -> Result<u32, String> {
    lazy_static! {
        static ref DIGITS: Regex = Regex::new(r"\d+").unwrap();
    }
    let run = DIGITS
        .find(text)
        .ok_or_else(|| format!("'{}': no integer in {} field '{}'", file_name, field, text))?;
    run.as_str()
        .parse::<u32>()
        .map_err(|e| format!("'{}': {} field '{}': {}", file_name, field, text, e))
}

/// Normalize metadata to integers and sort by (variables, degree).
///
/// The sort is stable, so rows with equal keys keep their merge order.
pub fn normalize_rows(rows: Vec<MergedRow>) -> Result<Vec<NormalizedRow>, String> {
    let mut normalized = Vec::with_capacity(rows.len());
    for row in rows {
        normalized.push(NormalizedRow {
            variables: extract_int(&row.variables, &row.file_name, "variables")?,
            degree: extract_int(&row.degree, &row.file_name, "degree")?,
            file_name: row.file_name,
            entries: row.entries,
        });
    }
    normalized.sort_by_key(|r| (r.variables, r.degree));
    Ok(normalized)
}

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;
