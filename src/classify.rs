/// Outcome classification and SAT/UNSAT reconciliation
///
/// The one piece of real decision logic in the combiner: turn each solver's
/// raw result text into a runtime cell and fold the terminal answers into a
/// single verdict, remembering whether the solvers ever disagreed.
use crate::table::RawEntry;
use crate::types::{RuntimeCell, SatStatus};

/// What a raw result string says, before reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Timeout,
    Error,
    Unsat,
    /// Anything that is neither a sentinel nor UNSAT; solvers print the
    /// model here, so the text is treated as satisfiable-with-model.
    Sat,
}

/// Classify one result string by substring markers.
pub fn classify_result(result: &str) -> Outcome {
    if result.contains("UNKNOWN (TIMEOUT)") {
        Outcome::Timeout
    } else if result.contains("UNKNOWN (ERROR)") {
        Outcome::Error
    } else if result.contains("UNSAT") {
        Outcome::Unsat
    } else {
        Outcome::Sat
    }
}

/// Result of classifying one merged row.
#[derive(Debug, Clone, PartialEq)]
pub struct Classified {
    /// One cell per solver, canonical order.
    pub cells: Vec<RuntimeCell>,
    /// Last terminal answer wins; Unknown if no solver gave one.
    pub status: SatStatus,
    /// True if any solver's terminal answer contradicted the verdict
    /// standing at its turn. Sentinels and gaps never set this.
    pub conflicted: bool,
}

fn parse_runtime(entry: &RawEntry, file_name: &str, label: &str) -> Result<f64, String> {
    entry
        .runtime
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("'{}': {} runtime '{}' is not a number", file_name, label, entry.runtime))
}

/// Classify one row's entries in canonical solver order.
///
/// Pure with respect to the row: the verdict starts at Unknown and is
/// updated solver by solver; each flip away from a prior terminal answer
/// marks the row conflicted. Timeouts and errors keep their sentinel cell
/// and never touch the verdict.
pub fn classify_entries(
    file_name: &str,
    labels: &[String],
    entries: &[Option<RawEntry>],
) -> Result<Classified, String> {
    let mut cells = Vec::with_capacity(entries.len());
    let mut status = SatStatus::Unknown;
    let mut conflicted = false;

    for (entry, label) in entries.iter().zip(labels) {
        let entry = match entry {
            Some(e) => e,
            None => {
                cells.push(RuntimeCell::Missing);
                continue;
            }
        };
        match classify_result(&entry.result) {
            Outcome::Timeout => cells.push(RuntimeCell::Timeout),
            Outcome::Error => cells.push(RuntimeCell::Error(parse_runtime(entry, file_name, label)?)),
            Outcome::Unsat => {
                if status == SatStatus::Sat {
                    conflicted = true;
                }
                status = SatStatus::Unsat;
                cells.push(RuntimeCell::Seconds(parse_runtime(entry, file_name, label)?));
            }
            Outcome::Sat => {
                if status == SatStatus::Unsat {
                    conflicted = true;
                }
                status = SatStatus::Sat;
                cells.push(RuntimeCell::Seconds(parse_runtime(entry, file_name, label)?));
            }
        }
    }

    Ok(Classified { cells, status, conflicted })
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;
