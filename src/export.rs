//! JSON export of the combined table.
//!
//! Optional companion output for downstream analysis: the same records the
//! combined CSV holds, plus per-status summary counts.

use crate::types::{ProblemRecord, SatStatus};
use std::fs::File;
use std::path::Path;

/// Export the combined table as pretty-printed JSON.
pub fn export_json(records: &[ProblemRecord], labels: &[String], path: &Path) -> Result<(), String> {
    use serde_json::json;

    let count = |status: SatStatus| records.iter().filter(|r| r.status == status).count();

    let report = json!({
        "solvers": labels,
        "summary": {
            "sat": count(SatStatus::Sat),
            "unsat": count(SatStatus::Unsat),
            "unresolved": count(SatStatus::Unknown),
            "total": records.len(),
        },
        "records": records,
    });

    let file = File::create(path).map_err(|e| format!("cannot write {}: {}", path.display(), e))?;
    serde_json::to_writer_pretty(file, &report).map_err(|e| format!("{}: {}", path.display(), e))?;

    Ok(())
}
