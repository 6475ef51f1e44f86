/// Table combiner: load, merge, reconcile, persist
///
/// Drives steps in a fixed order: read every solver table, outer-join on
/// file name, normalize and sort, classify each row, resolve the ambiguous
/// ones through the injected `Resolver`, then write the combined CSV in one
/// shot. Nothing is written until resolution has finished.
use crate::classify::classify_entries;
use crate::config::ReportConfig;
use crate::resolve::Resolver;
use crate::table::{load_solver_table, merge_tables, normalize_rows};
use crate::types::{ProblemRecord, SatStatus};
use crate::ui;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Build the reconciled combined table.
pub fn run(config: &ReportConfig, resolver: &mut dyn Resolver) -> Result<Vec<ProblemRecord>, String> {
    let mut tables = Vec::with_capacity(config.solvers.len());
    for solver in &config.solvers {
        tables.push(load_solver_table(&config.input_path(solver))?);
    }

    let rows = normalize_rows(merge_tables(&tables))?;
    info!("Merged {} solver tables into {} rows", tables.len(), rows.len());

    let labels = config.labels();
    let mut records = Vec::with_capacity(rows.len());
    let mut pending = Vec::new();
    for row in rows {
        let classified = classify_entries(&row.file_name, &labels, &row.entries)?;
        if classified.conflicted {
            debug!("Solvers disagree on '{}'", row.file_name);
        }
        if classified.conflicted || classified.status == SatStatus::Unknown {
            pending.push(records.len());
        }
        records.push(ProblemRecord {
            file_name: row.file_name,
            variables: row.variables,
            degree: row.degree,
            status: classified.status,
            cells: classified.cells,
        });
    }

    // Ambiguous rows go to the external decision-maker, in table order;
    // the reply overrides whatever the solvers implied.
    if !pending.is_empty() {
        ui::status(&format!("manual intervention required for {} file(s)", pending.len()));
        for at in pending {
            records[at].status = resolver.resolve(&records[at].file_name)?;
        }
    }

    Ok(records)
}

/// Persist the combined table.
///
/// Column order is fixed: FileName, Variables, Degree, SAT, then one
/// runtime column per solver in canonical order.
pub fn write_combined(records: &[ProblemRecord], labels: &[String], path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("cannot create {}: {}", parent.display(), e))?;
        }
    }

    let mut writer =
        csv::Writer::from_path(path).map_err(|e| format!("cannot write {}: {}", path.display(), e))?;

    let mut header = vec!["FileName".to_string(), "Variables".to_string(), "Degree".to_string(), "SAT".to_string()];
    header.extend(labels.iter().map(|label| format!("{} Runtime", label)));
    writer.write_record(&header).map_err(|e| format!("{}: {}", path.display(), e))?;

    for record in records {
        let mut fields = vec![
            record.file_name.clone(),
            record.variables.to_string(),
            record.degree.to_string(),
            record.status.as_str().to_string(),
        ];
        fields.extend(record.cells.iter().map(|cell| cell.to_field()));
        writer.write_record(&fields).map_err(|e| format!("{}: {}", path.display(), e))?;
    }

    writer.flush().map_err(|e| format!("{}: {}", path.display(), e))?;

    Ok(())
}

#[cfg(test)]
#[path = "combine_test.rs"]
mod combine_test;
