/// Tests for table loading, merging, and normalization
#[cfg(test)]
mod tests {
    use crate::table::{extract_int, load_solver_table, merge_tables, normalize_rows, RawRow};
    use std::io::Write;

    fn row(file: &str, vars: &str, deg: &str, runtime: &str, result: &str) -> RawRow {
        RawRow {
            file_name: file.to_string(),
            variables: vars.to_string(),
            degree: deg.to_string(),
            runtime: runtime.to_string(),
            result: result.to_string(),
        }
    }

    #[test]
    fn test_extract_int() {
        assert_eq!(extract_int("3 variables", "f", "variables").unwrap(), 3);
        assert_eq!(extract_int("2", "f", "degree").unwrap(), 2);
        assert_eq!(extract_int("degree 12 (max)", "f", "degree").unwrap(), 12);
    }

    #[test]
    fn test_extract_int_no_digits_is_fatal() {
        let err = extract_int("many", "f1.smt2", "variables").unwrap_err();
        assert!(err.contains("f1.smt2"));
        assert!(err.contains("variables"));
    }

    #[test]
    fn test_outer_join_keeps_the_union() {
        let a = vec![
            row("f1.smt2", "3 variables", "2", "0.1", "SAT"),
            row("f2.smt2", "5 variables", "4", "0.2", "UNSAT"),
        ];
        let b = vec![
            row("f2.smt2", "5 variables", "4", "0.3", "UNSAT"),
            row("f3.smt2", "7 variables", "6", "0.4", "SAT"),
        ];
        let merged = merge_tables(&[a, b]);

        assert_eq!(merged.len(), 3, "union of both tables");
        let f1 = merged.iter().find(|m| m.file_name == "f1.smt2").unwrap();
        assert!(f1.entries[0].is_some());
        assert!(f1.entries[1].is_none(), "gap for the solver lacking the file");
        let f3 = merged.iter().find(|m| m.file_name == "f3.smt2").unwrap();
        assert!(f3.entries[0].is_none());
        assert!(f3.entries[1].is_some());
        // Metadata for a late-arriving file comes from the table that has it
        assert_eq!(f3.variables, "7 variables");
    }

    #[test]
    fn test_each_file_appears_once() {
        let a = vec![row("f1.smt2", "3 variables", "2", "0.1", "SAT")];
        let b = vec![row("f1.smt2", "3 variables", "2", "0.2", "SAT")];
        let merged = merge_tables(&[a, b]);
        assert_eq!(merged.len(), 1);
        assert!(merged[0].entries.iter().all(|e| e.is_some()));
    }

    #[test]
    fn test_normalize_sorts_by_variables_then_degree() {
        let a = vec![
            row("big.smt2", "5 variables", "2", "0.1", "SAT"),
            row("deep.smt2", "3 variables", "8", "0.1", "SAT"),
            row("small.smt2", "3 variables", "2", "0.1", "SAT"),
        ];
        let rows = normalize_rows(merge_tables(&[a])).unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["small.smt2", "deep.smt2", "big.smt2"]);
        assert_eq!(rows[0].variables, 3);
        assert_eq!(rows[0].degree, 2);
    }

    #[test]
    fn test_load_drops_footer_and_extra_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results_A.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "FileName,Variables,Degree,Timeout,Runtime (s),Result").unwrap();
        writeln!(f, "f1.smt2,3 variables,2,120,0.0034,SAT (model: x=1)").unwrap();
        writeln!(f, "f2.smt2,5 variables,4,120,12.5,UNKNOWN (TIMEOUT)").unwrap();
        writeln!(f, "TOTAL,,,,12.5034,2 solved").unwrap();
        drop(f);

        let rows = load_solver_table(&path).unwrap();
        assert_eq!(rows.len(), 2, "summary footer must be discarded");
        assert_eq!(rows[0].file_name, "f1.smt2");
        assert_eq!(rows[0].runtime, "0.0034");
        assert_eq!(rows[1].result, "UNKNOWN (TIMEOUT)");
    }

    #[test]
    fn test_load_missing_column_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results_A.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "FileName,Variables,Degree,Result").unwrap();
        writeln!(f, "f1.smt2,3 variables,2,SAT").unwrap();
        drop(f);

        let err = load_solver_table(&path).unwrap_err();
        assert!(err.contains("Runtime (s)"), "error should name the column: {}", err);
    }
}
