/// Tests for the classification state machine
#[cfg(test)]
mod tests {
    use crate::classify::{classify_entries, classify_result, Outcome};
    use crate::table::RawEntry;
    use crate::types::{RuntimeCell, SatStatus};

    fn entry(runtime: &str, result: &str) -> Option<RawEntry> {
        Some(RawEntry { runtime: runtime.to_string(), result: result.to_string() })
    }

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("S{}", i + 1)).collect()
    }

    #[test]
    fn test_result_markers() {
        assert_eq!(classify_result("UNKNOWN (TIMEOUT)"), Outcome::Timeout);
        assert_eq!(classify_result("UNKNOWN (ERROR)"), Outcome::Error);
        assert_eq!(classify_result("UNSAT"), Outcome::Unsat);
        assert_eq!(classify_result("SAT (model: x=1)"), Outcome::Sat);
        // No marker at all still reads as satisfiable-with-model
        assert_eq!(classify_result("x = 3, y = 7"), Outcome::Sat);
    }

    #[test]
    fn test_agreement_is_not_a_conflict() {
        let entries = vec![entry("0.1", "SAT (model: x=1)"), entry("0.2", "SAT (model: x=1)")];
        let c = classify_entries("f.smt2", &labels(2), &entries).unwrap();
        assert_eq!(c.status, SatStatus::Sat);
        assert!(!c.conflicted);
    }

    #[test]
    fn test_conflict_detected_in_both_orders() {
        let sat_then_unsat = vec![entry("0.1", "SAT (model: x=1)"), entry("0.2", "UNSAT")];
        let c = classify_entries("f.smt2", &labels(2), &sat_then_unsat).unwrap();
        assert!(c.conflicted);
        assert_eq!(c.status, SatStatus::Unsat, "last terminal answer wins");

        let unsat_then_sat = vec![entry("0.1", "UNSAT"), entry("0.2", "SAT (model: x=1)")];
        let c = classify_entries("f.smt2", &labels(2), &unsat_then_sat).unwrap();
        assert!(c.conflicted);
        assert_eq!(c.status, SatStatus::Sat);
    }

    #[test]
    fn test_sentinels_never_touch_the_verdict() {
        // UNSAT answered first; a later timeout and error must not move it
        let entries = vec![
            entry("0.1", "UNSAT"),
            entry("120", "UNKNOWN (TIMEOUT)"),
            entry("3.5", "UNKNOWN (ERROR)"),
        ];
        let c = classify_entries("f.smt2", &labels(3), &entries).unwrap();
        assert_eq!(c.status, SatStatus::Unsat);
        assert!(!c.conflicted);
        assert_eq!(
            c.cells,
            vec![RuntimeCell::Seconds(0.1), RuntimeCell::Timeout, RuntimeCell::Error(3.5)]
        );
    }

    #[test]
    fn test_only_sentinels_leaves_unknown() {
        let entries = vec![entry("120", "UNKNOWN (TIMEOUT)"), entry("120", "UNKNOWN (TIMEOUT)")];
        let c = classify_entries("f.smt2", &labels(2), &entries).unwrap();
        assert_eq!(c.status, SatStatus::Unknown);
        assert!(!c.conflicted);
    }

    #[test]
    fn test_coverage_gap_is_missing_cell() {
        let entries = vec![None, entry("0.2", "UNSAT")];
        let c = classify_entries("f.smt2", &labels(2), &entries).unwrap();
        assert_eq!(c.cells[0], RuntimeCell::Missing);
        assert_eq!(c.status, SatStatus::Unsat);
        assert!(!c.conflicted);
    }

    #[test]
    fn test_three_way_flip_stays_conflicted() {
        let entries = vec![
            entry("0.1", "SAT (model: x=1)"),
            entry("0.2", "UNSAT"),
            entry("0.3", "SAT (model: x=2)"),
        ];
        let c = classify_entries("f.smt2", &labels(3), &entries).unwrap();
        assert!(c.conflicted);
        assert_eq!(c.status, SatStatus::Sat);
    }

    #[test]
    fn test_unparseable_runtime_is_fatal() {
        let entries = vec![entry("fast", "SAT (model: x=1)")];
        let err = classify_entries("f.smt2", &labels(1), &entries).unwrap_err();
        assert!(err.contains("f.smt2"), "error should name the file: {}", err);
        assert!(err.contains("S1"), "error should name the solver: {}", err);
    }

    #[test]
    fn test_timeout_runtime_text_is_not_parsed() {
        // Timeout rows keep whatever the runtime column held; only plain and
        // error cells need a number
        let entries = vec![entry("-", "UNKNOWN (TIMEOUT)"), entry("0.2", "UNSAT")];
        let c = classify_entries("f.smt2", &labels(2), &entries).unwrap();
        assert_eq!(c.cells[0], RuntimeCell::Timeout);
    }
}
