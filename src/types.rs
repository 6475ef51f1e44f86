/// Core data structures for the report pipeline
///
/// This module defines the record types shared by the table combiner
/// and the LaTeX formatter.
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Reconciled satisfiability verdict for a problem file.
///
/// A conflict between solvers is not a verdict of its own; classification
/// reports it separately (see `classify::Classified::conflicted`) so the
/// verdict value can still follow last-write-wins across solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SatStatus {
    Sat,
    Unsat,
    /// No solver produced a terminal answer, serialized as `?`.
    Unknown,
}

impl SatStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SatStatus::Sat => "SAT",
            SatStatus::Unsat => "UNSAT",
            SatStatus::Unknown => "?",
        }
    }

    /// Parse the exact tokens accepted by the combined CSV and the manual
    /// resolution prompt. Anything else is rejected.
    pub fn parse(s: &str) -> Option<SatStatus> {
        match s {
            "SAT" => Some(SatStatus::Sat),
            "UNSAT" => Some(SatStatus::Unsat),
            "?" => Some(SatStatus::Unknown),
            _ => None,
        }
    }
}

impl Serialize for SatStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One runtime cell of the combined table.
///
/// Sentinel shapes (`T/O`, `I/O (..)`) survive into the combined CSV as
/// literal text; `Missing` marks a coverage gap from the outer join and
/// serializes as an empty field.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeCell {
    /// File absent from this solver's input table.
    Missing,
    /// Plain runtime in seconds.
    Seconds(f64),
    /// Solver hit the time limit.
    Timeout,
    /// Solver errored out after the wrapped number of seconds.
    Error(f64),
}

impl RuntimeCell {
    /// CSV field representation used in the combined table.
    pub fn to_field(&self) -> String {
        match self {
            RuntimeCell::Missing => String::new(),
            RuntimeCell::Seconds(s) => format!("{}", s),
            RuntimeCell::Timeout => "T/O".to_string(),
            RuntimeCell::Error(s) => format!("I/O ({})", s),
        }
    }
}

impl Serialize for RuntimeCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_field())
    }
}

/// One row of the combined table: a problem file with its reconciled
/// verdict and one runtime cell per solver in canonical order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemRecord {
    pub file_name: String,
    pub variables: u32,
    pub degree: u32,
    pub status: SatStatus,
    pub cells: Vec<RuntimeCell>,
}

impl Serialize for ProblemRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ProblemRecord", 5)?;
        s.serialize_field("file_name", &self.file_name)?;
        s.serialize_field("variables", &self.variables)?;
        s.serialize_field("degree", &self.degree)?;
        s.serialize_field("status", &self.status)?;
        s.serialize_field("runtimes", &self.cells)?;
        s.end()
    }
}
