//! # Representation of solver results
//!
//! An external solver reports how it terminated with a status code, and reports the values it
//! found in a human readable table. Both are represented here once read.
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

/// How the solver terminated.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Status {
    NotSet,
    LoadError,
    ModelError,
    PresolveError,
    SolveError,
    PostsolveError,
    Empty,
    Optimal,
    Infeasible,
    PrimalInfeasibleOrUnbounded,
    Unbounded,
    ObjectiveBound,
    ObjectiveTarget,
    TimeLimit,
    IterationLimit,
    Unknown,
}

const ALL: [Status; 16] = [
    Status::NotSet,
    Status::LoadError,
    Status::ModelError,
    Status::PresolveError,
    Status::SolveError,
    Status::PostsolveError,
    Status::Empty,
    Status::Optimal,
    Status::Infeasible,
    Status::PrimalInfeasibleOrUnbounded,
    Status::Unbounded,
    Status::ObjectiveBound,
    Status::ObjectiveTarget,
    Status::TimeLimit,
    Status::IterationLimit,
    Status::Unknown,
];

impl Status {
    /// Interpret a status code returned by the solver.
    ///
    /// Codes outside of the known range are `Unknown`.
    pub fn from_code(code: i32) -> Self {
        usize::try_from(code).ok()
            .and_then(|index| ALL.get(index))
            .copied()
            .unwrap_or(Status::Unknown)
    }

    /// The code the solver uses for this status.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Human readable description, as the solver prints it.
    pub fn label(self) -> &'static str {
        match self {
            Status::NotSet => "Not Set",
            Status::LoadError => "Load error",
            Status::ModelError => "Model error",
            Status::PresolveError => "Presolve error",
            Status::SolveError => "Solve error",
            Status::PostsolveError => "Postsolve error",
            Status::Empty => "Empty",
            Status::Optimal => "Optimal",
            Status::Infeasible => "Infeasible",
            Status::PrimalInfeasibleOrUnbounded => "Primal infeasible or unbounded",
            Status::Unbounded => "Unbounded",
            Status::ObjectiveBound => "Bound on objective reached",
            Status::ObjectiveTarget => "Target for objective reached",
            Status::TimeLimit => "Time limit reached",
            Status::IterationLimit => "Iteration limit reached",
            Status::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        ALL.iter()
            .find(|status| status.label() == label)
            .copied()
            .ok_or_else(|| format!("Unknown status \"{}\"", label))
    }
}

/// One line of the column or row table of a solver report.
///
/// Only the fields for which the report has a column are `Some`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    /// Position in the model.
    pub index: Option<i64>,
    #[allow(missing_docs)]
    pub lower: Option<f64>,
    #[allow(missing_docs)]
    pub upper: Option<f64>,
    /// Value in the solution.
    pub primal: Option<f64>,
    /// Reduced cost or shadow price.
    pub dual: Option<f64>,
    /// Name of the row. For columns, the name is the key under which the record is stored.
    pub name: Option<String>,
    /// Columns without a special meaning, such as the basis status, by header.
    pub other: IndexMap<String, String>,
}

/// Everything read from a solver report.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,
    /// Values per column, by name, in report order.
    pub columns: IndexMap<String, Record>,
    /// Values per row, in report order.
    pub rows: Vec<Record>,
    /// NaN when the value could not be read.
    pub objective_value: f64,
}

impl Solution {
    /// Value of a column in the solution.
    pub fn primal(&self, column: &str) -> Option<f64> {
        self.columns.get(column).and_then(|record| record.primal)
    }

    /// Find a row by name.
    pub fn row(&self, name: &str) -> Option<&Record> {
        self.rows.iter().find(|record| record.name.as_deref() == Some(name))
    }
}
