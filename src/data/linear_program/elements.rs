//! # Building blocks to describe linear programs.
use std::fmt;

use enum_map::Enum;

/// The type of a row, as declared in the ROWS section of an MPS file.
///
/// The bounds a row starts out with follow from its type, the RHS and RANGES sections can then
/// move them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Enum)]
pub enum RowType {
    /// `L`: the row is at most its right-hand side.
    Less,
    /// `G`: the row is at least its right-hand side.
    Greater,
    /// `E`: the row equals its right-hand side.
    Equal,
    /// `N`: no constraint; the first one of these is the objective function.
    Free,
}

impl RowType {
    /// The single letter code used in MPS files.
    pub fn code(self) -> &'static str {
        match self {
            RowType::Less => "L",
            RowType::Greater => "G",
            RowType::Equal => "E",
            RowType::Free => "N",
        }
    }
}

impl fmt::Display for RowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A variable is either continuous or integer.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum VariableType {
    Continuous,
    Integer,
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Objective {
    Maximize,
    #[default]
    Minimize,
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Objective::Maximize => "Maximize",
            Objective::Minimize => "Minimize",
        })
    }
}
