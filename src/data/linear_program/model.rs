//! # Optimization models
//!
//! A `Model` is what an MPS file describes: named rows with a bound pair each, named columns with
//! a coefficient per row, and bounds and integrality information on the columns. It is assembled
//! line by line with a `Builder` and never changes afterwards.
use enum_map::EnumMap;
use indexmap::{IndexMap, IndexSet};
use log::trace;
use num_traits::Float;

use crate::data::linear_program::elements::{Objective, RowType, VariableType};

/// A (lower, upper) pair.
pub type BoundPair<F> = (F, F);

/// A linear or mixed integer program, as read from a file.
///
/// All maps keep the order in which their keys appeared in the file.
#[derive(Debug, Clone, PartialEq)]
pub struct Model<F> {
    name: String,
    direction: Objective,
    /// Name of the first `N` row.
    objective: Option<String>,
    constraints: IndexMap<String, BoundPair<F>>,
    variables: IndexMap<String, IndexMap<String, F>>,
    integers: IndexSet<String>,
    binaries: IndexSet<String>,
    /// Only the columns that were given a bound explicitly.
    bounds: IndexMap<String, BoundPair<F>>,
    row_type_counts: EnumMap<RowType, usize>,
}

impl<F: Float> Model<F> {
    /// Name from the NAME section.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direction of optimization, as given by the caller of the parser.
    pub fn direction(&self) -> Objective {
        self.direction
    }

    /// Name of the row holding the objective function, if any `N` row was declared.
    pub fn objective(&self) -> Option<&str> {
        self.objective.as_deref()
    }

    /// All rows, including free rows and the objective row, with their (lower, upper) bounds.
    pub fn constraints(&self) -> &IndexMap<String, BoundPair<F>> {
        &self.constraints
    }

    /// Bounds of a single row.
    pub fn constraint(&self, row: &str) -> Option<BoundPair<F>> {
        self.constraints.get(row).copied()
    }

    /// Coefficients per row, for each column.
    pub fn variables(&self) -> &IndexMap<String, IndexMap<String, F>> {
        &self.variables
    }

    /// Coefficients of a single column.
    pub fn variable(&self, column: &str) -> Option<&IndexMap<String, F>> {
        self.variables.get(column)
    }

    /// Columns that may only take integer values.
    pub fn integers(&self) -> &IndexSet<String> {
        &self.integers
    }

    /// Columns declared binary with a `BV` bound.
    ///
    /// These have no explicit bound pair; the user of the model should treat them as integer
    /// columns between 0 and 1.
    pub fn binaries(&self) -> &IndexSet<String> {
        &self.binaries
    }

    /// Bounds that were explicitly set in the BOUNDS section.
    pub fn bounds(&self) -> &IndexMap<String, BoundPair<F>> {
        &self.bounds
    }

    /// Bounds of a column, `(0, inf)` if none were given.
    ///
    /// Returns `None` for unknown columns.
    pub fn bound(&self, column: &str) -> Option<BoundPair<F>> {
        if self.variables.contains_key(column) {
            Some(self.bounds.get(column).copied().unwrap_or_else(default_bound))
        } else {
            None
        }
    }

    #[allow(missing_docs)]
    pub fn is_integer(&self, column: &str) -> bool {
        self.integers.contains(column)
    }

    #[allow(missing_docs)]
    pub fn is_binary(&self, column: &str) -> bool {
        self.binaries.contains(column)
    }

    /// Coefficients of the columns in the objective function, in column order.
    pub fn objective_coefficients(&self) -> impl Iterator<Item = (&str, F)> {
        let objective = self.objective.as_deref();
        self.variables.iter().filter_map(move |(column, values)| {
            objective
                .and_then(|row| values.get(row))
                .map(|&value| (column.as_str(), value))
        })
    }

    /// How many rows of each type were declared.
    pub fn row_type_counts(&self) -> &EnumMap<RowType, usize> {
        &self.row_type_counts
    }
}

/// Bounds of a column that is not mentioned in the BOUNDS section.
pub fn default_bound<F: Float>() -> BoundPair<F> {
    (F::zero(), F::infinity())
}

/// Accumulates a `Model` while a file is being read.
#[derive(Debug)]
pub(crate) struct Builder<F> {
    model: Model<F>,
}

impl<F: Float> Builder<F> {
    pub(crate) fn new(direction: Objective) -> Self {
        Self {
            model: Model {
                name: String::new(),
                direction,
                objective: None,
                constraints: IndexMap::new(),
                variables: IndexMap::new(),
                integers: IndexSet::new(),
                binaries: IndexSet::new(),
                bounds: IndexMap::new(),
                row_type_counts: EnumMap::default(),
            },
        }
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.model.name = name.to_string();
    }

    pub(crate) fn has_objective(&self) -> bool {
        self.model.objective.is_some()
    }

    pub(crate) fn set_objective(&mut self, row: &str) {
        self.model.objective = Some(row.to_string());
    }

    /// Declare a row with the bounds that belong to its type.
    pub(crate) fn add_row(&mut self, name: &str, row_type: RowType) {
        let bounds = match row_type {
            RowType::Less => (F::neg_infinity(), F::zero()),
            RowType::Greater => (F::zero(), F::infinity()),
            RowType::Equal => (F::zero(), F::zero()),
            RowType::Free => (F::neg_infinity(), F::infinity()),
        };
        self.model.constraints.insert(name.to_string(), bounds);
        self.model.row_type_counts[row_type] += 1;
    }

    pub(crate) fn constraint_mut(&mut self, row: &str) -> Option<&mut BoundPair<F>> {
        self.model.constraints.get_mut(row)
    }

    pub(crate) fn has_variable(&self, column: &str) -> bool {
        self.model.variables.contains_key(column)
    }

    /// Store the coefficients of a column once all of its lines have been read.
    pub(crate) fn add_variable(
        &mut self,
        column: String,
        values: IndexMap<String, F>,
        variable_type: VariableType,
    ) {
        trace!("Column \"{}\" with {} coefficients ({:?})", column, values.len(), variable_type);
        if variable_type == VariableType::Integer {
            self.model.integers.insert(column.clone());
        }
        self.model.variables.insert(column, values);
    }

    /// Bounds of a column, set to the default on first use.
    pub(crate) fn bound_mut(&mut self, column: &str) -> &mut BoundPair<F> {
        self.model.bounds.entry(column.to_string()).or_insert_with(default_bound)
    }

    pub(crate) fn mark_integer(&mut self, column: &str) {
        self.model.integers.insert(column.to_string());
    }

    pub(crate) fn mark_binary(&mut self, column: &str) {
        self.model.binaries.insert(column.to_string());
    }

    pub(crate) fn finish(self) -> Model<F> {
        self.model
    }
}
