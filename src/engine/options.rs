//! # Solver options
//!
//! Solvers take their options by name, each with a value of one of a few types.
use std::fmt;

use indexmap::IndexMap;

/// Value of a single solver option.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    /// Counts and limits, such as a number of threads.
    Integer(i64),
    /// Tolerances and time limits.
    Real(f64),
    /// Switches.
    Bool(bool),
    /// Choices between named strategies, file names.
    Text(String),
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Integer(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Real(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Integer(value) => value.fmt(f),
            OptionValue::Real(value) => value.fmt(f),
            OptionValue::Bool(value) => value.fmt(f),
            OptionValue::Text(value) => value.fmt(f),
        }
    }
}

/// Options for a solver, in the order in which they were set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    values: IndexMap<String, OptionValue>,
}

impl Options {
    /// No options; the solver uses its defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, replacing an earlier value for the same name.
    pub fn with(mut self, name: &str, value: impl Into<OptionValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Set an option, replacing an earlier value for the same name.
    pub fn set(&mut self, name: &str, value: impl Into<OptionValue>) {
        self.values.insert(name.to_string(), value.into());
    }

    #[allow(missing_docs)]
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    /// All options as (name, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
