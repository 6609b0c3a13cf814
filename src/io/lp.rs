//! # Writing LP files
//!
//! The CPLEX LP format is the text format in which a model is handed to a solver. Unlike MPS, it
//! is written row by row:
//!
//! ```text
//! Minimize
//!  COST: 1 XONE + 4 YTWO
//! Subject To
//!  LIM1: 1 XONE + 1 YTWO <= 5
//! Bounds
//!  -1 <= YTWO <= 1
//! General
//!  YTWO
//! End
//! ```
use std::collections::HashSet;
use std::fmt;
use std::fmt::Display;

use itertools::Itertools;
use num_traits::Float;

use crate::data::linear_program::model::{default_bound, Model};

/// Name used for the objective function when the model has no objective row.
const DEFAULT_OBJECTIVE_NAME: &str = "obj";

/// Render a model in the LP format.
///
/// Free rows other than the objective row are left out, as are rows without any coefficient.
pub fn write<F: Float + Display>(model: &Model<F>) -> String {
    Lp(model).to_string()
}

struct Lp<'a, F>(&'a Model<F>);

impl<F: Float + Display> Display for Lp<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = self.0;

        writeln!(f, "{}", model.direction())?;
        write!(f, " {}:", model.objective().unwrap_or(DEFAULT_OBJECTIVE_NAME))?;
        let objective = model.objective_coefficients().collect::<Vec<_>>();
        if !objective.is_empty() {
            write!(f, " {}", Terms(&objective))?;
        }
        writeln!(f)?;

        writeln!(f, "Subject To")?;
        let rows = model.variables().iter()
            .flat_map(|(column, values)| {
                values.iter().map(move |(row, &value)| (row.as_str(), (column.as_str(), value)))
            })
            .into_group_map();
        let mut written = model.objective().into_iter().collect::<HashSet<_>>();
        for (row, &(lower, upper)) in model.constraints() {
            if Some(row.as_str()) == model.objective() {
                continue;
            }
            let terms = match rows.get(row.as_str()) {
                Some(terms) => Terms(terms),
                None => continue,
            };

            if lower.is_infinite() && upper.is_infinite() {
                continue;
            }
            written.insert(row.as_str());
            match (lower.is_infinite(), upper.is_infinite()) {
                (true, false) => writeln!(f, " {}: {} <= {}", row, terms, Number(upper))?,
                (false, true) => writeln!(f, " {}: {} >= {}", row, terms, Number(lower))?,
                (false, false) if lower == upper => {
                    writeln!(f, " {}: {} = {}", row, terms, Number(lower))?
                },
                _ => writeln!(f, " {}: {} <= {} <= {}", row, Number(lower), terms, Number(upper))?,
            }
        }

        let bounds = bounds_to_write(model, &written);
        if !bounds.is_empty() {
            writeln!(f, "Bounds")?;
            for (column, (lower, upper)) in bounds {
                if lower == F::neg_infinity() && upper == F::infinity() {
                    writeln!(f, " {} free", column)?;
                } else if lower == upper {
                    writeln!(f, " {} = {}", column, Number(lower))?;
                } else {
                    writeln!(f, " {} <= {} <= {}", Number(lower), column, Number(upper))?;
                }
            }
        }

        let general = model.integers().iter()
            .filter(|column| !model.is_binary(column))
            .collect::<Vec<_>>();
        if !general.is_empty() {
            writeln!(f, "General")?;
            writeln!(f, " {}", general.iter().join(" "))?;
        }
        if !model.binaries().is_empty() {
            writeln!(f, "Binary")?;
            writeln!(f, " {}", model.binaries().iter().join(" "))?;
        }

        writeln!(f, "End")
    }
}

/// Columns with a non default bound, and columns that would otherwise not appear at all.
fn bounds_to_write<'a, F: Float>(
    model: &'a Model<F>,
    written_rows: &HashSet<&str>,
) -> Vec<(&'a str, (F, F))> {
    model.variables().iter()
        .filter(|&(column, _)| !model.is_binary(column) || model.bounds().contains_key(column))
        .filter_map(|(column, values)| {
            let bound = model.bound(column)?;
            let is_mentioned = values.iter()
                .any(|(row, value)| written_rows.contains(row.as_str()) && !value.is_zero());
            if bound != default_bound() || !is_mentioned {
                Some((column.as_str(), bound))
            } else {
                None
            }
        })
        .collect()
}

/// A linear expression, such as `2 x - 1.5 y`.
struct Terms<'a, F>(&'a [(&'a str, F)]);

impl<F: Float + Display> Display for Terms<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, &(column, value)) in self.0.iter().enumerate() {
            match (index, value < F::zero()) {
                (0, false) => write!(f, "{} {}", Number(value), column)?,
                (0, true) => write!(f, "- {} {}", Number(-value), column)?,
                (_, false) => write!(f, " + {} {}", Number(value), column)?,
                (_, true) => write!(f, " - {} {}", Number(-value), column)?,
            }
        }

        Ok(())
    }
}

/// Numbers as the LP format expects them, with `inf` and `-inf` for the infinities.
struct Number<F>(F);

impl<F: Float + Display> Display for Number<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == F::infinity() {
            f.write_str("inf")
        } else if self.0 == F::neg_infinity() {
            f.write_str("-inf")
        } else {
            self.0.fmt(f)
        }
    }
}
