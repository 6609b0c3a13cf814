//! # Running an external solver
//!
//! The solver itself is not part of this crate. It is reached through the `Engine` trait, which
//! takes a model as text and writes its solution as a human readable report. That report is then
//! read back with `io::report`.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

use log::debug;
use num_traits::Float;

use crate::data::linear_program::model::Model;
use crate::data::linear_program::solution::{Solution, Status};
use crate::engine::options::Options;
use crate::io::error::Parse;
use crate::io::{lp, report};

pub mod options;

/// Text formats in which a model can be handed to an engine.
///
/// Models built by this crate are always sent as LP text. MPS text is only sent when the caller
/// already has it, see `Session::solve_text`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ModelFormat {
    Mps,
    Lp,
}

/// A solver that runs in one blocking call.
pub trait Engine {
    /// Solve a model.
    ///
    /// # Arguments
    ///
    /// * `model`: Model text in the given `format`.
    /// * `options`: Settings to apply before solving.
    /// * `output`: Buffer for the solution report.
    ///
    /// # Return value
    ///
    /// The status code of the solver, or an error code if it could not run.
    fn run(
        &mut self,
        model: &str,
        format: ModelFormat,
        options: &Options,
        output: &mut String,
    ) -> Result<i32, i32>;
}

impl<E: Engine + ?Sized> Engine for &mut E {
    fn run(
        &mut self,
        model: &str,
        format: ModelFormat,
        options: &Options,
        output: &mut String,
    ) -> Result<i32, i32> {
        (**self).run(model, format, options, output)
    }
}

/// Reasons that solving failed.
#[derive(Debug)]
pub enum Solve {
    /// The engine did not run; contains its error code.
    Engine(i32),
    /// The engine ran, but its report could not be read.
    Report(Parse),
}

impl Display for Solve {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Solve::Engine(code) => write!(f, "Solver failed with error code {}", code),
            Solve::Report(error) => write!(f, "Could not read the solver report: {}", error),
        }
    }
}

impl Error for Solve {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Solve::Engine(_) => None,
            Solve::Report(error) => Some(error),
        }
    }
}

impl From<Parse> for Solve {
    fn from(error: Parse) -> Self {
        Solve::Report(error)
    }
}

/// An engine together with the buffer it writes its reports to.
///
/// The buffer is reused between runs, and emptied before and after each of them.
pub struct Session<E> {
    engine: E,
    output: String,
}

impl<E: Engine> Session<E> {
    #[allow(missing_docs)]
    pub fn new(engine: E) -> Self {
        Self { engine, output: String::new(), }
    }

    /// Solve a model, handing it to the engine in the LP format.
    pub fn solve<F: Float + Display>(
        &mut self,
        model: &Model<F>,
        options: &Options,
    ) -> Result<Solution, Solve> {
        debug!("Solving \"{}\" with {} options", model.name(), options.iter().count());
        self.solve_text(&lp::write(model), ModelFormat::Lp, options)
    }

    /// Solve a model that is already written out, such as the contents of an MPS file.
    pub fn solve_text(
        &mut self,
        model: &str,
        format: ModelFormat,
        options: &Options,
    ) -> Result<Solution, Solve> {
        self.output.clear();
        let result = self.engine.run(model, format, options, &mut self.output);
        let solution = match result {
            Ok(code) => {
                let status = Status::from_code(code);
                debug!("Solver finished with status \"{}\"", status);
                report::parse(&self.output, status).map_err(Solve::from)
            },
            Err(code) => Err(Solve::Engine(code)),
        };
        self.output.clear();

        solution
    }

    /// Give back the engine.
    pub fn into_inner(self) -> E {
        self.engine
    }
}

/// Solve a model once with the given engine.
pub fn solve<E: Engine, F: Float + Display>(
    engine: E,
    model: &Model<F>,
    options: &Options,
) -> Result<Solution, Solve> {
    Session::new(engine).solve(model, options)
}
