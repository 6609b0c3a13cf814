//! # Reading linear programs and solver reports
//!
//! Linear and mixed integer programs are read from files in the fixed MPS format into a `Model`.
//! A model can be written in the LP format and handed to an external solver, of which the human
//! readable solution report is read back into a `Solution`.
#![warn(missing_docs)]

pub mod data;
pub mod engine;
pub mod io;
