//! # Numbers
//!
//! Reading the decimal numbers found in MPS files and solver reports.
pub mod parse;
