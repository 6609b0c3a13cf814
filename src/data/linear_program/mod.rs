//! # Representing linear programs
//!
//! A model as read from a file, the building blocks it is described with, and the solution a
//! solver reports for it.
pub mod elements;
pub mod model;
pub mod solution;
