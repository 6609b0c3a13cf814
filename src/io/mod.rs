//! # Reading and writing of linear programs
//!
//! This module provides read functionality for MPS files and solver reports, and writes models in
//! the LP format.
use std::fs::read_to_string;
use std::path::Path;

use log::debug;
use num_traits::Float;

use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::model::Model;
use crate::io::error::Import;
use crate::io::mps::number::parse::Parse;

pub mod error;
pub mod lp;
pub mod mps;
pub mod report;

/// Import a problem from a file.
///
/// Currently only supports the MPS filetype.
///
/// # Arguments
///
/// * `file_path`: Location of the file, its extension determines the format.
/// * `direction`: Whether the objective row should be maximized or minimized.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, there is an inconsistency in
/// the problem file, etc. an error type is returned.
pub fn import<F: Float + Parse>(
    file_path: &Path,
    direction: Objective,
) -> Result<Model<F>, Import> {
    // Choose the right parser before reading anything
    match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("mps" | "MPS" | "SIF") => {
                let program = read_to_string(file_path).map_err(Import::IO)?;
                debug!("Read {} bytes from {:?}", program.len(), file_path);
                mps::parse_fixed(&program, direction).map_err(Import::Parse)
            },
            Some(extension_string) => Err(Import::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path
            ))),
            None => Err(Import::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension
            ))),
        },
        None => Err(Import::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path
        ))),
    }
}
