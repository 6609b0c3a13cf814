//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
//!
//! The problem files and solver reports used are stored in `tests/problem_files`.
use std::path::{Path, PathBuf};

mod mps;
mod report;

/// Relative path of the folder where the problem files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().join("problem_files")
}

/// Compute the path of a problem file.
///
/// # Arguments
///
/// * `name`: File name without extension.
/// * `extension`: The extension, which decides how the file is read.
///
/// # Return value
///
/// File path relative to the project root folder.
fn get_test_file_path(name: &str, extension: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension(extension)
}
