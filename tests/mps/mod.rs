//! # Reading MPS files from disk
use mpsio::data::linear_program::elements::Objective;
use mpsio::data::linear_program::model::Model;
use mpsio::io::import;

use super::get_test_file_path;

#[allow(missing_docs)]
mod test;

fn read(name: &str, direction: Objective) -> Model<f64> {
    import(&get_test_file_path(name, "mps"), direction).unwrap()
}
