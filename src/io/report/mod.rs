//! # Reading solver reports
//!
//! After solving, the solver writes its solution as human readable text:
//!
//! ```text
//! Columns
//!     Index Status        Lower        Upper       Primal         Dual  Name
//!         0     BS            0          inf            4            0  XONE
//! Rows
//!     Index Status        Lower        Upper       Primal         Dual  Name
//!         0     BS         -inf            5            4            0  LIM1
//!
//! Model status: Optimal
//!
//! Objective value: 4
//! ```
//!
//! Which columns of the tables are filled differs between reports, and between the two tables of
//! one report. They are found from the alignment of the first data line below each header.
use std::fs::read_to_string;
use std::path::Path;

use indexmap::IndexMap;
use log::debug;

use crate::data::linear_program::solution::{Record, Solution, Status};
use crate::io::error::{ErrorKind, Import, Parse, ParseResult};
use crate::io::mps::number::parse::parse_report_value;
use crate::io::report::alignment::{Header, headers_for_non_empty_columns};

pub mod alignment;

/// Line that separates the column table from the row table.
pub const ROWS: &str = "Rows";
/// Text in front of the objective value.
pub const OBJECTIVE_VALUE: &str = "Objective value: ";

const INDEX: &str = "Index";
const LOWER: &str = "Lower";
const UPPER: &str = "Upper";
const PRIMAL: &str = "Primal";
const DUAL: &str = "Dual";
const NAME: &str = "Name";

/// Read a solver report from a file.
///
/// # Arguments
///
/// * `file_path`: Path to the saved report.
/// * `status`: How the solver terminated, which the report itself doesn't state reliably.
pub fn import(file_path: &Path, status: Status) -> Result<Solution, Import> {
    let text = read_to_string(file_path).map_err(Import::IO)?;
    parse(&text, status).map_err(Import::Parse)
}

/// Parse the text of a solver report.
///
/// # Errors
///
/// If the report doesn't have the expected layout. Values that can't be read as numbers are not
/// an error, they become NaN.
pub fn parse(text: &str, status: Status) -> ParseResult<Solution> {
    let lines = text.lines().collect::<Vec<_>>();
    if lines.len() < 3 {
        return Err(Parse::new(ErrorKind::TooFewLines));
    }

    // The first line is a title, the table starts below it.
    let rows_index = (2..lines.len())
        .find(|&index| lines[index] == ROWS)
        .ok_or_else(|| Parse::new(ErrorKind::TooFewLines))?;
    let headers = headers_for_non_empty_columns(lines[1], lines[2]);
    let mut columns = IndexMap::new();
    for index in 2..rows_index {
        let mut record = decode(&headers, lines[index], index + 1)?;
        let name = record.name.take()
            .ok_or_else(|| unparseable(lines[index], index + 1))?;
        columns.insert(name, record);
    }

    let header_index = rows_index + 1;
    let first_data_index = rows_index + 2;
    if first_data_index >= lines.len() {
        return Err(Parse::new(ErrorKind::TooFewLines));
    }
    let headers = headers_for_non_empty_columns(lines[header_index], lines[first_data_index]);
    let blank_index = (first_data_index..lines.len())
        .find(|&index| lines[index].trim().is_empty())
        .ok_or_else(|| Parse::new(ErrorKind::TooFewLines))?;
    let rows = (first_data_index..blank_index)
        .map(|index| decode(&headers, lines[index], index + 1))
        .collect::<Result<Vec<_>, _>>()?;

    let objective_index = blank_index + 3;
    let objective_line = lines.get(objective_index).copied()
        .ok_or_else(|| Parse::new(ErrorKind::TooFewLines))?;
    let objective_value = objective_line.find(OBJECTIVE_VALUE)
        .map(|start| parse_report_value(objective_line[start + OBJECTIVE_VALUE.len()..].trim()))
        .ok_or_else(|| Parse::with_location(
            ErrorKind::ObjectivePatternNotFound,
            (objective_index + 1, objective_line),
        ))?;

    debug!("Read a report with {} columns and {} rows", columns.len(), rows.len());
    Ok(Solution { status, columns, rows, objective_value, })
}

/// Match the values on a line to the headers, in order.
fn decode(headers: &[Header], line: &str, line_number: usize) -> ParseResult<Record> {
    let values = line.split_whitespace().collect::<Vec<_>>();
    if values.len() > headers.len() {
        return Err(unparseable(line, line_number));
    }

    let mut record = Record::default();
    for (header, value) in headers.iter().zip(values) {
        match header.name.as_str() {
            INDEX => record.index = value.parse().ok(),
            LOWER => record.lower = Some(parse_report_value(value)),
            UPPER => record.upper = Some(parse_report_value(value)),
            PRIMAL => record.primal = Some(parse_report_value(value)),
            DUAL => record.dual = Some(parse_report_value(value)),
            NAME => record.name = Some(value.to_string()),
            other => {
                record.other.insert(other.to_string(), value.to_string());
            },
        }
    }

    Ok(record)
}

fn unparseable(line: &str, line_number: usize) -> Parse {
    Parse::with_location(ErrorKind::UnparseableLine(line.to_string()), (line_number, line))
}
