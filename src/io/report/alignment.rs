//! # Column alignment
//!
//! Solver reports are tables aligned with spaces rather than separated by a delimiter. Numbers
//! are aligned to the right of their header, text to the left. A column that has no value on a
//! line is padded with spaces entirely, and the values that follow it keep their position.
use itertools::Itertools;

/// A word on a header line, with the character columns it occupies.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Header {
    /// The header text.
    pub name: String,
    /// Character column of the first character, counting from zero.
    pub start: usize,
    /// Character column of the last character (inclusive).
    pub end: usize,
}

/// Split a line into its maximal runs of non-whitespace characters.
pub fn words(line: &str) -> Vec<Header> {
    let runs = line.chars().enumerate().chunk_by(|&(_, character)| character.is_whitespace());

    runs.into_iter()
        .filter(|&(is_blank, _)| !is_blank)
        .map(|(_, run)| {
            let run = run.collect::<Vec<_>>();
            Header {
                name: run.iter().map(|&(_, character)| character).collect(),
                start: run[0].0,
                end: run[run.len() - 1].0,
            }
        })
        .collect()
}

/// The headers of the columns that have a value on `data`.
///
/// A value is recognized by a character below the first or the last character of the header,
/// covering both left and right aligned columns.
pub fn headers_for_non_empty_columns(header: &str, data: &str) -> Vec<Header> {
    let data = data.chars().collect::<Vec<_>>();
    let is_filled = |column: usize| data.get(column).is_some_and(|character| !character.is_whitespace());

    words(header).into_iter()
        .filter(|header| is_filled(header.start) || is_filled(header.end))
        .collect()
}
