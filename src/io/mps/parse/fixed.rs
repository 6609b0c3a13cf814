//! # Fixed columns
//!
//! In the fixed MPS format, the meaning of text on a line follows from the character column it is
//! in. A line holds up to six fields:
//!
//! ```text
//! Field:    1           2          3         4         5         6
//! Columns:  2-3        4-11      14-21     24-35     39-46     49-60
//! ```
//!
//! Text outside of the fields is ignored.
use std::ops::Range;

/// Character ranges for the different fields of a line, counting from zero.
const FIELDS: [Range<usize>; 6] = [
    1..3,
    3..11,
    13..21,
    23..35,
    38..46,
    48..60,
];

/// Read all six fields from a line.
///
/// Fields are trimmed; an empty string means that the field is absent. Lines that end before a
/// field starts give an empty field.
pub fn fields(line: &str) -> [&str; 6] {
    let mut result = [""; 6];
    for (value, range) in result.iter_mut().zip(FIELDS) {
        *value = window(line, range);
    }
    result
}

/// Read a single field, counting from one as is customary for this format.
pub fn field(line: &str, number: usize) -> &str {
    debug_assert!((1..=FIELDS.len()).contains(&number));

    window(line, FIELDS[number - 1].clone())
}

fn window(line: &str, characters: Range<usize>) -> &str {
    let start = byte_offset(line, characters.start);
    let end = byte_offset(line, characters.end);
    line[start..end].trim()
}

/// Byte index of a character column, or the end of the line if it's shorter.
fn byte_offset(line: &str, column: usize) -> usize {
    if line.is_ascii() {
        column.min(line.len())
    } else {
        line.char_indices().nth(column).map_or(line.len(), |(index, _)| index)
    }
}
