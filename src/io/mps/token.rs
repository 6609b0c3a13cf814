//! # Tokens used in MPS files

/// Indicates the start of a comment, when found at the very start of a line.
pub const COMMENT_INDICATOR: &str = "*";

/// Should be on the start of the first line of the non comment lines.
pub const NAME: &str = "NAME";
#[allow(missing_docs)]
pub const ROWS: &str = "ROWS";
#[allow(missing_docs)]
pub const COLUMNS: &str = "COLUMNS";
#[allow(missing_docs)]
pub const RHS: &str = "RHS";
#[allow(missing_docs)]
pub const RANGES: &str = "RANGES";
#[allow(missing_docs)]
pub const BOUNDS: &str = "BOUNDS";
/// Last line of the file (notice the odd spelling).
pub const ENDATA: &str = "ENDATA";

/// Indicates a line denoting a change in variable type.
///
/// This change is either from continuous to integer, or vice versa.
///
/// # Note
///
/// This token is expected only in the COLUMN section, in the third field.
pub const COLUMN_SECTION_MARKER: &str = "'MARKER'";

/// Marks the start of the integer variables.
///
/// # Note
///
/// Expected only on a line with a `COLUMN_SECTION_MARKER`.
pub const START_OF_INTEGER: &str = "'INTORG'";

/// Indicates the end of the integer variables.
///
/// More data for continuous variables may follow.
///
/// # Note
///
/// Expected only on a line with a `COLUMN_SECTION_MARKER`.
pub const END_OF_INTEGER: &str = "'INTEND'";
