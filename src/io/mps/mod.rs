//! # Importing MPS files
//!
//! Reading of `.mps` files, or files of the Mathematical Programming System format, in the fixed
//! column layout.
//!
//! The sections are expected in the order
//!
//! ```text
//! NAME, ROWS, COLUMNS, RHS, [RANGES], [BOUNDS], ENDATA
//! ```
//!
//! The OBJSENSE, OBJNAME and SOS sections are not supported; the direction of optimization is
//! given by the caller instead.
use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::model::Model;
use crate::io::error::{ErrorKind, ParseResult};
use crate::io::mps::number::parse::Parse;

pub mod number;
pub mod parse;
pub mod token;

/// Read a linear program in the fixed MPS format.
///
/// # Arguments
///
/// * `program`: The input in [MPS format](https://en.wikipedia.org/wiki/MPS_(format)).
/// * `direction`: Whether the objective row should be maximized or minimized.
///
/// # Errors
///
/// The first problem found in the file, with the line it was found on.
pub fn parse_fixed<F: Float + Parse>(program: &str, direction: Objective) -> ParseResult<Model<F>> {
    parse::parse(program, direction, &ParseOptions::default())
}

/// Read a linear program in the fixed MPS format, with non default options.
pub fn parse_fixed_with<F: Float + Parse>(
    program: &str,
    direction: Objective,
    options: &ParseOptions,
) -> ParseResult<Model<F>> {
    parse::parse(program, direction, options)
}

/// Settings for reading MPS files.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ParseOptions {
    /// What to do when the RHS or RANGES section gives a row a second value.
    pub duplicate_values: DuplicatePolicy,
    /// Whether a marker line with an empty fourth field may have its keyword in the fifth field
    /// instead, as some writers do.
    pub marker_in_fifth_field: bool,
}

impl ParseOptions {
    /// Fail on duplicate RHS and RANGES entries.
    pub fn strict() -> Self {
        Self { duplicate_values: DuplicatePolicy::Reject, ..Self::default() }
    }
}

/// Treatment of a second value for the same row within the RHS or RANGES section.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum DuplicatePolicy {
    /// The last value read is used.
    #[default]
    Overwrite,
    /// Reading fails.
    Reject,
}

/// MPS files are divided into sections.
///
/// # Note
///
/// The `Endata` variant (notice the odd spelling) denotes the end of the file.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Section {
    Name,
    Rows,
    Columns,
    Rhs,
    Ranges,
    Bounds,
    Endata,
}

impl Section {
    fn header(self) -> &'static str {
        match self {
            Section::Name => token::NAME,
            Section::Rows => token::ROWS,
            Section::Columns => token::COLUMNS,
            Section::Rhs => token::RHS,
            Section::Ranges => token::RANGES,
            Section::Bounds => token::BOUNDS,
            Section::Endata => token::ENDATA,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

impl FromStr for Section {
    type Err = ();

    /// Recognize a section header, which has to match exactly.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            token::NAME     => Ok(Section::Name),
            token::ROWS     => Ok(Section::Rows),
            token::COLUMNS  => Ok(Section::Columns),
            token::RHS      => Ok(Section::Rhs),
            token::RANGES   => Ok(Section::Ranges),
            token::BOUNDS   => Ok(Section::Bounds),
            token::ENDATA   => Ok(Section::Endata),
            _ => Err(()),
        }
    }
}

/// The MPS format defines the `BoundType`s described in this enum.
///
/// # Note
///
/// Semi-continuous (`SC`) bounds are recognized but not supported, so they have no variant.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum BoundType<F> {
    /// b <- x (< +inf)
    LowerContinuous(F),
    /// (0 <=) x <= b
    UpperContinuous(F),
    /// x = b
    Fixed(F),
    /// -inf < x < +inf
    Free,
    /// -inf < x (<= 0)
    LowerMinusInfinity,
    /// (0 <=) x < +inf
    UpperInfinity,
    /// x = 0 or 1
    Binary,
    /// b <= x ( +inf)
    LowerInteger(F),
    /// (0 <=) x <= b
    UpperInteger(F),
}

impl<F> BoundType<F> {
    /// Read the bound type code, and the value if this type of bound needs one.
    ///
    /// The value is read lazily, types without a value ignore the value field.
    pub(crate) fn try_from_fields(
        code: &str,
        value: impl FnOnce() -> ParseResult<F>,
    ) -> Result<Self, ErrorKind> {
        let bound_type = match code {
            "" => return Err(ErrorKind::MissingBoundType),
            "FR" => BoundType::Free,
            "MI" => BoundType::LowerMinusInfinity,
            "PL" => BoundType::UpperInfinity,
            "BV" => BoundType::Binary,
            "SC" => return Err(ErrorKind::SemiContinuousUnsupported),
            "LO" | "UP" | "FX" | "LI" | "UI" => {
                let value = value().map_err(|error| error.kind().clone())?;
                match code {
                    "LO" => BoundType::LowerContinuous(value),
                    "UP" => BoundType::UpperContinuous(value),
                    "FX" => BoundType::Fixed(value),
                    "LI" => BoundType::LowerInteger(value),
                    _ => BoundType::UpperInteger(value),
                }
            },
            _ => return Err(ErrorKind::UnknownBoundType(code.to_string())),
        };

        Ok(bound_type)
    }
}
