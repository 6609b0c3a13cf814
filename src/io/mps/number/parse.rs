//! # Number parsing
//!
//! Reading numbers from strings.
use std::str::FromStr;

use num_traits::Float;

use crate::io::error::{ErrorKind, Parse as ParseError, ParseResult};

/// Token used by solver reports for positive infinity.
pub const INFINITY: &str = "inf";
/// Token used by solver reports for negative infinity.
pub const NEGATIVE_INFINITY: &str = "-inf";

/// Parsing a number read from an MPS file.
pub trait Parse: Sized {
    /// Read a string representation of a decimal (abc.xyz or scientific) number.
    ///
    /// # Errors
    ///
    /// When the number could not be parsed, or isn't a number at all.
    fn parse(text: &str) -> ParseResult<Self>;
}

impl<F: Float + FromStr> Parse for F {
    fn parse(text: &str) -> ParseResult<Self> {
        match text.parse::<F>() {
            Ok(value) if !value.is_nan() => Ok(value),
            _ => Err(ParseError::new(ErrorKind::NumberParseError(text.to_string()))),
        }
    }
}

/// Read a value from a solver report cell.
///
/// The report writes infinite bounds as `inf` and `-inf`. Values that can't be read become NaN
/// rather than an error, so that the rest of the report can still be used.
pub fn parse_report_value<F: Float + FromStr>(text: &str) -> F {
    match text {
        INFINITY => F::infinity(),
        NEGATIVE_INFINITY => F::neg_infinity(),
        _ => text.parse().unwrap_or_else(|_| F::nan()),
    }
}
