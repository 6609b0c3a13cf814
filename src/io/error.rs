//! # Error reporting for reading of linear program files and solver reports
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::io;

/// An `Import` error is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug)]
pub enum Import {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    IO(io::Error),
    /// Contents of the file could not be parsed.
    Parse(Parse),
}

impl Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Import::FileExtension(message) => message.fmt(f),
            Import::IO(error) => error.fmt(f),
            Import::Parse(error) => error.fmt(f),
        }
    }
}

impl Error for Import {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Import::FileExtension(_) => None,
            Import::IO(error) => Some(error),
            Import::Parse(error) => Some(error),
        }
    }
}

impl From<Parse> for Import {
    fn from(error: Parse) -> Self {
        Import::Parse(error)
    }
}

/// Shorthand for results of the parsing stage.
pub type ParseResult<T> = Result<T, Parse>;

/// A `FileLocation` references a line in the file by the line number of the file as originally
/// read from the disk (counting from 1), and the contents of that line.
pub type FileLocation<'a> = (usize, &'a str);

/// What went wrong while parsing.
///
/// All of these are terminal: parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// No line starting with `NAME` was found.
    SectionNotFound,
    /// A section header was expected, but something else was found.
    SectionMismatch {
        /// Header(s) that would have been acceptable.
        expected: String,
        /// The header text found, `None` at the end of the file.
        found: Option<String>,
    },

    /// A row name field was empty.
    MissingRowName,
    /// A row was declared twice in the ROWS section.
    DuplicateRow(String),
    /// A row type field was empty.
    MissingRowType,
    /// A row type other than `N`, `L`, `G` or `E`.
    UnknownRowType(String),

    /// A column name field was empty.
    MissingColumnName,
    /// The lines of a column were interrupted by those of another column.
    NonConsecutiveColumn(String),
    /// A marker other than `'INTORG'` or `'INTEND'`.
    UnknownMarker(String),

    /// A row name was given without a coefficient.
    MissingCoefficient,
    /// A row was referenced that was not declared in the ROWS section.
    UndefinedRow(String),
    /// A column has two coefficients for the same row.
    DuplicateCoefficient {
        /// Column being read.
        column: String,
        /// Row that was seen before for this column.
        row: String,
    },
    /// A number could not be read; contains the raw text.
    NumberParseError(String),

    /// A row name in the RHS section was given without a value.
    MissingRHSValue,
    /// A row name in the RANGES section was given without a value.
    MissingRangeValue,
    /// A second right-hand side value for a row while rejecting duplicates.
    DuplicateRHSValue(String),
    /// A second range value for a row while rejecting duplicates.
    DuplicateRangeValue(String),

    /// A bound type that requires a value has none.
    MissingBoundValue,
    /// A bound type field was empty.
    MissingBoundType,
    /// A bound type that the format doesn't define.
    UnknownBoundType(String),
    /// A bound refers to a column that was not in the COLUMNS section.
    UndefinedColumn(String),
    /// Semi-continuous (`SC`) bounds are not supported.
    SemiContinuousUnsupported,

    /// A solver report needs at least a title, a header and a data line.
    TooFewLines,
    /// A report line had more values than the header has columns.
    UnparseableLine(String),
    /// The `Objective value: ...` line was not where it should be.
    ObjectivePatternNotFound,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::SectionNotFound => write!(f, "No \"NAME\" section found"),
            ErrorKind::SectionMismatch { expected, found } => match found {
                Some(found) => write!(f, "Expected section \"{}\", found \"{}\"", expected, found),
                None => write!(f, "Expected section \"{}\", found end of file", expected),
            },
            ErrorKind::MissingRowName => write!(f, "Missing row name"),
            ErrorKind::DuplicateRow(name) => write!(f, "Duplicate row \"{}\"", name),
            ErrorKind::MissingRowType => write!(f, "Missing row type"),
            ErrorKind::UnknownRowType(text) => write!(f, "Unknown row type \"{}\"", text),
            ErrorKind::MissingColumnName => write!(f, "Missing column name"),
            ErrorKind::NonConsecutiveColumn(name) => {
                write!(f, "Lines for column \"{}\" are not consecutive", name)
            },
            ErrorKind::UnknownMarker(text) => write!(f, "Unknown marker \"{}\"", text),
            ErrorKind::MissingCoefficient => write!(f, "Missing coefficient"),
            ErrorKind::UndefinedRow(name) => write!(f, "Row \"{}\" not defined", name),
            ErrorKind::DuplicateCoefficient { column, row } => write!(
                f, "Duplicate coefficient for column \"{}\" on row \"{}\"", column, row,
            ),
            ErrorKind::NumberParseError(text) => write!(f, "Could not parse number \"{}\"", text),
            ErrorKind::MissingRHSValue => write!(f, "Missing RHS value"),
            ErrorKind::MissingRangeValue => write!(f, "Missing range value"),
            ErrorKind::DuplicateRHSValue(name) => {
                write!(f, "Second RHS value for row \"{}\"", name)
            },
            ErrorKind::DuplicateRangeValue(name) => {
                write!(f, "Second range value for row \"{}\"", name)
            },
            ErrorKind::MissingBoundValue => write!(f, "Missing bound value"),
            ErrorKind::MissingBoundType => write!(f, "Missing bound type"),
            ErrorKind::UnknownBoundType(text) => write!(f, "Unknown bound type \"{}\"", text),
            ErrorKind::UndefinedColumn(name) => write!(f, "Column \"{}\" not defined", name),
            ErrorKind::SemiContinuousUnsupported => {
                write!(f, "Semi-continuous bounds are not supported")
            },
            ErrorKind::TooFewLines => write!(f, "Unable to parse solution, too few lines"),
            ErrorKind::UnparseableLine(line) => {
                write!(f, "Unable to parse solution line \"{}\"", line)
            },
            ErrorKind::ObjectivePatternNotFound => {
                write!(f, "Unable to find the objective value")
            },
        }
    }
}

/// A `Parse` error represents all errors encountered during parsing.
///
/// At the end there may be a file location containing a line number and line, at which the error
/// was caused.
#[derive(Debug, Clone, PartialEq)]
pub struct Parse {
    kind: ErrorKind,
    location: Option<(usize, String)>,
}

impl Parse {
    /// Create a new `Parse` error without a location.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, location: None, }
    }

    /// Create a new `Parse` error instance with a `FileLocation` as a cause.
    ///
    /// # Arguments
    ///
    /// * `kind`: What's wrong at the moment of creation.
    /// * `file_location`: A reference to a line number and line that caused the error.
    pub fn with_location(kind: ErrorKind, file_location: FileLocation) -> Self {
        let (line_number, line) = file_location;
        Self {
            kind,
            location: Some((line_number, line.to_string())),
        }
    }

    /// What went wrong.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Line number (counting from 1) at which the error was detected, if known.
    pub fn line_number(&self) -> Option<usize> {
        self.location.as_ref().map(|&(number, _)| number)
    }

    /// Contents of the line at which the error was detected, if known.
    pub fn line(&self) -> Option<&str> {
        self.location.as_ref().map(|(_, line)| line.as_str())
    }
}

impl Display for Parse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.location {
            Some((number, _)) => write!(f, "Line {}: {}", number, self.kind),
            None => self.kind.fmt(f),
        }
    }
}

impl Error for Parse {}
