//! # Parsing MPS files
//!
//! The file is read section by section, in a single pass. Every section reader mutates the model
//! being built and leaves the cursor at the header of the section that follows it. Reading stops
//! at the first problem found.
use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use log::{debug, warn};
use num_traits::Float;

use crate::data::linear_program::elements::{Objective, RowType, VariableType};
use crate::data::linear_program::model::{Builder, Model};
use crate::io::error::{ErrorKind, ParseResult};
use crate::io::mps::{BoundType, DuplicatePolicy, ParseOptions, Section};
use crate::io::mps::number::parse::Parse;
use crate::io::mps::parse::cursor::Cursor;
use crate::io::mps::parse::fixed::{field, fields};
use crate::io::mps::token::{COLUMN_SECTION_MARKER, END_OF_INTEGER, START_OF_INTEGER};

pub(crate) mod cursor;
pub mod fixed;

/// Parse an MPS file in the fixed format.
///
/// # Arguments
///
/// * `program`: String holding the entire program.
/// * `direction`: Direction of optimization, as the file doesn't specify it.
/// * `options`: How strict to be.
///
/// # Errors
///
/// The first syntax error or inconsistency, e.g. a row that is mentioned without being declared
/// in advance, located at the line where it was found.
pub(crate) fn parse<F: Float + Parse>(
    program: &str,
    direction: Objective,
    options: &ParseOptions,
) -> ParseResult<Model<F>> {
    let mut state = State::new(program, *options);
    let mut builder = Builder::new(direction);

    read_name(&mut state, &mut builder)?;
    read_rows(&mut state, &mut builder)?;
    read_columns(&mut state, &mut builder)?;

    // All sections after this one are optional, so the next section is read by the previous method.
    let mut next_section = read_values(&mut state, &mut builder, ValueSection::Rhs)?;
    if next_section == Section::Ranges {
        next_section = read_values(&mut state, &mut builder, ValueSection::Ranges)?;
    }
    if next_section == Section::Bounds {
        read_bounds(&mut state, &mut builder)?;
    }

    let model = builder.finish();
    debug!(
        "Read \"{}\": {} rows, {} columns, {} bounds",
        model.name(), model.constraints().len(), model.variables().len(), model.bounds().len(),
    );
    Ok(model)
}

/// Everything that is needed while parsing, but not part of the resulting model.
struct State<'a> {
    cursor: Cursor<'a>,
    /// Type of each row declared in the ROWS section.
    constraint_types: HashMap<&'a str, RowType>,
    options: ParseOptions,
}

impl<'a> State<'a> {
    fn new(program: &'a str, options: ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(program),
            constraint_types: HashMap::new(),
            options,
        }
    }

    fn row_type(&self, row: &str) -> ParseResult<RowType> {
        self.constraint_types.get(row)
            .copied()
            .ok_or_else(|| self.cursor.error(ErrorKind::UndefinedRow(row.to_string())))
    }

    fn number<F: Parse>(&self, text: &str) -> ParseResult<F> {
        F::parse(text).map_err(|error| self.cursor.error(error.kind().clone()))
    }
}

fn read_name<F: Float>(state: &mut State, builder: &mut Builder<F>) -> ParseResult<()> {
    let line = state.cursor.find_name()?;
    builder.set_name(field(line, 3));
    state.cursor.next_data_line();

    Ok(())
}

fn read_rows<'a, F: Float>(state: &mut State<'a>, builder: &mut Builder<F>) -> ParseResult<()> {
    state.cursor.expect(Section::Rows)?;
    debug!("Reading {} at line {}", Section::Rows, state.cursor.line_number());

    while let Some(line) = state.cursor.next_in_section() {
        let [row_type, name, ..] = fields(line);
        if name.is_empty() {
            return Err(state.cursor.error(ErrorKind::MissingRowName));
        }
        if state.constraint_types.contains_key(name) {
            return Err(state.cursor.error(ErrorKind::DuplicateRow(name.to_string())));
        }

        let row_type = match row_type {
            "N" => RowType::Free,
            "L" => RowType::Less,
            "G" => RowType::Greater,
            "E" => RowType::Equal,
            "" => return Err(state.cursor.error(ErrorKind::MissingRowType)),
            other => return Err(state.cursor.error(ErrorKind::UnknownRowType(other.to_string()))),
        };
        // Only the first free row is the cost row, later ones are just not constraining.
        if row_type == RowType::Free && !builder.has_objective() {
            builder.set_objective(name);
        }

        builder.add_row(name, row_type);
        state.constraint_types.insert(name, row_type);
    }

    Ok(())
}

/// The column whose lines are being read.
struct OpenColumn<F> {
    name: String,
    values: IndexMap<String, F>,
}

fn read_columns<F: Float + Parse>(state: &mut State, builder: &mut Builder<F>) -> ParseResult<()> {
    state.cursor.expect(Section::Columns)?;
    debug!("Reading {} at line {}", Section::Columns, state.cursor.line_number());

    // We switch back and forth with the variable type as the relevant marker is encountered.
    let mut active_variable_type = VariableType::Continuous;
    // If this value is a `Some`, its values still need to be saved in the builder.
    let mut open_column: Option<OpenColumn<F>> = None;

    while let Some(line) = state.cursor.next_in_section() {
        let [_, column_name, three, four, five, six] = fields(line);

        if three == COLUMN_SECTION_MARKER {
            // When the variable type changes, a new column comes. Save before changing the
            // variable type.
            save_column(&mut open_column, builder, active_variable_type);

            let marker = match (four, state.options.marker_in_fifth_field) {
                ("", true) => five,
                _ => four,
            };
            active_variable_type = match marker {
                START_OF_INTEGER => VariableType::Integer,
                END_OF_INTEGER => VariableType::Continuous,
                _ => return Err(state.cursor.error(ErrorKind::UnknownMarker(marker.to_string()))),
            };
            continue;
        }

        if column_name.is_empty() {
            return Err(state.cursor.error(ErrorKind::MissingColumnName));
        }
        if open_column.as_ref().is_none_or(|column| column.name != column_name) {
            save_column(&mut open_column, builder, active_variable_type);
            if builder.has_variable(column_name) {
                return Err(state.cursor.error(ErrorKind::NonConsecutiveColumn(column_name.to_string())));
            }
            open_column = Some(OpenColumn { name: column_name.to_string(), values: IndexMap::new() });
        }

        if let Some(column) = open_column.as_mut() {
            add_coefficient(state, column, three, four)?;
            if !five.is_empty() || !six.is_empty() {
                add_coefficient(state, column, five, six)?;
            }
        }
    }

    // Save the values read of the last column before quiting.
    save_column(&mut open_column, builder, active_variable_type);

    Ok(())
}

fn add_coefficient<F: Float + Parse>(
    state: &State,
    column: &mut OpenColumn<F>,
    row_name: &str,
    value_text: &str,
) -> ParseResult<()> {
    if row_name.is_empty() {
        return Err(state.cursor.error(ErrorKind::MissingRowName));
    }
    if value_text.is_empty() {
        return Err(state.cursor.error(ErrorKind::MissingCoefficient));
    }
    state.row_type(row_name)?;
    if column.values.contains_key(row_name) {
        return Err(state.cursor.error(ErrorKind::DuplicateCoefficient {
            column: column.name.clone(),
            row: row_name.to_string(),
        }));
    }

    let value = state.number(value_text)?;
    column.values.insert(row_name.to_string(), value);

    Ok(())
}

/// When a marker or a new column name is encountered, the (row name, value) pairs collected for
/// the open column are saved in the builder.
fn save_column<F: Float>(
    open_column: &mut Option<OpenColumn<F>>,
    builder: &mut Builder<F>,
    active_variable_type: VariableType,
) {
    if let Some(OpenColumn { name, values }) = open_column.take() {
        builder.add_variable(name, values, active_variable_type);
    }
}

/// The RHS and RANGES sections have the same layout: up to two (row, value) pairs per line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum ValueSection {
    Rhs,
    Ranges,
}

impl ValueSection {
    fn section(self) -> Section {
        match self {
            ValueSection::Rhs => Section::Rhs,
            ValueSection::Ranges => Section::Ranges,
        }
    }

    fn missing_value(self) -> ErrorKind {
        match self {
            ValueSection::Rhs => ErrorKind::MissingRHSValue,
            ValueSection::Ranges => ErrorKind::MissingRangeValue,
        }
    }

    fn duplicate_value(self, row: &str) -> ErrorKind {
        match self {
            ValueSection::Rhs => ErrorKind::DuplicateRHSValue(row.to_string()),
            ValueSection::Ranges => ErrorKind::DuplicateRangeValue(row.to_string()),
        }
    }

    /// Sections that may follow this one.
    fn next_sections(self) -> &'static [Section] {
        match self {
            ValueSection::Rhs => &[Section::Ranges, Section::Bounds, Section::Endata],
            ValueSection::Ranges => &[Section::Bounds, Section::Endata],
        }
    }
}

/// Read the RHS or RANGES section.
///
/// # Return value
///
/// The section that follows.
fn read_values<F: Float + Parse>(
    state: &mut State,
    builder: &mut Builder<F>,
    kind: ValueSection,
) -> ParseResult<Section> {
    state.cursor.expect(kind.section())?;
    debug!("Reading {} at line {}", kind.section(), state.cursor.line_number());

    let mut seen = HashSet::new();
    while let Some(line) = state.cursor.next_in_section() {
        let [_, _, three, four, five, six] = fields(line);
        set_value(state, builder, kind, &mut seen, three, four)?;
        if !five.is_empty() || !six.is_empty() {
            set_value(state, builder, kind, &mut seen, five, six)?;
        }
    }

    state.cursor.expect_one_of(kind.next_sections())
}

fn set_value<F: Float + Parse>(
    state: &State,
    builder: &mut Builder<F>,
    kind: ValueSection,
    seen: &mut HashSet<String>,
    row_name: &str,
    value_text: &str,
) -> ParseResult<()> {
    if row_name.is_empty() {
        return Err(state.cursor.error(ErrorKind::MissingRowName));
    }
    if value_text.is_empty() {
        return Err(state.cursor.error(kind.missing_value()));
    }
    let row_type = state.row_type(row_name)?;
    let value: F = state.number(value_text)?;

    if !seen.insert(row_name.to_string()) {
        match state.options.duplicate_values {
            DuplicatePolicy::Reject => return Err(state.cursor.error(kind.duplicate_value(row_name))),
            DuplicatePolicy::Overwrite => warn!(
                "Line {}: second {} value for row \"{}\" replaces the first",
                state.cursor.line_number(), kind.section(), row_name,
            ),
        }
    }

    let bounds = builder.constraint_mut(row_name)
        .ok_or_else(|| state.cursor.error(ErrorKind::UndefinedRow(row_name.to_string())))?;
    match kind {
        ValueSection::Rhs => apply_rhs(bounds, row_type, value),
        ValueSection::Ranges => apply_range(bounds, row_type, value),
    }

    Ok(())
}

/// A right-hand side moves the side(s) of the row that its type constrains.
fn apply_rhs<F: Float>(bounds: &mut (F, F), row_type: RowType, value: F) {
    if matches!(row_type, RowType::Less | RowType::Equal) {
        bounds.1 = value;
    }
    if matches!(row_type, RowType::Greater | RowType::Equal) {
        bounds.0 = value;
    }
}

/// A range opens up the side of the row that its type doesn't constrain.
///
/// For equality rows, the sign of the value decides the direction. A zero range on an equality
/// row changes nothing.
fn apply_range<F: Float>(bounds: &mut (F, F), row_type: RowType, value: F) {
    let range = value.abs();
    let (lower, upper) = *bounds;

    if row_type == RowType::Less || (row_type == RowType::Equal && value < F::zero()) {
        bounds.0 = upper - range;
    }
    if row_type == RowType::Greater || (row_type == RowType::Equal && value > F::zero()) {
        bounds.1 = lower + range;
    }
}

fn read_bounds<F: Float + Parse>(state: &mut State, builder: &mut Builder<F>) -> ParseResult<()> {
    debug!("Reading {} at line {}", Section::Bounds, state.cursor.line_number());

    while let Some(line) = state.cursor.next_in_section() {
        let [bound_type_text, _, column_name, value_text, ..] = fields(line);
        if column_name.is_empty() {
            return Err(state.cursor.error(ErrorKind::MissingColumnName));
        }
        if !builder.has_variable(column_name) {
            return Err(state.cursor.error(ErrorKind::UndefinedColumn(column_name.to_string())));
        }

        let bound_type: BoundType<F> = BoundType::try_from_fields(bound_type_text, || {
            if value_text.is_empty() {
                Err(state.cursor.error(ErrorKind::MissingBoundValue))
            } else {
                state.number(value_text)
            }
        }).map_err(|kind| state.cursor.error(kind))?;

        apply_bound(builder, column_name, bound_type);
    }

    state.cursor.expect(Section::Endata)
}

fn apply_bound<F: Float>(builder: &mut Builder<F>, column: &str, bound_type: BoundType<F>) {
    match bound_type {
        BoundType::LowerContinuous(value) => builder.bound_mut(column).0 = value,
        // The lower bound is left as it is, even when the upper bound is negative.
        BoundType::UpperContinuous(value) => builder.bound_mut(column).1 = value,
        BoundType::Fixed(value) => *builder.bound_mut(column) = (value, value),
        BoundType::Free => *builder.bound_mut(column) = (F::neg_infinity(), F::infinity()),
        BoundType::LowerMinusInfinity => *builder.bound_mut(column) = (F::neg_infinity(), F::zero()),
        BoundType::UpperInfinity => *builder.bound_mut(column) = (F::zero(), F::infinity()),
        BoundType::Binary => builder.mark_binary(column),
        BoundType::LowerInteger(value) => {
            builder.bound_mut(column).0 = value;
            builder.mark_integer(column);
        },
        BoundType::UpperInteger(value) => {
            builder.bound_mut(column).1 = value;
            builder.mark_integer(column);
        },
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::Objective;
    use crate::data::linear_program::model::Model;
    use crate::io::error::{ErrorKind, Parse as ParseError};
    use crate::io::mps::{parse_fixed, parse_fixed_with, ParseOptions};

    const HEADER: &str = "\
NAME         TEST
ROWS
 N  COST
 L  LIM1
 G  LIM2
 E  MYEQN
COLUMNS
   X         COST                 1   LIM1                 1
   X         LIM2                 1   MYEQN                1
";

    fn read(rest: &str) -> Result<Model<f64>, ParseError> {
        parse_fixed(&format!("{}{}", HEADER, rest), Objective::Minimize)
    }

    fn read_error(program: &str) -> (ErrorKind, Option<usize>) {
        let error = parse_fixed::<f64>(program, Objective::Minimize).unwrap_err();
        (error.kind().clone(), error.line_number())
    }

    #[test]
    fn upper_bound_keeps_lower_bound() {
        let model = read("\
RHS
BOUNDS
 UP BND      X                 -5.0
ENDATA").unwrap();
        assert_eq!(model.bound("X"), Some((0_f64, -5_f64)));
    }

    #[test]
    fn tokens_at_window_start() {
        let program = "\
NAME         EDGE
ROWS
 N COST
 L LIM1
COLUMNS
   X         COST               1
   X         LIM1               1
RHS
   RHS       LIM1               4
BOUNDS
 UPBND       X         -5.0
ENDATA";
        let model = parse_fixed::<f64>(program, Objective::Minimize).unwrap();
        assert_eq!(model.name(), "EDGE");
        assert_eq!(model.objective(), Some("COST"));
        assert_eq!(model.constraint("LIM1"), Some((f64::NEG_INFINITY, 4_f64)));
        assert_eq!(model.variable("X").unwrap().get("COST"), Some(&1_f64));
        assert_eq!(model.bound("X"), Some((0_f64, -5_f64)));
    }

    #[test]
    fn marker_in_fifth_field() {
        let program = "\
NAME         M5
ROWS
 N  COST
COLUMNS
   MARKER    'MARKER'                 'INTORG'
   X         COST                 1
   MARKER    'MARKER'                 'INTEND'
   Y         COST                 1
RHS
ENDATA";
        assert_eq!(read_error(program), (ErrorKind::UnknownMarker(String::new()), Some(5)));

        let options = ParseOptions { marker_in_fifth_field: true, ..ParseOptions::default() };
        let model = parse_fixed_with::<f64>(program, Objective::Minimize, &options).unwrap();
        assert!(model.is_integer("X"));
        assert!(!model.is_integer("Y"));
    }

    #[test]
    fn equality_ranges() {
        let model = read("\
RHS
   RHS       MYEQN               10
RANGES
   RNG       MYEQN                4
ENDATA").unwrap();
        assert_eq!(model.constraint("MYEQN"), Some((10_f64, 14_f64)));

        let model = read("\
RHS
   RHS       MYEQN               10
RANGES
   RNG       MYEQN               -4
ENDATA").unwrap();
        assert_eq!(model.constraint("MYEQN"), Some((6_f64, 10_f64)));

        let model = read("\
RHS
   RHS       MYEQN               10
RANGES
   RNG       MYEQN                0
ENDATA").unwrap();
        assert_eq!(model.constraint("MYEQN"), Some((10_f64, 10_f64)));
    }

    #[test]
    fn inequality_ranges() {
        let model = read("\
RHS
   RHS       LIM1                 8   LIM2                 3
RANGES
   RNG       LIM1                -2   LIM2                 5
BOUNDS
 FR BND      X
ENDATA").unwrap();
        assert_eq!(model.constraint("LIM1"), Some((6_f64, 8_f64)));
        assert_eq!(model.constraint("LIM2"), Some((3_f64, 8_f64)));
        assert_eq!(model.bound("X"), Some((f64::NEG_INFINITY, f64::INFINITY)));
    }

    #[test]
    fn rhs_on_free_row_is_ignored() {
        let model = read("\
RHS
   RHS       COST                12
ENDATA").unwrap();
        assert_eq!(model.constraint("COST"), Some((f64::NEG_INFINITY, f64::INFINITY)));
    }

    #[test]
    fn first_objective_wins() {
        let program = "\
NAME         TWO
ROWS
 N  FIRST
 N  SECOND
 L  LIM1
COLUMNS
   X         FIRST                1   SECOND               2
   X         LIM1                 1
RHS
ENDATA";
        let model = parse_fixed::<f64>(program, Objective::Minimize).unwrap();
        assert_eq!(model.objective(), Some("FIRST"));
        assert_eq!(model.constraint("SECOND"), Some((f64::NEG_INFINITY, f64::INFINITY)));
        assert_eq!(model.variable("X").unwrap().get("SECOND"), Some(&2_f64));
    }

    #[test]
    fn non_consecutive_column() {
        let program = "\
NAME         NC
ROWS
 N  COST
 L  LIM1
COLUMNS
   X         COST                 1
   X         LIM1                 1
   Y         COST                 1
   X         LIM1                 2
RHS
ENDATA";
        assert_eq!(
            read_error(program),
            (ErrorKind::NonConsecutiveColumn("X".to_string()), Some(9)),
        );
    }

    #[test]
    fn missing_row_type() {
        let program = "\
NAME         MRT
ROWS
 N  COST
   LIM1
COLUMNS
RHS
ENDATA";
        assert_eq!(read_error(program), (ErrorKind::MissingRowType, Some(4)));
    }

    #[test]
    fn row_errors() {
        let program = "NAME         R\nROWS\n N  COST\n L  COST\nCOLUMNS\nRHS\nENDATA";
        assert_eq!(read_error(program), (ErrorKind::DuplicateRow("COST".to_string()), Some(4)));

        let program = "NAME         R\nROWS\n N\nCOLUMNS\nRHS\nENDATA";
        assert_eq!(read_error(program), (ErrorKind::MissingRowName, Some(3)));

        let program = "NAME         R\nROWS\n X  COST\nCOLUMNS\nRHS\nENDATA";
        assert_eq!(read_error(program), (ErrorKind::UnknownRowType("X".to_string()), Some(3)));
    }

    #[test]
    fn section_errors() {
        assert_eq!(read_error("* nothing here\nROWS"), (ErrorKind::SectionNotFound, Some(3)));

        let (kind, line) = read_error("NAME         S\nCOLUMNS\nRHS\nENDATA");
        assert_eq!(kind, ErrorKind::SectionMismatch {
            expected: "ROWS".to_string(),
            found: Some("COLUMNS".to_string()),
        });
        assert_eq!(line, Some(2));

        let (kind, line) = read_error("NAME         S\nROWS\n N  COST\nCOLUMNS\nRHS");
        assert_eq!(kind, ErrorKind::SectionMismatch {
            expected: "RANGES or BOUNDS or ENDATA".to_string(),
            found: None,
        });
        assert_eq!(line, Some(6));

        let error = read("RHS\nBOUNDS\nRANGES\nENDATA").unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::SectionMismatch {
            expected: "ENDATA".to_string(),
            found: Some("RANGES".to_string()),
        });
        assert_eq!(error.line_number(), Some(12));
    }

    #[test]
    fn column_errors() {
        let error = read("   Y         LIM3                 1\nRHS\nENDATA").unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::UndefinedRow("LIM3".to_string()));
        assert_eq!(error.line_number(), Some(10));

        let error = read("   Y         LIM1                 1   LIM1                 2\nRHS\nENDATA").unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::DuplicateCoefficient {
            column: "Y".to_string(),
            row: "LIM1".to_string(),
        });

        let error = read("   Y         LIM1               1.x\nRHS\nENDATA").unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::NumberParseError("1.x".to_string()));

        let error = read("   Y         LIM1\nRHS\nENDATA").unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::MissingCoefficient);

        let error = read("             LIM1                 1\nRHS\nENDATA").unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::MissingColumnName);

        let error = read("   Y         LIM1                 1   LIM2\nRHS\nENDATA").unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::MissingCoefficient);

        let error = read("   M         'MARKER'  'INTXXX'\nRHS\nENDATA").unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::UnknownMarker("'INTXXX'".to_string()));
    }

    #[test]
    fn value_errors() {
        let error = read("RHS\n   RHS       LIM3                 1\nENDATA").unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::UndefinedRow("LIM3".to_string()));
        assert_eq!(error.line_number(), Some(11));

        let error = read("RHS\n   RHS       LIM1\nENDATA").unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::MissingRHSValue);

        let error = read("RHS\nRANGES\n   RNG       LIM1\nENDATA").unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::MissingRangeValue);

        let error = read("RHS\n   RHS                            1\nENDATA").unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::MissingRowName);

        let error = read("RHS\n   RHS       LIM1               abc\nENDATA").unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::NumberParseError("abc".to_string()));
    }

    #[test]
    fn bound_types() {
        let model = read("\
   Y         LIM1                 1
   Z         LIM1                 1
   W         LIM1                 1
   V         LIM1                 1
RHS
BOUNDS
 MI BND      X
 LI BND      Y                    2
 UI BND      Y                    9
 BV BND      Z
 FX BND      W                  3.5
 PL BND      V
ENDATA").unwrap();
        assert_eq!(model.bound("X"), Some((f64::NEG_INFINITY, 0_f64)));
        assert_eq!(model.bound("Y"), Some((2_f64, 9_f64)));
        assert!(model.is_integer("Y"));
        assert!(model.is_binary("Z"));
        assert!(!model.is_integer("Z"));
        assert!(!model.bounds().contains_key("Z"));
        assert_eq!(model.bound("W"), Some((3.5_f64, 3.5_f64)));
        assert_eq!(model.bound("V"), Some((0_f64, f64::INFINITY)));
        assert!(model.bounds().contains_key("V"));
    }

    #[test]
    fn bound_errors() {
        let error = read("RHS\nBOUNDS\n UP BND      X\nENDATA").unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::MissingBoundValue);
        assert_eq!(error.line_number(), Some(12));

        let error = read("RHS\nBOUNDS\n   BND       X                    1\nENDATA").unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::MissingBoundType);

        let error = read("RHS\nBOUNDS\n XX BND      X                    1\nENDATA").unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::UnknownBoundType("XX".to_string()));

        let error = read("RHS\nBOUNDS\n SC BND      X                    1\nENDATA").unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::SemiContinuousUnsupported);

        let error = read("RHS\nBOUNDS\n LO BND      Q                    1\nENDATA").unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::UndefinedColumn("Q".to_string()));

        let error = read("RHS\nBOUNDS\n LO BND                           1\nENDATA").unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::MissingColumnName);

        let error = read("RHS\nBOUNDS\n LO BND      X                    -\nENDATA").unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::NumberParseError("-".to_string()));
    }

    #[test]
    fn bound_column_is_checked_first() {
        let error = read("RHS\nBOUNDS\n LO BND      Q                    -\nENDATA").unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::UndefinedColumn("Q".to_string()));

        let error = read("RHS\nBOUNDS\n XX BND\nENDATA").unwrap_err();
        assert_eq!(error.kind(), &ErrorKind::MissingColumnName);
    }
}
