use std::fs::read_to_string;

use mpsio::data::linear_program::elements::{Objective, RowType};
use mpsio::io::error::{ErrorKind, Import};
use mpsio::io::import;
use mpsio::io::lp;
use mpsio::io::mps::{parse_fixed, parse_fixed_with, ParseOptions};

use super::read;
use crate::get_test_file_path;

#[test]
fn testprob() {
    let model = read("testprob", Objective::Minimize);

    assert_eq!(model.name(), "TESTPROB");
    assert_eq!(model.objective(), Some("COST"));
    assert_eq!(model.constraint("LIM1"), Some((f64::NEG_INFINITY, 5_f64)));
    assert_eq!(model.constraint("LIM2"), Some((10_f64, f64::INFINITY)));
    assert_eq!(model.constraint("MYEQN"), Some((7_f64, 7_f64)));
    assert_eq!(model.bound("XONE"), Some((0_f64, 4_f64)));
    assert_eq!(model.bound("YTWO"), Some((-1_f64, 1_f64)));
    assert_eq!(model.bound("ZTHREE"), Some((0_f64, f64::INFINITY)));
    assert!(model.integers().is_empty());
}

#[test]
fn planning() {
    let model = read("planning", Objective::Maximize);

    assert_eq!(model.name(), "PLANNING");
    assert_eq!(model.direction(), Objective::Maximize);
    assert_eq!(model.objective(), Some("PROFIT"));

    // RHS values on free rows have no effect.
    assert_eq!(model.constraint("PROFIT"), Some((f64::NEG_INFINITY, f64::INFINITY)));
    assert_eq!(model.constraint("WASTE"), Some((f64::NEG_INFINITY, f64::INFINITY)));
    assert_eq!(model.constraint("MACHINE"), Some((25_f64, 40_f64)));
    assert_eq!(model.constraint("LABOUR"), Some((f64::NEG_INFINITY, 0_f64)));
    assert_eq!(model.constraint("DEMAND"), Some((2_f64, 8_f64)));
    assert_eq!(model.constraint("BALANCE"), Some((0_f64, 3_f64)));
    assert_eq!(model.constraint("BUDGET"), Some((f64::NEG_INFINITY, 1000_f64)));

    let counts = model.row_type_counts();
    assert_eq!(counts[RowType::Free], 2);
    assert_eq!(counts[RowType::Less], 3);
    assert_eq!(counts[RowType::Greater], 1);
    assert_eq!(counts[RowType::Equal], 1);

    let columns = model.variables().keys().map(String::as_str).collect::<Vec<_>>();
    assert_eq!(columns, vec!["WIDGET", "GADGET", "CRATES", "SHIFT", "OVERTIME"]);
    assert_eq!(model.variable("WIDGET").unwrap().get("WASTE"), Some(&0.5_f64));
    assert_eq!(model.variable("OVERTIME").unwrap().get("PROFIT"), Some(&-15_f64));

    assert_eq!(model.integers().iter().collect::<Vec<_>>(), vec!["GADGET", "CRATES"]);
    assert!(model.is_binary("SHIFT"));
    assert!(!model.is_integer("SHIFT"));
    assert!(!model.bounds().contains_key("SHIFT"));

    assert_eq!(model.bound("WIDGET"), Some((0_f64, 10_f64)));
    assert_eq!(model.bound("GADGET"), Some((0_f64, f64::INFINITY)));
    assert_eq!(model.bound("CRATES"), Some((1_f64, 20_f64)));
    assert_eq!(model.bound("OVERTIME"), Some((f64::NEG_INFINITY, 12_f64)));
    assert_eq!(model.bound("UNKNOWN"), None);

    assert_eq!(
        model.objective_coefficients().collect::<Vec<_>>(),
        vec![("WIDGET", 3_f64), ("GADGET", 5_f64), ("CRATES", -1_f64), ("OVERTIME", -15_f64)],
    );
}

#[test]
fn planning_as_lp() {
    let model = read("planning", Objective::Maximize);

    assert_eq!(lp::write(&model), "\
Maximize
 PROFIT: 3 WIDGET + 5 GADGET - 1 CRATES - 15 OVERTIME
Subject To
 MACHINE: 25 <= 2 WIDGET + 4 GADGET <= 40
 LABOUR: 1 WIDGET + 3 GADGET - 8 SHIFT - 1 OVERTIME <= 0
 DEMAND: 2 <= 1 WIDGET <= 8
 BALANCE: 0 <= 1 GADGET - 2 CRATES <= 3
 BUDGET: 100 SHIFT + 20 OVERTIME <= 1000
Bounds
 0 <= WIDGET <= 10
 1 <= CRATES <= 20
 -inf <= OVERTIME <= 12
General
 GADGET CRATES
Binary
 SHIFT
End
");
}

#[test]
fn same_result_from_text() {
    let path = get_test_file_path("planning", "mps");
    let text = read_to_string(&path).unwrap();

    let from_text = parse_fixed::<f64>(&text, Objective::Minimize).unwrap();
    assert_eq!(read("planning", Objective::Minimize), from_text);
}

#[test]
fn duplicate_free_file_is_strict_clean() {
    let text = read_to_string(get_test_file_path("planning", "mps")).unwrap();
    assert!(parse_fixed_with::<f64>(&text, Objective::Minimize, &ParseOptions::strict()).is_ok());
}

#[test]
fn non_consecutive() {
    let path = get_test_file_path("non_consecutive", "mps");
    match import::<f64>(&path, Objective::Minimize) {
        Err(Import::Parse(error)) => {
            assert_eq!(error.kind(), &ErrorKind::NonConsecutiveColumn("X".to_string()));
            assert_eq!(error.line_number(), Some(9));
            assert!(error.to_string().starts_with("Line 9: "));
        },
        _ => panic!("expected a parse error"),
    }
}

#[test]
fn wrong_extension() {
    let path = get_test_file_path("planning", "txt");
    assert!(matches!(import::<f64>(&path, Objective::Minimize), Err(Import::FileExtension(_))));
}
