use mpsio::data::linear_program::elements::Objective;
use mpsio::data::linear_program::solution::Status;
use mpsio::io::{import, report};

use crate::get_test_file_path;

#[test]
fn planning() {
    let solution = report::import(&get_test_file_path("planning", "txt"), Status::from_code(7))
        .unwrap();

    assert_eq!(solution.status, Status::Optimal);
    assert_eq!(solution.objective_value, 38_f64);

    // Integer problems have no dual values, and this solver left out the basis status.
    for record in solution.columns.values().chain(&solution.rows) {
        assert_eq!(record.dual, None);
        assert!(record.other.is_empty());
    }

    assert_eq!(solution.primal("WIDGET"), Some(8_f64));
    assert_eq!(solution.columns["OVERTIME"].lower, Some(f64::NEG_INFINITY));
    assert_eq!(solution.columns["SHIFT"].index, Some(3));

    let names = solution.rows.iter().filter_map(|row| row.name.as_deref()).collect::<Vec<_>>();
    assert_eq!(names, vec!["PROFIT", "MACHINE", "LABOUR", "DEMAND", "BALANCE", "BUDGET", "WASTE"]);
    assert_eq!(solution.row("BUDGET").and_then(|row| row.primal), Some(100_f64));
}

#[test]
fn matches_model() {
    let model = import::<f64>(&get_test_file_path("planning", "mps"), Objective::Maximize).unwrap();
    let solution = report::import(&get_test_file_path("planning", "txt"), Status::Optimal).unwrap();

    let columns = model.variables().keys().collect::<Vec<_>>();
    assert_eq!(solution.columns.keys().collect::<Vec<_>>(), columns);

    let objective = model.objective_coefficients()
        .map(|(column, coefficient)| coefficient * solution.primal(column).unwrap())
        .sum::<f64>();
    assert_eq!(objective, solution.objective_value);

    for (column, record) in &solution.columns {
        let (lower, upper) = model.bound(column).unwrap();
        let value = record.primal.unwrap();
        assert!(lower <= value && value <= upper);
    }
}
