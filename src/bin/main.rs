use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use env_logger::Builder;
use log::{info, LevelFilter};

use mpsio::data::linear_program::elements::{Objective, RowType};
use mpsio::data::linear_program::model::Model;
use mpsio::data::linear_program::solution::{Solution, Status};
use mpsio::io::{import, lp, report};

/// Reads linear programs in the MPS format, and the reports a solver writes about them.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// File containing the problem description
    problem_file: PathBuf,
    /// Maximize the objective row instead of minimizing it
    #[arg(long)]
    maximize: bool,
    /// Print the problem in the LP format
    #[arg(long)]
    lp: bool,
    /// Solution report written by a solver for this problem
    #[arg(long)]
    report: Option<PathBuf>,
    /// Status code the solver returned along with the report
    #[arg(long, requires = "report")]
    status: Option<i32>,
    /// Log more, repeat for even more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let mut builder = Builder::from_default_env();
    if opts.verbose > 0 {
        builder.filter_level(match opts.verbose {
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        });
    }
    builder.init();

    let direction = if opts.maximize { Objective::Maximize } else { Objective::Minimize };
    info!("Reading problem file: {:?}", opts.problem_file);
    let model = import::<f64>(&opts.problem_file, direction)
        .with_context(|| format!("Reading {:?}", opts.problem_file))?;

    if opts.lp {
        print!("{}", lp::write(&model));
    } else {
        print_summary(&model);
    }

    if let Some(path) = &opts.report {
        let status = opts.status.map_or(Status::Unknown, Status::from_code);
        let solution = report::import(path, status)
            .with_context(|| format!("Reading report {:?}", path))?;
        print_solution(&solution);
    }

    Ok(())
}

fn print_summary(model: &Model<f64>) {
    let counts = model.row_type_counts();
    println!("Problem: {}", model.name());
    println!("Direction: {}", model.direction());
    println!("Objective row: {}", model.objective().unwrap_or("(none)"));
    println!(
        "Rows: {} ({} {}, {} {}, {} {}, {} {})",
        model.constraints().len(),
        counts[RowType::Less], RowType::Less,
        counts[RowType::Greater], RowType::Greater,
        counts[RowType::Equal], RowType::Equal,
        counts[RowType::Free], RowType::Free,
    );
    println!(
        "Columns: {} ({} integer, {} binary, {} bounded)",
        model.variables().len(),
        model.integers().len(),
        model.binaries().len(),
        model.bounds().len(),
    );
}

fn print_solution(solution: &Solution) {
    println!("Status: {}", solution.status);
    println!("Objective value: {}", solution.objective_value);
    for (column, record) in &solution.columns {
        match record.primal {
            Some(value) => println!("{} = {}", column, value),
            None => println!("{} = ?", column),
        }
    }
}
