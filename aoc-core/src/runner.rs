//! Runs a whole year's worth of solutions in one go and prints a timing
//! summary, like the per-year harness scripts this archive grew out of.

use std::time::{Duration, Instant};

use prettytable::{format, row, Table};

use crate::Solver;

/// Arguments accepted by every year binary: an optional day number. No day
/// means "run everything that has an input".
pub struct Args {
    pub day: Option<u8>,
}

impl Args {
    pub fn from_env() -> Result<Self, pico_args::Error> {
        let mut args = pico_args::Arguments::from_env();
        let day = args.opt_free_from_str()?;
        Ok(Self { day })
    }
}

pub struct PartRun {
    pub answer: Option<String>,
    pub elapsed: Duration,
}

pub struct DayRun {
    pub day: u8,
    pub parts: [PartRun; 2],
}

pub fn run_part(solver: Solver, input: &str) -> PartRun {
    let timer = Instant::now();
    let answer = solver(input);
    PartRun {
        answer,
        elapsed: timer.elapsed(),
    }
}

pub fn run_day(day: u8, solvers: (Solver, Solver), input: &str) -> DayRun {
    DayRun {
        day,
        parts: [run_part(solvers.0, input), run_part(solvers.1, input)],
    }
}

pub fn total_time(runs: &[DayRun]) -> Duration {
    runs.iter()
        .flat_map(|run| run.parts.iter())
        .map(|part| part.elapsed)
        .sum()
}

/// Prints the summary table followed by the total elapsed time.
pub fn print_summary(runs: &[DayRun]) {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_CLEAN);
    table.set_titles(row![b->"Day", b->"Part 1", b->"Part 2", b->"Time"]);

    for run in runs {
        let answer = |part: &PartRun| part.answer.clone().unwrap_or_else(|| "-".to_string());
        table.add_row(row![
            r->run.day,
            answer(&run.parts[0]),
            answer(&run.parts[1]),
            r->format!("{:.2?}", run.parts[0].elapsed + run.parts[1].elapsed),
        ]);
    }

    table.printstd();
    println!("Total: {:.2?}", total_time(runs));
}
