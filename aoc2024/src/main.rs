use std::process::exit;

use aoc_core::runner::{self, Args};

fn main() {
    let args = Args::from_env().unwrap_or_else(|err| {
        eprintln!("bad arguments: {err}");
        exit(2);
    });

    match args.day {
        Some(day) => run_one(day),
        None => run_all(),
    }
}

fn run_one(day: u8) {
    let Some((part_one, part_two)) = aoc2024::solvers(day) else {
        eprintln!("no solution for {} day {day}", aoc2024::YEAR);
        exit(1);
    };
    let input = aoc2024::read_file("inputs", day);
    aoc_core::solve!(1, part_one, &input);
    aoc_core::solve!(2, part_two, &input);
}

fn run_all() {
    let runs: Vec<_> = aoc2024::SOLVED_DAYS
        .into_iter()
        .filter_map(|day| {
            let input = aoc2024::try_read_file("inputs", day)?;
            Some(runner::run_day(day, aoc2024::solvers(day).unwrap(), &input))
        })
        .collect();
    runner::print_summary(&runs);
}
