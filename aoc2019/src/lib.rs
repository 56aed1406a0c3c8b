/*
 * Solutions to Advent of Code 2019, one module per day, plus the Intcode
 * computer that several of them share.
 */

pub mod intcode;

pub mod day01;
pub mod day02;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day09;
pub mod day12;

pub const YEAR: u16 = 2019;
pub const SOLVED_DAYS: [u8; 7] = [1, 2, 4, 5, 6, 9, 12];

/// Type-erases a part so every day fits in one table.
macro_rules! part {
    ($f:path) => {
        (|input: &str| $f(input).map(|answer| answer.to_string())) as aoc_core::Solver
    };
}

pub fn solvers(day: u8) -> Option<(aoc_core::Solver, aoc_core::Solver)> {
    match day {
        1 => Some((part!(day01::part_one), part!(day01::part_two))),
        2 => Some((part!(day02::part_one), part!(day02::part_two))),
        4 => Some((part!(day04::part_one), part!(day04::part_two))),
        5 => Some((part!(day05::part_one), part!(day05::part_two))),
        6 => Some((part!(day06::part_one), part!(day06::part_two))),
        9 => Some((part!(day09::part_one), part!(day09::part_two))),
        12 => Some((part!(day12::part_one), part!(day12::part_two))),
        _ => None,
    }
}

pub fn read_file(folder: &str, day: u8) -> String {
    aoc_core::read_file(env!("CARGO_MANIFEST_DIR"), folder, day)
}

pub fn try_read_file(folder: &str, day: u8) -> Option<String> {
    aoc_core::try_read_file(env!("CARGO_MANIFEST_DIR"), folder, day)
}
