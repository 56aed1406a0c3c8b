/*
 * Solutions to Advent of Code 2015, one module per day. The registry at the
 * bottom is what the year binary and the answer harness iterate over.
 */

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day05;
pub mod day06;
pub mod day08;

pub const YEAR: u16 = 2015;
pub const SOLVED_DAYS: [u8; 6] = [1, 2, 3, 5, 6, 8];

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
        3 => Some((part!(day03::part_one), part!(day03::part_two))),
        5 => Some((part!(day05::part_one), part!(day05::part_two))),
        6 => Some((part!(day06::part_one), part!(day06::part_two))),
        8 => Some((part!(day08::part_one), part!(day08::part_two))),
        _ => None,
    }
}

pub fn read_file(folder: &str, day: u8) -> String {
    aoc_core::read_file(env!("CARGO_MANIFEST_DIR"), folder, day)
}

pub fn try_read_file(folder: &str, day: u8) -> Option<String> {
    aoc_core::try_read_file(env!("CARGO_MANIFEST_DIR"), folder, day)
}

#[cfg(test)]
mod tests {
    #[test]
    fn registry_matches_solved_days() {
        for day in super::SOLVED_DAYS {
            assert!(super::solvers(day).is_some(), "day {day} missing from registry");
        }
        assert!(super::solvers(4).is_none());
    }
}
