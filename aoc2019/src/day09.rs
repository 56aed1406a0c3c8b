//! Day 9: Sensor Boost.

use itertools::Itertools;

use crate::intcode::Computer;

/// In either mode the BOOST program outputs exactly one value once the
/// computer supports relative parameters and extended memory.
fn run_boost(input: &str, mode: i64) -> Option<i64> {
    Computer::parse(input)
        .with_input(mode)
        .run()
        .into_iter()
        .exactly_one()
        .ok()
}

pub fn part_one(input: &str) -> Option<i64> {
    run_boost(input, 1)
}

pub fn part_two(input: &str) -> Option<i64> {
    run_boost(input, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boost_requires_one_output() {
        // Two outputs means a failed opcode check somewhere.
        assert_eq!(run_boost("104,203,104,7,99", 1), None);
        assert_eq!(run_boost("109,7,204,0,99,0,0,42", 1), Some(42));
    }
}
