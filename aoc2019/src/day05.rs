//! Day 5: Sunny with a Chance of Asteroids.

use itertools::Itertools;

use crate::intcode::Computer;

/// Runs the diagnostic with system ID 1: every self-check must output zero,
/// and the final output is the diagnostic code.
pub fn part_one(input: &str) -> Option<i64> {
    let outputs = Computer::parse(input).with_input(1).run();
    let (&diagnostic, checks) = outputs.split_last()?;
    assert!(
        checks.iter().all(|&check| check == 0),
        "self-checks failed: {checks:?}"
    );
    Some(diagnostic)
}

/// System ID 5 exercises the jump and comparison opcodes and outputs exactly
/// one diagnostic code.
pub fn part_two(input: &str) -> Option<i64> {
    Computer::parse(input)
        .with_input(5)
        .run()
        .into_iter()
        .exactly_one()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_shape() {
        // A stand-in diagnostic: two clean self-checks, then the code.
        assert_eq!(part_one("104,0,104,0,104,77,99"), Some(77));
    }

    #[test]
    #[should_panic(expected = "self-checks failed")]
    fn failed_self_check() {
        part_one("104,1,104,77,99");
    }

    #[test]
    fn single_code() {
        assert_eq!(part_two("3,3,1105,-1,9,1101,0,0,12,4,12,99,1"), Some(1));
    }
}
