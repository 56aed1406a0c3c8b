//! Day 2: 1202 Program Alarm.

use rayon::prelude::*;

use crate::intcode::Computer;

const TARGET: i64 = 19690720;

/// Patches the noun and verb into the program, runs it, and returns cell 0.
fn run_with(mut computer: Computer, noun: i64, verb: i64) -> i64 {
    computer.set_mem(1, noun);
    computer.set_mem(2, verb);
    computer.run();
    computer.mem(0)
}

pub fn part_one(input: &str) -> Option<i64> {
    Some(run_with(Computer::parse(input), 12, 2))
}

/// Finds the noun/verb pair (each 0..100) producing [`TARGET`].
pub fn part_two(input: &str) -> Option<i64> {
    let computer = Computer::parse(input);
    (0..100i64 * 100).into_par_iter().find_map_any(|i| {
        let (noun, verb) = (i / 100, i % 100);
        (run_with(computer.clone(), noun, verb) == TARGET).then(|| 100 * noun + verb)
    })
}
