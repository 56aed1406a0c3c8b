//! Day 7: Bridge Repair.

use rayon::prelude::*;

#[derive(Debug, Clone)]
struct Equation {
    target: u64,
    operands: Vec<u64>,
}

impl Equation {
    fn parse(line: &str) -> Self {
        let (target, operands) = line.split_once(':').unwrap();
        Self {
            target: target.parse().unwrap(),
            operands: operands
                .split_whitespace()
                .map(|n| n.parse().unwrap())
                .collect(),
        }
    }

    fn solvable(&self, with_concat: bool) -> bool {
        reachable(self.target, self.operands[0], &self.operands[1..], with_concat)
    }
}

fn concatenate(a: u64, b: u64) -> u64 {
    let width = if b == 0 { 1 } else { b.ilog10() + 1 };
    a * 10u64.pow(width) + b
}

/// Operators apply left to right, no precedence. Every operator grows the
/// accumulator, so overshooting the target prunes the branch.
fn reachable(target: u64, acc: u64, rest: &[u64], with_concat: bool) -> bool {
    let Some((&next, rest)) = rest.split_first() else {
        return acc == target;
    };
    if acc > target {
        return false;
    }
    reachable(target, acc + next, rest, with_concat)
        || reachable(target, acc * next, rest, with_concat)
        || (with_concat && reachable(target, concatenate(acc, next), rest, with_concat))
}

fn calibration_total(input: &str, with_concat: bool) -> u64 {
    input
        .par_lines()
        .map(Equation::parse)
        .filter(|equation| equation.solvable(with_concat))
        .map(|equation| equation.target)
        .sum()
}

pub fn part_one(input: &str) -> Option<u64> {
    Some(calibration_total(input, false))
}

pub fn part_two(input: &str) -> Option<u64> {
    Some(calibration_total(input, true))
}
