//! Day 5: Print Queue.

use std::cmp::Ordering;
use std::collections::HashSet;

use aoc_core::{debugln, helpers::paragraphs};
use itertools::Itertools;

type Rules = HashSet<(u32, u32)>;

fn parse(input: &str) -> (Rules, Vec<Vec<u32>>) {
    let (rules_block, updates_block) = paragraphs(input).collect_tuple().unwrap();

    let rules = rules_block
        .lines()
        .map(|line| {
            let (before, after) = line.split_once('|').unwrap();
            (before.parse().unwrap(), after.parse().unwrap())
        })
        .collect();

    let updates = updates_block
        .lines()
        .map(|line| line.split(',').map(|page| page.parse().unwrap()).collect())
        .collect();

    (rules, updates)
}

/// An update is ordered if no pair of its pages contradicts a rule.
fn in_order(rules: &Rules, update: &[u32]) -> bool {
    update
        .iter()
        .tuple_combinations()
        .all(|(&a, &b)| !rules.contains(&(b, a)))
}

fn middle(update: &[u32]) -> u32 {
    update[update.len() / 2]
}

pub fn part_one(input: &str) -> Option<u32> {
    let (rules, updates) = parse(input);
    Some(
        updates
            .iter()
            .filter(|update| in_order(&rules, update))
            .map(|update| middle(update))
            .sum(),
    )
}

/// Reorders the incorrectly-ordered updates by the rules, then sums their
/// middle pages.
pub fn part_two(input: &str) -> Option<u32> {
    let (rules, updates) = parse(input);
    Some(
        updates
            .into_iter()
            .filter(|update| !in_order(&rules, update))
            .map(|mut update| {
                update.sort_by(|&a, &b| {
                    if rules.contains(&(a, b)) {
                        Ordering::Less
                    } else {
                        Ordering::Greater
                    }
                });
                debugln!("reordered: {update:?}");
                middle(&update)
            })
            .sum(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = crate::read_file("examples", 5);
        assert_eq!(part_one(&input), Some(143));
    }

    #[test]
    fn test_part_two() {
        let input = crate::read_file("examples", 5);
        assert_eq!(part_two(&input), Some(123));
    }
}
