//! Day 1: Historian Hysteria.

use itertools::Itertools;

fn parse(input: &str) -> (Vec<u32>, Vec<u32>) {
    input
        .lines()
        .map(|line| {
            line.split_whitespace()
                .map(|n| n.parse::<u32>().unwrap())
                .collect_tuple()
                .unwrap()
        })
        .unzip()
}

/// Total distance between the two lists when both are sorted.
pub fn part_one(input: &str) -> Option<u32> {
    let (left, right) = parse(input);
    Some(
        left.into_iter()
            .sorted()
            .zip(right.into_iter().sorted())
            .map(|(a, b)| a.abs_diff(b))
            .sum(),
    )
}

/// Similarity score: each left number times how often it appears on the
/// right.
pub fn part_two(input: &str) -> Option<u32> {
    let (left, right) = parse(input);
    let counts = right.into_iter().counts();
    Some(
        left.into_iter()
            .map(|n| n * counts.get(&n).copied().unwrap_or(0) as u32)
            .sum(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = crate::read_file("examples", 1);
        assert_eq!(part_one(&input), Some(11));
    }

    #[test]
    fn test_part_two() {
        let input = crate::read_file("examples", 1);
        assert_eq!(part_two(&input), Some(31));
    }
}
