//! Day 2: Red-Nosed Reports.

use smallvec::SmallVec;

/// Reports are short, usually five to eight levels.
type Levels = SmallVec<[i32; 8]>;

fn parse_report(line: &str) -> Levels {
    line.split_whitespace()
        .map(|n| n.parse().unwrap())
        .collect()
}

/// Safe means strictly monotonic with adjacent steps of 1 to 3.
fn is_safe(levels: &[i32]) -> bool {
    let increasing = levels
        .windows(2)
        .all(|pair| (1..=3).contains(&(pair[1] - pair[0])));
    let decreasing = levels
        .windows(2)
        .all(|pair| (1..=3).contains(&(pair[0] - pair[1])));
    increasing || decreasing
}

/// The Problem Dampener tolerates one bad level: safe if removing any single
/// level makes the report safe.
fn is_safe_dampened(levels: &Levels) -> bool {
    is_safe(levels)
        || (0..levels.len()).any(|i| {
            let mut dampened = levels.clone();
            dampened.remove(i);
            is_safe(&dampened)
        })
}

pub fn part_one(input: &str) -> Option<usize> {
    Some(
        input
            .lines()
            .map(parse_report)
            .filter(|levels| is_safe(levels))
            .count(),
    )
}

pub fn part_two(input: &str) -> Option<usize> {
    Some(
        input
            .lines()
            .map(parse_report)
            .filter(is_safe_dampened)
            .count(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = crate::read_file("examples", 2);
        assert_eq!(part_one(&input), Some(2));
    }

    #[test]
    fn test_part_two() {
        let input = crate::read_file("examples", 2);
        assert_eq!(part_two(&input), Some(4));
    }
}
