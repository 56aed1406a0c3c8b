//! Day 4: Secure Container.

use itertools::Itertools;

fn bounds(input: &str) -> (u32, u32) {
    let (lo, hi) = input.trim().split_once('-').unwrap();
    (lo.parse().unwrap(), hi.parse().unwrap())
}

fn digits(n: u32) -> [u8; 6] {
    let mut digits = [0; 6];
    let mut n = n;
    for d in digits.iter_mut().rev() {
        *d = (n % 10) as u8;
        n /= 10;
    }
    digits
}

fn never_decreases(digits: &[u8; 6]) -> bool {
    digits.windows(2).all(|pair| pair[0] <= pair[1])
}

fn has_adjacent_pair(digits: &[u8; 6]) -> bool {
    digits.windows(2).any(|pair| pair[0] == pair[1])
}

/// Part 2 tightens the rule: some run of equal digits must have length
/// exactly two.
fn has_exact_pair(digits: &[u8; 6]) -> bool {
    digits
        .iter()
        .dedup_with_count()
        .any(|(count, _)| count == 2)
}

pub fn part_one(input: &str) -> Option<usize> {
    let (lo, hi) = bounds(input);
    Some(
        (lo..=hi)
            .map(digits)
            .filter(|d| never_decreases(d) && has_adjacent_pair(d))
            .count(),
    )
}

pub fn part_two(input: &str) -> Option<usize> {
    let (lo, hi) = bounds(input);
    Some(
        (lo..=hi)
            .map(digits)
            .filter(|d| never_decreases(d) && has_exact_pair(d))
            .count(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        assert!(never_decreases(&digits(111111)) && has_adjacent_pair(&digits(111111)));
        assert!(!never_decreases(&digits(223450)));
        assert!(!has_adjacent_pair(&digits(123789)));
        assert_eq!(part_one("111111-111111"), Some(1));
    }

    #[test]
    fn test_part_two() {
        assert!(has_exact_pair(&digits(112233)));
        assert!(!has_exact_pair(&digits(123444)));
        assert!(has_exact_pair(&digits(111122)));
    }
}
