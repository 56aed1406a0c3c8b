//! Day 5: Doesn't He Have Intern-Elves For This?

const FORBIDDEN: [&str; 4] = ["ab", "cd", "pq", "xy"];

fn is_nice(s: &str) -> bool {
    let vowels = s.chars().filter(|c| "aeiou".contains(*c)).count();
    let has_double = s.as_bytes().windows(2).any(|pair| pair[0] == pair[1]);
    let clean = FORBIDDEN.iter().all(|bad| !s.contains(bad));
    vowels >= 3 && has_double && clean
}

/// A pair of letters that appears at least twice without overlapping.
fn has_repeated_pair(s: &str) -> bool {
    (0..s.len().saturating_sub(1)).any(|i| s[i + 2..].contains(&s[i..i + 2]))
}

/// A letter that repeats with exactly one letter between, like `xyx`.
fn has_sandwich(s: &str) -> bool {
    s.as_bytes().windows(3).any(|w| w[0] == w[2])
}

pub fn part_one(input: &str) -> Option<usize> {
    Some(input.lines().filter(|line| is_nice(line)).count())
}

pub fn part_two(input: &str) -> Option<usize> {
    Some(
        input
            .lines()
            .filter(|line| has_repeated_pair(line) && has_sandwich(line))
            .count(),
    )
}
