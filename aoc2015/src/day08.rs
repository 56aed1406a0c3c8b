//! Day 8: Matchsticks.

/// Number of characters the string literal represents in memory.
fn memory_len(line: &str) -> usize {
    let bytes = line.as_bytes();
    assert!(bytes.len() >= 2 && bytes[0] == b'"' && bytes[bytes.len() - 1] == b'"');

    let mut len = 0;
    let mut i = 1;
    while i < bytes.len() - 1 {
        i += match bytes[i] {
            b'\\' => match bytes[i + 1] {
                b'x' => 4,
                _ => 2,
            },
            _ => 1,
        };
        len += 1;
    }
    len
}

/// Number of characters needed to re-escape the literal as source code.
fn encoded_len(line: &str) -> usize {
    2 + line
        .chars()
        .map(|c| match c {
            '"' | '\\' => 2,
            _ => 1,
        })
        .sum::<usize>()
}

pub fn part_one(input: &str) -> Option<usize> {
    Some(
        input
            .lines()
            .map(|line| line.len() - memory_len(line))
            .sum(),
    )
}

pub fn part_two(input: &str) -> Option<usize> {
    Some(
        input
            .lines()
            .map(|line| encoded_len(line) - line.len())
            .sum(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_len() {
        assert_eq!(memory_len(r#""""#), 0);
        assert_eq!(memory_len(r#""abc""#), 3);
        assert_eq!(memory_len(r#""aaa\"aaa""#), 7);
        assert_eq!(memory_len(r#""\x27""#), 1);
    }

    #[test]
    fn test_part_one() {
        let input = crate::read_file("examples", 8);
        assert_eq!(part_one(&input), Some(12));
    }

    #[test]
    fn test_part_two() {
        let input = crate::read_file("examples", 8);
        assert_eq!(part_two(&input), Some(19));
    }
}
