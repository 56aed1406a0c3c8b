//! Day 1: Not Quite Lisp.

fn step(c: char) -> i32 {
    match c {
        '(' => 1,
        ')' => -1,
        other => panic!("unexpected character {other:?}"),
    }
}

/// Returns the floor Santa ends up on after following every instruction.
pub fn part_one(input: &str) -> Option<i32> {
    Some(input.trim().chars().map(step).sum())
}

/// Returns the 1-based position of the instruction that first takes Santa
/// into the basement.
pub fn part_two(input: &str) -> Option<usize> {
    let mut floor = 0;
    for (i, c) in input.trim().chars().enumerate() {
        floor += step(c);
        if floor < 0 {
            return Some(i + 1);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        assert_eq!(part_one("(())"), Some(0));
        assert_eq!(part_one("()()"), Some(0));
        assert_eq!(part_one("((("), Some(3));
        assert_eq!(part_one("))((((("), Some(3));
        assert_eq!(part_one("())"), Some(-1));
        assert_eq!(part_one(")())())"), Some(-3));
    }

    #[test]
    fn test_part_two() {
        assert_eq!(part_two(")"), Some(1));
        assert_eq!(part_two("()())"), Some(5));
        assert_eq!(part_two("((("), None);
    }
}
