//! Day 1: The Tyranny of the Rocket Equation.

fn fuel(mass: i64) -> i64 {
    mass / 3 - 2
}

/// Fuel for the mass, plus fuel for that fuel, and so on until the
/// requirement drops to zero.
fn total_fuel(mass: i64) -> i64 {
    std::iter::successors(Some(fuel(mass)), |&m| Some(fuel(m)))
        .take_while(|&m| m > 0)
        .sum()
}

fn modules(input: &str) -> impl Iterator<Item = i64> + '_ {
    input.lines().map(|line| line.parse().unwrap())
}

pub fn part_one(input: &str) -> Option<i64> {
    Some(modules(input).map(fuel).sum())
}

pub fn part_two(input: &str) -> Option<i64> {
    Some(modules(input).map(total_fuel).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        assert_eq!(fuel(12), 2);
        assert_eq!(fuel(14), 2);
        assert_eq!(fuel(1969), 654);
        assert_eq!(fuel(100756), 33583);
        assert_eq!(part_one("12\n14"), Some(4));
    }

    #[test]
    fn test_part_two() {
        assert_eq!(total_fuel(14), 2);
        assert_eq!(total_fuel(1969), 966);
        assert_eq!(total_fuel(100756), 50346);
    }
}
