//! Day 4: Ceres Search.

use aoc_core::helpers::grid;
use glam::IVec2;

const XMAS: &[u8] = b"XMAS";

/// Counts every straight-line `XMAS`, in all eight directions.
pub fn part_one(input: &str) -> Option<usize> {
    let letters = grid::parse(input);
    let count = grid::positions(&letters)
        .map(|pos| {
            grid::ALL_DIRECTIONS
                .iter()
                .filter(|&&dir| {
                    XMAS.iter()
                        .enumerate()
                        .all(|(i, &c)| grid::get(&letters, pos + dir * i as i32) == Some(c))
                })
                .count()
        })
        .sum();
    Some(count)
}

/// Counts X-shaped `MAS` pairs: an `A` whose both diagonals read `MAS` or
/// `SAM`.
pub fn part_two(input: &str) -> Option<usize> {
    let letters = grid::parse(input);

    let mas = |a: Option<u8>, b: Option<u8>| {
        matches!((a, b), (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M')))
    };

    let count = grid::positions(&letters)
        .filter(|&pos| {
            grid::get(&letters, pos) == Some(b'A')
                && mas(
                    grid::get(&letters, pos + IVec2::new(-1, -1)),
                    grid::get(&letters, pos + IVec2::new(1, 1)),
                )
                && mas(
                    grid::get(&letters, pos + IVec2::new(1, -1)),
                    grid::get(&letters, pos + IVec2::new(-1, 1)),
                )
        })
        .count();
    Some(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = crate::read_file("examples", 4);
        assert_eq!(part_one(&input), Some(18));
    }

    #[test]
    fn test_part_two() {
        let input = crate::read_file("examples", 4);
        assert_eq!(part_two(&input), Some(9));
    }
}
