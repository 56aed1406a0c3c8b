//! The many character-grid puzzles all want the same three things: parse the
//! input into a grid of bytes, index it with signed coordinates that may
//! wander off the edge, and step in compass directions.

use glam::IVec2;
use grid::Grid;
use itertools::Itertools;

pub const ORTHOGONAL: [IVec2; 4] = [
    IVec2::new(1, 0),
    IVec2::new(-1, 0),
    IVec2::new(0, 1),
    IVec2::new(0, -1),
];

pub const DIAGONAL: [IVec2; 4] = [
    IVec2::new(1, 1),
    IVec2::new(1, -1),
    IVec2::new(-1, 1),
    IVec2::new(-1, -1),
];

pub const ALL_DIRECTIONS: [IVec2; 8] = [
    IVec2::new(1, 0),
    IVec2::new(-1, 0),
    IVec2::new(0, 1),
    IVec2::new(0, -1),
    IVec2::new(1, 1),
    IVec2::new(1, -1),
    IVec2::new(-1, 1),
    IVec2::new(-1, -1),
];

/// Parses a rectangular block of ASCII into a grid of bytes. Panics if the
/// rows have different lengths.
pub fn parse(input: &str) -> Grid<u8> {
    let n_cols = input.lines().next().map_or(0, str::len);
    let mut grid = Grid::new(0, n_cols);
    for line in input.lines() {
        grid.push_row(line.bytes().collect());
    }
    grid
}

/// Returns the byte at `pos` (`x` = column, `y` = row), or `None` if `pos`
/// is outside the grid, including anywhere negative.
pub fn get(grid: &Grid<u8>, pos: IVec2) -> Option<u8> {
    let row: usize = pos.y.try_into().ok()?;
    let col: usize = pos.x.try_into().ok()?;
    grid.get(row, col).copied()
}

/// Every position of the grid, in row-major order.
pub fn positions(grid: &Grid<u8>) -> impl Iterator<Item = IVec2> {
    (0..grid.rows())
        .cartesian_product(0..grid.cols())
        .map(|(row, col)| IVec2::new(col as i32, row as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_get() {
        let grid = parse("ab\ncd");
        assert_eq!(get(&grid, IVec2::new(0, 0)), Some(b'a'));
        assert_eq!(get(&grid, IVec2::new(1, 1)), Some(b'd'));
        assert_eq!(get(&grid, IVec2::new(2, 0)), None);
        assert_eq!(get(&grid, IVec2::new(0, -1)), None);
    }

    #[test]
    fn positions_cover_the_grid() {
        let grid = parse("ab\ncd");
        assert_eq!(positions(&grid).count(), 4);
        assert!(positions(&grid).all(|pos| get(&grid, pos).is_some()));
    }
}
