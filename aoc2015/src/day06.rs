//! Day 6: Probably a Fire Hazard.

use aoc_core::helpers::parse;
use bitvec::prelude::*;
use grid::Grid;

const GRID_SIZE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    TurnOn,
    TurnOff,
    Toggle,
}

#[derive(Debug, Clone, Copy)]
struct Instruction {
    action: Action,
    from: (usize, usize),
    to: (usize, usize),
}

impl Instruction {
    /// Row-major indices of every light in the instruction's rectangle.
    fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (x0, y0) = self.from;
        let (x1, y1) = self.to;
        (y0..=y1).flat_map(move |y| (x0..=x1).map(move |x| (y, x)))
    }
}

mod parsing {
    use super::*;

    use combine as c;

    use c::{parser::combinator::StrLike, stream::Range, ParseError, Parser, RangeStream};

    impl Action {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: RangeStream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
            Input::Range: Range,
            Input::Range: StrLike,
        {
            c::choice((
                c::attempt(c::parser::char::string("turn on")).map(|_| Action::TurnOn),
                c::attempt(c::parser::char::string("turn off")).map(|_| Action::TurnOff),
                c::parser::char::string("toggle").map(|_| Action::Toggle),
            ))
        }
    }

    impl Instruction {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: RangeStream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
            Input::Range: Range,
            Input::Range: StrLike,
        {
            let integer =
                || c::from_str(c::parser::range::take_while1(|c: char| c.is_ascii_digit()));
            let corner = || (integer(), c::token(','), integer()).map(|(x, _, y)| (x, y));

            (
                Action::parser(),
                c::token(' '),
                corner(),
                c::parser::char::string(" through "),
                corner(),
            )
                .map(|(action, _, from, _, to)| Instruction { action, from, to })
        }
    }
}

/// Lights are either on or off; counts how many end up on.
pub fn part_one(input: &str) -> Option<usize> {
    let mut lights = bitvec![0; GRID_SIZE * GRID_SIZE];
    for instruction in parse::lines(input, Instruction::parser) {
        for (row, col) in instruction.cells() {
            let index = row * GRID_SIZE + col;
            match instruction.action {
                Action::TurnOn => lights.set(index, true),
                Action::TurnOff => lights.set(index, false),
                Action::Toggle => {
                    let mut bit = lights.get_mut(index).unwrap();
                    *bit = !*bit;
                }
            }
        }
    }
    Some(lights.count_ones())
}

/// Lights have brightness; returns the total after all instructions.
pub fn part_two(input: &str) -> Option<u32> {
    let mut lights: Grid<u32> = Grid::init(GRID_SIZE, GRID_SIZE, 0);
    for instruction in parse::lines(input, Instruction::parser) {
        for (row, col) in instruction.cells() {
            let brightness = lights.get_mut(row, col).unwrap();
            match instruction.action {
                Action::TurnOn => *brightness += 1,
                Action::TurnOff => *brightness = brightness.saturating_sub(1),
                Action::Toggle => *brightness += 2,
            }
        }
    }
    Some(lights.iter().sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsing() {
        let instruction =
            parse::from_str("turn off 660,55 through 986,197", Instruction::parser()).unwrap();
        assert_eq!(instruction.action, Action::TurnOff);
        assert_eq!(instruction.from, (660, 55));
        assert_eq!(instruction.to, (986, 197));
    }

    #[test]
    fn test_part_one() {
        assert_eq!(part_one("turn on 0,0 through 999,999"), Some(1_000_000));
        assert_eq!(part_one("toggle 0,0 through 999,0"), Some(1000));
        assert_eq!(
            part_one("turn on 0,0 through 999,999\nturn off 499,499 through 500,500"),
            Some(999_996)
        );
    }

    #[test]
    fn test_part_two() {
        assert_eq!(part_two("turn on 0,0 through 0,0"), Some(1));
        assert_eq!(part_two("toggle 0,0 through 999,999"), Some(2_000_000));
    }
}
