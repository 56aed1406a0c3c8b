//! Day 3: Mull It Over.

use aoc_core::helpers::parse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instruction {
    Mul(u64, u64),
    Do,
    Dont,
}

mod parsing {
    use super::*;

    use combine as c;

    use c::{parser::combinator::StrLike, stream::Range, ParseError, Parser, RangeStream};

    impl Instruction {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: RangeStream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
            Input::Range: Range,
            Input::Range: StrLike,
        {
            // Operands are 1-3 digits; a longer run is corruption, not a mul.
            let number = || {
                c::from_str(c::parser::repeat::count_min_max::<String, _, _>(
                    1,
                    3,
                    c::parser::char::digit(),
                ))
            };
            let mul = (
                c::parser::char::string("mul("),
                number(),
                c::token(','),
                number(),
                c::token(')'),
            )
                .map(|(_, a, _, b, _)| Instruction::Mul(a, b));

            c::choice((
                c::attempt(mul),
                c::attempt(c::parser::char::string("do()")).map(|_| Instruction::Do),
                c::attempt(c::parser::char::string("don't()")).map(|_| Instruction::Dont),
            ))
        }
    }

    /// Scans the whole corrupted memory, yielding the valid instructions and
    /// discarding everything else one character at a time.
    pub(super) fn scan(input: &str) -> Vec<Instruction> {
        parse::from_str(
            input,
            c::many::<Vec<Option<Instruction>>, _, _>(c::choice((
                c::attempt(Instruction::parser()).map(Some),
                c::parser::token::any().map(|_| None),
            ))),
        )
        .map(|instructions| instructions.into_iter().flatten().collect())
        .unwrap_or_else(|err| panic!("scan cannot fail, but: {err:?}"))
    }
}

pub fn part_one(input: &str) -> Option<u64> {
    Some(
        parsing::scan(input)
            .into_iter()
            .map(|instruction| match instruction {
                Instruction::Mul(a, b) => a * b,
                _ => 0,
            })
            .sum(),
    )
}

/// `do()`/`don't()` toggle whether subsequent muls count; enabled at start.
pub fn part_two(input: &str) -> Option<u64> {
    let (sum, _) = parsing::scan(input).into_iter().fold(
        (0, true),
        |(sum, enabled), instruction| match instruction {
            Instruction::Mul(a, b) if enabled => (sum + a * b, enabled),
            Instruction::Mul(..) => (sum, enabled),
            Instruction::Do => (sum, true),
            Instruction::Dont => (sum, false),
        },
    );
    Some(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan() {
        assert_eq!(
            parsing::scan("mul(2,4)mul(1234,5)don't()"),
            [Instruction::Mul(2, 4), Instruction::Dont]
        );
    }

    #[test]
    fn test_part_one() {
        let input = "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
        assert_eq!(part_one(input), Some(161));
    }

    #[test]
    fn test_part_two() {
        let input = "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
        assert_eq!(part_two(input), Some(48));
    }
}
