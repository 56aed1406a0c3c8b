//! Day 12: The N-Body Problem.

use aoc_core::helpers::parse;
use glam::IVec3;
use num_integer::Integer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Moon {
    pos: IVec3,
    vel: IVec3,
}

impl Moon {
    /// Potential times kinetic energy.
    fn energy(&self) -> i32 {
        let sum = |v: IVec3| {
            let v = v.abs();
            v.x + v.y + v.z
        };
        sum(self.pos) * sum(self.vel)
    }
}

mod parsing {
    use super::*;

    use combine as c;

    use c::{parser::combinator::StrLike, stream::Range, ParseError, Parser, RangeStream};

    impl Moon {
        pub(super) fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: RangeStream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
            Input::Range: Range,
            Input::Range: StrLike,
        {
            let integer = || {
                c::from_str(c::parser::range::recognize((
                    c::optional(c::token('-')),
                    c::parser::range::take_while1(|c: char| c.is_ascii_digit()),
                )))
            };
            let moon = (
                c::parser::char::string("<x="),
                integer(),
                c::parser::char::string(", y="),
                integer(),
                c::parser::char::string(", z="),
                integer(),
                c::token('>'),
            );

            moon.map(|(_, x, _, y, _, z, _)| Moon {
                pos: IVec3::new(x, y, z),
                vel: IVec3::ZERO,
            })
        }
    }
}

fn parse_moons(input: &str) -> Vec<Moon> {
    parse::lines(input, Moon::parser)
}

/// One tick: pairwise gravity adjusts velocities, then everything moves.
fn step(moons: &mut [Moon]) {
    for i in 0..moons.len() {
        for j in 0..moons.len() {
            let delta = moons[j].pos - moons[i].pos;
            moons[i].vel += delta.signum();
        }
    }
    for moon in moons.iter_mut() {
        moon.pos += moon.vel;
    }
}

fn total_energy(input: &str, steps: u32) -> i32 {
    let mut moons = parse_moons(input);
    for _ in 0..steps {
        step(&mut moons);
    }
    moons.iter().map(Moon::energy).sum()
}

pub fn part_one(input: &str) -> Option<i32> {
    Some(total_energy(input, 1000))
}

/// Steps until one axis returns to its initial positions with all
/// velocities zero. The axes are independent, so the first repeat of the
/// whole system is the LCM of the per-axis periods.
fn axis_period(initial: Vec<i32>) -> u64 {
    let n = initial.len();
    let mut pos = initial.clone();
    let mut vel = vec![0; n];
    let mut steps = 0u64;
    loop {
        for i in 0..n {
            for j in 0..n {
                vel[i] += (pos[j] - pos[i]).signum();
            }
        }
        for (p, v) in pos.iter_mut().zip(&vel) {
            *p += v;
        }
        steps += 1;
        if pos == initial && vel.iter().all(|&v| v == 0) {
            return steps;
        }
    }
}

pub fn part_two(input: &str) -> Option<u64> {
    let moons = parse_moons(input);
    let periods = [
        axis_period(moons.iter().map(|m| m.pos.x).collect()),
        axis_period(moons.iter().map(|m| m.pos.y).collect()),
        axis_period(moons.iter().map(|m| m.pos.z).collect()),
    ];
    Some(periods.into_iter().fold(1, |acc, period| acc.lcm(&period)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = indoc::indoc! {"
        <x=-1, y=0, z=2>
        <x=2, y=-10, z=-7>
        <x=4, y=-8, z=8>
        <x=3, y=5, z=-1>
    "};

    const LARGER: &str = indoc::indoc! {"
        <x=-8, y=-10, z=0>
        <x=5, y=5, z=10>
        <x=2, y=-7, z=3>
        <x=9, y=-8, z=-3>
    "};

    #[test]
    fn test_parsing() {
        let moons = parse_moons(EXAMPLE);
        assert_eq!(moons[1].pos, IVec3::new(2, -10, -7));
        assert_eq!(moons[1].vel, IVec3::ZERO);
    }

    #[test]
    fn test_part_one() {
        assert_eq!(total_energy(EXAMPLE, 10), 179);
        assert_eq!(total_energy(LARGER, 100), 1940);
    }

    #[test]
    fn test_part_two() {
        assert_eq!(part_two(EXAMPLE), Some(2772));
        assert_eq!(part_two(LARGER), Some(4686774924));
    }
}
