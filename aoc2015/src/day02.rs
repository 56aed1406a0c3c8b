//! Day 2: I Was Told There Would Be No Math.

use itertools::Itertools;

#[derive(Debug, Clone, Copy)]
struct Present {
    length: u32,
    width: u32,
    height: u32,
}

impl Present {
    fn parse(line: &str) -> Self {
        let (length, width, height) = line
            .split('x')
            .map(|n| n.parse().unwrap())
            .collect_tuple()
            .unwrap();
        Self {
            length,
            width,
            height,
        }
    }

    fn side_areas(&self) -> [u32; 3] {
        [
            self.length * self.width,
            self.width * self.height,
            self.height * self.length,
        ]
    }

    /// Surface area plus slack: the area of the smallest side.
    fn paper(&self) -> u32 {
        let sides = self.side_areas();
        let slack = sides.into_iter().min().unwrap();
        2 * sides.into_iter().sum::<u32>() + slack
    }

    /// The smallest perimeter of any face, plus the volume for the bow.
    fn ribbon(&self) -> u32 {
        let perimeters = [
            2 * (self.length + self.width),
            2 * (self.width + self.height),
            2 * (self.height + self.length),
        ];
        perimeters.into_iter().min().unwrap() + self.length * self.width * self.height
    }
}

pub fn part_one(input: &str) -> Option<u32> {
    Some(input.lines().map(|line| Present::parse(line).paper()).sum())
}

pub fn part_two(input: &str) -> Option<u32> {
    Some(input.lines().map(|line| Present::parse(line).ribbon()).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        assert_eq!(part_one("2x3x4"), Some(58));
        assert_eq!(part_one("1x1x10"), Some(43));
        assert_eq!(part_one("2x3x4\n1x1x10"), Some(101));
    }

    #[test]
    fn test_part_two() {
        assert_eq!(part_two("2x3x4"), Some(34));
        assert_eq!(part_two("1x1x10"), Some(14));
    }
}
