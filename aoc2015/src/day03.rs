//! Day 3: Perfectly Spherical Houses in a Vacuum.

use std::collections::HashSet;

use glam::IVec2;

fn moves(input: &str) -> impl Iterator<Item = IVec2> + '_ {
    input.trim().chars().map(|c| match c {
        '^' => IVec2::new(0, -1),
        'v' => IVec2::new(0, 1),
        '<' => IVec2::new(-1, 0),
        '>' => IVec2::new(1, 0),
        other => panic!("unexpected character {other:?}"),
    })
}

/// Counts the houses that receive at least one present from Santa alone.
pub fn part_one(input: &str) -> Option<usize> {
    let mut pos = IVec2::ZERO;
    let mut visited = HashSet::from([pos]);
    for delta in moves(input) {
        pos += delta;
        visited.insert(pos);
    }
    Some(visited.len())
}

/// Santa and Robo-Santa alternate instructions, both starting at the origin.
pub fn part_two(input: &str) -> Option<usize> {
    let mut santas = [IVec2::ZERO; 2];
    let mut visited = HashSet::from([IVec2::ZERO]);
    for (i, delta) in moves(input).enumerate() {
        let pos = &mut santas[i % 2];
        *pos += delta;
        visited.insert(*pos);
    }
    Some(visited.len())
}
