//! Day 6: Universal Orbit Map.

use std::collections::HashMap;

use pathfinding::directed::bfs::bfs;

/// Maps each body to the body it orbits.
fn parse(input: &str) -> HashMap<&str, &str> {
    input
        .lines()
        .map(|line| {
            let (center, body) = line.split_once(')').unwrap();
            (body, center)
        })
        .collect()
}

/// Walks from `body` up through every body it directly or indirectly orbits.
fn orbit_chain<'a>(
    parents: &'a HashMap<&'a str, &'a str>,
    body: &'a str,
) -> impl Iterator<Item = &'a str> + 'a {
    std::iter::successors(parents.get(body).copied(), |body| {
        parents.get(body).copied()
    })
}

/// Total number of direct and indirect orbits.
pub fn part_one(input: &str) -> Option<usize> {
    let parents = parse(input);
    Some(
        parents
            .keys()
            .map(|&body| orbit_chain(&parents, body).count())
            .sum(),
    )
}

/// Minimum number of orbital transfers to move from the body YOU orbit to
/// the body SAN orbits.
pub fn part_two(input: &str) -> Option<usize> {
    let parents = parse(input);

    let mut neighbors: HashMap<&str, Vec<&str>> = HashMap::new();
    for (&body, &center) in &parents {
        neighbors.entry(body).or_default().push(center);
        neighbors.entry(center).or_default().push(body);
    }

    let start = *parents.get("YOU")?;
    let goal = *parents.get("SAN")?;
    let path = bfs(
        &start,
        |&body| neighbors.get(body).cloned().unwrap_or_default(),
        |&body| body == goal,
    )?;
    Some(path.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = crate::read_file("examples", 6);
        assert_eq!(part_one(&input), Some(42));
    }

    #[test]
    fn test_part_two() {
        let input = indoc::indoc! {"
            COM)B
            B)C
            C)D
            D)E
            E)F
            B)G
            G)H
            D)I
            E)J
            J)K
            K)L
            K)YOU
            I)SAN
        "};
        assert_eq!(part_one(input), Some(54));
        assert_eq!(part_two(input), Some(4));
    }
}
