//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use gridpath_astar::{Coordinate, Grid};

/// The reference layout: a walled pocket carved into an otherwise open 12x8 grid.
///
/// Kept identical to the built-in demo map in `src/scenarios.rs`.
pub const REFERENCE_MAP: [&str; 12] = [
    "........",
    ".#......",
    ".#####..",
    ".#.#.#..",
    ".#.#....",
    ".#......",
    ".#####..",
    "........",
    "........",
    "........",
    "........",
    "........",
];

pub fn reference_grid() -> Grid {
    Grid::parse(&REFERENCE_MAP).expect("reference map is well formed")
}

/// Breadth-first distance over the same 8-directional moves the path finder uses.
pub fn bfs_distance(grid: &Grid, start: Coordinate, goal: Coordinate) -> Option<usize> {
    let mut dist = HashMap::from([(start, 0usize)]);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        let d = dist[&current];
        if current == goal {
            return Some(d);
        }
        for next in current.neighbors() {
            if grid.is_traversable(next) && !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

/// Asserts the path is a connected walk of traversable cells from `start` to `goal`.
pub fn assert_valid_path(grid: &Grid, start: Coordinate, goal: Coordinate, path: &[Coordinate]) {
    let mut previous = start;
    for &step in path {
        assert!(
            previous.is_adjacent(step),
            "{previous} -> {step} is not a single 8-directional step"
        );
        assert!(grid.is_traversable(step), "{step} is not traversable");
        previous = step;
    }
    if start != goal {
        assert_eq!(path.last(), Some(&goal), "path must end at the goal");
    }
    assert!(!path.contains(&start), "path must not revisit the start");
}
