/*

A* = f(n) = g(n) + h(n)

Where:
    n = a cell of the grid
    g(n) = cost of the cheapest known path from start to n
    h(n) = estimated cost from n to the goal (heuristic)
    f(n) = total estimated cost of the cheapest solution through n

Every step to one of the 8 surrounding cells costs 1.

*/

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;

use tracing::{debug, trace};

use crate::coord::Coordinate;
use crate::error::{Endpoint, PathError};
use crate::grid::Grid;
use crate::heuristic::Heuristic;

/// Tuning knobs for a [`PathFinder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Heuristic used to rank the frontier.
    pub heuristic: Heuristic,
    /// Maximum number of nodes to expand before giving up. `None` is unlimited.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Sets the heuristic.
    #[must_use]
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Caps the number of expanded nodes.
    #[must_use]
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }
}

/// A validated search: both endpoints are inside `grid` and traversable.
#[derive(Debug, Clone, Copy)]
pub struct SearchRequest<'a> {
    grid: &'a Grid,
    start: Coordinate,
    goal: Coordinate,
}

impl<'a> SearchRequest<'a> {
    /// Creates a request, rejecting endpoints that are out of bounds or blocked.
    pub fn new(grid: &'a Grid, start: Coordinate, goal: Coordinate) -> Result<Self, PathError> {
        grid.check_endpoint(Endpoint::Start, start)?;
        grid.check_endpoint(Endpoint::Goal, goal)?;
        Ok(Self { grid, start, goal })
    }

    /// The grid being searched.
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// Where the search starts. Never part of the returned path.
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// Where the search ends. Last element of any non-empty path.
    pub fn goal(&self) -> Coordinate {
        self.goal
    }
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// The goal was reached.
    Found,
    /// The open set emptied without reaching the goal.
    Unreachable,
    /// The expansion budget ran out first.
    BudgetExhausted,
}

/// Represents the result of an A* search with metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    /// Steps from start to goal: the start itself is excluded, the goal included.
    /// Empty when start equals goal or when no path was found.
    pub path: Vec<Coordinate>,
    /// How the search ended.
    pub outcome: SearchOutcome,
    /// Cost of the path, if one was found.
    pub total_cost: Option<u32>,
    /// The number of nodes expanded during the search.
    pub nodes_explored: usize,
}

impl PathResult {
    /// Creates a new PathResult for a successful search.
    pub fn success(path: Vec<Coordinate>, total_cost: u32, nodes_explored: usize) -> Self {
        Self {
            path,
            outcome: SearchOutcome::Found,
            total_cost: Some(total_cost),
            nodes_explored,
        }
    }

    /// Creates a new PathResult for a search that did not reach the goal.
    pub fn failure(outcome: SearchOutcome, nodes_explored: usize) -> Self {
        Self {
            path: Vec::new(),
            outcome,
            total_cost: None,
            nodes_explored,
        }
    }

    /// Returns true if the goal was reached.
    pub fn is_success(&self) -> bool {
        self.outcome == SearchOutcome::Found
    }

    /// Returns the path, empty unless the goal was reached.
    pub fn into_path(self) -> Vec<Coordinate> {
        self.path
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.total_cost {
            Some(cost) if self.is_success() => write!(
                f,
                "PathResult {{ success: true, path_length: {}, total_cost: {}, nodes_explored: {} }}",
                self.path.len(),
                cost,
                self.nodes_explored
            ),
            _ => write!(
                f,
                "PathResult {{ success: false, outcome: {:?}, nodes_explored: {} }}",
                self.outcome, self.nodes_explored
            ),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
struct FrontierEntry {
    f: u32,
    coord: Coordinate,
}

// BinaryHeap is a max-heap, so every comparison is flipped: the lowest f
// wins, ties go to the lowest row, then the lowest column.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.coord.row.cmp(&self.coord.row))
            .then_with(|| other.coord.col.cmp(&self.coord.col))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reconstructs the path by walking `came_from` links back from the goal.
///
/// The walk stops at the first coordinate without a link (the start), which
/// is therefore not part of the result.
fn reconstruct_path(
    came_from: &HashMap<Coordinate, Coordinate>,
    mut current: Coordinate,
) -> Vec<Coordinate> {
    let mut path = Vec::new();
    while let Some(&previous) = came_from.get(&current) {
        path.push(current);
        current = previous;
    }
    path.reverse();
    path
}

/// A* path finder over a [`Grid`].
///
/// The finder only holds its configuration. All search state lives inside a
/// single call, so one instance can serve any number of searches, including
/// concurrent ones over a shared grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathFinder {
    config: SearchConfig,
}

impl PathFinder {
    /// Creates a path finder with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Validates the endpoints and returns the path from `start` to `goal`.
    ///
    /// # Returns
    /// * `Result<Vec<Coordinate>, PathError>` - The path (possibly empty) or an error if
    ///   either endpoint is out of bounds or blocked
    pub fn find(
        &self,
        grid: &Grid,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<Vec<Coordinate>, PathError> {
        let request = SearchRequest::new(grid, start, goal)?;
        Ok(self.find_path(&request))
    }

    /// Returns the path from the request's start to its goal.
    ///
    /// The path excludes the start and ends with the goal. It is empty when
    /// start equals goal, or when the goal cannot be reached.
    pub fn find_path(&self, request: &SearchRequest<'_>) -> Vec<Coordinate> {
        self.search(request).into_path()
    }

    /// Runs the search and returns the path together with search metadata.
    pub fn search(&self, request: &SearchRequest<'_>) -> PathResult {
        let SearchRequest { grid, start, goal } = *request;
        let heuristic = self.config.heuristic;
        debug!(%start, %goal, ?heuristic, "Starting A* search");

        let mut open_set: HashSet<Coordinate> = HashSet::new();
        let mut closed_set: HashSet<Coordinate> = HashSet::new();
        let mut came_from: HashMap<Coordinate, Coordinate> = HashMap::new();
        let mut g_score: HashMap<Coordinate, u32> = HashMap::new();
        let mut f_score: HashMap<Coordinate, u32> = HashMap::new();
        let mut frontier = BinaryHeap::new();

        let start_f = heuristic.estimate(start, goal);
        open_set.insert(start);
        g_score.insert(start, 0);
        f_score.insert(start, start_f);
        frontier.push(FrontierEntry {
            f: start_f,
            coord: start,
        });

        let mut nodes_explored = 0;

        while let Some(FrontierEntry { f, coord: current }) = frontier.pop() {
            // Entries left behind by a later improvement, or by an expansion.
            if !open_set.contains(&current) || f_score.get(&current) != Some(&f) {
                continue;
            }

            if self
                .config
                .max_expansions
                .is_some_and(|limit| nodes_explored >= limit)
            {
                debug!(nodes_explored, "A* search stopped: expansion budget exhausted");
                return PathResult::failure(SearchOutcome::BudgetExhausted, nodes_explored);
            }
            nodes_explored += 1;
            trace!(%current, f, "Expanding node");

            let current_g = g_score.get(&current).copied().unwrap_or_default();
            if current == goal {
                let path = reconstruct_path(&came_from, current);
                debug!(path_length = path.len(), nodes_explored, "A* search found a path");
                return PathResult::success(path, current_g, nodes_explored);
            }

            open_set.remove(&current);
            closed_set.insert(current);

            for neighbor in current.neighbors() {
                if !grid.is_traversable(neighbor) || closed_set.contains(&neighbor) {
                    continue;
                }

                let projected_g = current_g + 1;
                let discovered = open_set.insert(neighbor);
                if !discovered
                    && projected_g >= g_score.get(&neighbor).copied().unwrap_or(u32::MAX)
                {
                    continue;
                }

                let neighbor_f = projected_g + heuristic.estimate(neighbor, goal);
                came_from.insert(neighbor, current);
                g_score.insert(neighbor, projected_g);
                f_score.insert(neighbor, neighbor_f);
                frontier.push(FrontierEntry {
                    f: neighbor_f,
                    coord: neighbor,
                });
            }
        }

        debug!(nodes_explored, "A* search exhausted the open set without reaching the goal");
        PathResult::failure(SearchOutcome::Unreachable, nodes_explored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_grid(width: usize, height: usize) -> Grid {
        Grid::new(width, height).unwrap()
    }

    fn search(grid: &Grid, start: (i32, i32), goal: (i32, i32)) -> PathResult {
        let request = SearchRequest::new(grid, start.into(), goal.into()).unwrap();
        PathFinder::default().search(&request)
    }

    #[test]
    fn test_astar_diagonal_open_grid() {
        let grid = open_grid(3, 3);
        let result = search(&grid, (0, 0), (2, 2));

        assert!(result.is_success());
        assert_eq!(result.path, vec![Coordinate::new(1, 1), Coordinate::new(2, 2)]);
        assert_eq!(result.total_cost, Some(2));
        assert_eq!(result.nodes_explored, 3);
    }

    #[test]
    fn test_astar_straight_corridor() {
        let grid = open_grid(5, 1);
        let result = search(&grid, (0, 0), (4, 0));

        let expected: Vec<_> = (1..=4).map(|col| Coordinate::new(col, 0)).collect();
        assert_eq!(result.path, expected);
        assert_eq!(result.total_cost, Some(4));
    }

    #[test]
    fn test_astar_start_equals_goal() {
        let grid = open_grid(3, 3);
        let result = search(&grid, (1, 1), (1, 1));

        assert!(result.is_success(), "Reaching the goal immediately is a success");
        assert!(result.path.is_empty(), "No links exist to reconstruct");
        assert_eq!(result.total_cost, Some(0));
        assert_eq!(result.nodes_explored, 1);
    }

    #[test]
    fn test_astar_enclosed_goal() {
        let mut grid = open_grid(5, 5);
        for col in 1..=3 {
            for row in 1..=3 {
                if (col, row) != (2, 2) {
                    grid.set(Coordinate::new(col, row), false).unwrap();
                }
            }
        }

        let result = search(&grid, (0, 0), (2, 2));
        assert_eq!(result.outcome, SearchOutcome::Unreachable);
        assert!(result.path.is_empty());
        assert_eq!(result.total_cost, None);
        // Every free cell outside the ring gets expanded exactly once.
        assert_eq!(result.nodes_explored, 16);
    }

    #[test]
    fn test_astar_diagonal_between_blocked_corners() {
        let grid = Grid::from_columns(vec![vec![true, false], vec![false, true]]).unwrap();
        let result = search(&grid, (0, 0), (1, 1));
        assert_eq!(result.path, vec![Coordinate::new(1, 1)]);
    }

    #[test]
    fn test_astar_tie_break_prefers_lower_row() {
        let mut grid = open_grid(3, 3);
        grid.set(Coordinate::new(1, 1), false).unwrap();

        // (1,0) and (1,2) tie on f; the lower row is expanded first.
        let result = search(&grid, (0, 1), (2, 1));
        assert_eq!(result.path, vec![Coordinate::new(1, 0), Coordinate::new(2, 1)]);
    }

    #[test]
    fn test_astar_is_deterministic() {
        let grid = Grid::parse(&["......", ".####.", "......", "..#...", "......"]).unwrap();
        let first = search(&grid, (0, 0), (4, 5));
        for _ in 0..5 {
            assert_eq!(search(&grid, (0, 0), (4, 5)), first);
        }
    }

    #[test]
    fn test_expansion_budget() {
        let grid = open_grid(3, 3);
        let request = SearchRequest::new(&grid, Coordinate::new(0, 0), Coordinate::new(2, 2)).unwrap();

        let none = PathFinder::new(SearchConfig::default().with_max_expansions(0)).search(&request);
        assert_eq!(none.outcome, SearchOutcome::BudgetExhausted);
        assert!(none.path.is_empty());
        assert_eq!(none.nodes_explored, 0);

        let short = PathFinder::new(SearchConfig::default().with_max_expansions(2)).search(&request);
        assert_eq!(short.outcome, SearchOutcome::BudgetExhausted);
        assert_eq!(short.nodes_explored, 2);

        let enough = PathFinder::new(SearchConfig::default().with_max_expansions(3)).search(&request);
        assert_eq!(enough, PathFinder::default().search(&request));
    }

    #[test]
    fn test_request_validation() {
        let mut grid = open_grid(4, 4);
        grid.set(Coordinate::new(3, 3), false).unwrap();

        assert!(matches!(
            SearchRequest::new(&grid, Coordinate::new(-1, 0), Coordinate::new(1, 1)),
            Err(PathError::OutOfBounds {
                endpoint: Endpoint::Start,
                ..
            })
        ));
        assert!(matches!(
            SearchRequest::new(&grid, Coordinate::new(0, 0), Coordinate::new(0, 4)),
            Err(PathError::OutOfBounds {
                endpoint: Endpoint::Goal,
                ..
            })
        ));
        assert_eq!(
            PathFinder::default().find(&grid, Coordinate::new(0, 0), Coordinate::new(3, 3)),
            Err(PathError::Blocked {
                endpoint: Endpoint::Goal,
                coord: Coordinate::new(3, 3)
            })
        );
    }

    #[test]
    fn test_concurrent_searches_share_grid() {
        let grid = Grid::parse(&["......", ".####.", "......", "..#...", "......"]).unwrap();
        let finder = PathFinder::default();
        let expected = finder
            .find(&grid, Coordinate::new(0, 0), Coordinate::new(4, 5))
            .unwrap();

        let (finder, grid) = (&finder, &grid);
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(move || {
                        finder
                            .find(grid, Coordinate::new(0, 0), Coordinate::new(4, 5))
                            .unwrap()
                    })
                })
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn test_path_result_display() {
        let grid = open_grid(3, 3);
        let found = search(&grid, (0, 0), (2, 2));
        let display_str = format!("{}", found);
        assert!(display_str.contains("success: true"));
        assert!(display_str.contains("path_length: 2"));

        let failed = PathResult::failure(SearchOutcome::Unreachable, 7);
        let display_str = format!("{}", failed);
        assert!(display_str.contains("success: false"));
        assert!(display_str.contains("Unreachable"));
    }
}
