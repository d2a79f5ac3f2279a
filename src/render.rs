use std::collections::HashSet;

use gridpath_astar::{Coordinate, Grid};

const START_SYMBOL: char = 'A';
const GOAL_SYMBOL: char = 'B';
const PATH_SYMBOL: char = 'x';
const FREE_SYMBOL: char = '.';
const BLOCKED_SYMBOL: char = '█';

/// Renders the grid as text, one line per column, marking start, goal and path cells.
pub fn render(grid: &Grid, start: Coordinate, goal: Coordinate, path: &[Coordinate]) -> String {
    let on_path: HashSet<Coordinate> = path.iter().copied().collect();
    let mut out = String::with_capacity(grid.width() * (grid.height() + 1));

    // Cells past i32::MAX have no Coordinate and cannot be addressed.
    for col in (0..grid.width()).map_while(|x| i32::try_from(x).ok()) {
        for row in (0..grid.height()).map_while(|y| i32::try_from(y).ok()) {
            let cell = Coordinate::new(col, row);
            let symbol = if cell == start {
                START_SYMBOL
            } else if cell == goal {
                GOAL_SYMBOL
            } else if !grid.is_traversable(cell) {
                BLOCKED_SYMBOL
            } else if on_path.contains(&cell) {
                PATH_SYMBOL
            } else {
                FREE_SYMBOL
            };
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}
