//! A* shortest-path search over static 2D boolean grids.
//!
//! Movement is 8-directional with a uniform step cost of 1, diagonals
//! included. The default heuristic is Manhattan distance; see [`Heuristic`]
//! for what that implies about path optimality.
//!
//! ```
//! use gridpath_astar::{Coordinate, Grid, PathFinder};
//!
//! let grid = Grid::parse(&["...", ".#.", "..."]).unwrap();
//! let path = PathFinder::default()
//!     .find(&grid, Coordinate::new(0, 0), Coordinate::new(2, 2))
//!     .unwrap();
//! assert_eq!(path.last(), Some(&Coordinate::new(2, 2)));
//! ```

pub mod astar;
pub mod coord;
pub mod error;
pub mod grid;
pub mod heuristic;

pub use astar::{PathFinder, PathResult, SearchConfig, SearchOutcome, SearchRequest};
pub use coord::{Coordinate, format_path};
pub use error::{Endpoint, PathError};
pub use grid::Grid;
pub use heuristic::Heuristic;
