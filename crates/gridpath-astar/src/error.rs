//! This module defines the error types used by the `gridpath-astar` crate.

#![warn(missing_docs)]

use core::fmt;

use crate::coord::Coordinate;

/// Identifies which coordinate of an operation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The start coordinate of a search request.
    Start,
    /// The goal coordinate of a search request.
    Goal,
    /// A cell addressed directly through the grid accessors.
    Cell,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
            Endpoint::Cell => write!(f, "cell"),
        }
    }
}

/// Error type for grid construction and search requests.
///
/// Every variant describes an invalid argument: a search that simply finds no
/// path is not an error and is reported through an empty path instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PathError {
    /// Width or height is zero, or the cell count does not fit in memory.
    #[error("invalid grid dimensions: {0}")]
    InvalidDimensions(&'static str),

    /// A column has a different number of cells than the first one.
    #[error("grid is not rectangular: column {column} has {found} cells, expected {expected}")]
    RaggedGrid {
        /// Index of the offending column.
        column: usize,
        /// Number of cells found in that column.
        found: usize,
        /// Number of cells in the first column.
        expected: usize,
    },

    /// A grid description contains a character that is neither free nor blocked.
    #[error("invalid grid cell {symbol:?} at column {column}, row {row}")]
    InvalidCell {
        /// The unrecognised character.
        symbol: char,
        /// Column (line) index of the character.
        column: usize,
        /// Row (character) index of the character.
        row: usize,
    },

    /// A coordinate lies outside `[0, width) x [0, height)`.
    #[error("{endpoint} coordinate {coord} is outside the {width}x{height} grid")]
    OutOfBounds {
        /// Which coordinate was rejected.
        endpoint: Endpoint,
        /// The rejected coordinate.
        coord: Coordinate,
        /// Grid width (columns).
        width: usize,
        /// Grid height (rows).
        height: usize,
    },

    /// A search endpoint references an obstacle.
    #[error("{endpoint} coordinate {coord} is not traversable")]
    Blocked {
        /// Which coordinate was rejected.
        endpoint: Endpoint,
        /// The rejected coordinate.
        coord: Coordinate,
    },
}
