#![warn(missing_docs)]

use crate::coord::Coordinate;
use crate::error::{Endpoint, PathError};

/// Character marking a traversable cell in a text grid.
pub const FREE_SYMBOL: char = '.';
/// Characters accepted as obstacles in a text grid.
pub const BLOCKED_SYMBOLS: [char; 2] = ['#', '█'];

/// A static 2D occupancy grid addressed as `grid[x][y]`.
///
/// `x` is the column index in `[0, width)` and `y` the row index in
/// `[0, height)`. A `true` cell is traversable, a `false` cell is an obstacle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Number of columns
    width: usize,
    /// Number of rows
    height: usize,
    /// Column-major traversability flags
    data: Vec<bool>,
}

impl Grid {
    /// Creates a new Grid with every cell traversable.
    ///
    /// # Arguments
    /// * `width` - Number of columns
    /// * `height` - Number of rows
    ///
    /// # Returns
    /// * `Result<Self, PathError>` - The created Grid or an error if the dimensions are invalid
    pub fn new(width: usize, height: usize) -> Result<Self, PathError> {
        if width == 0 || height == 0 {
            return Err(PathError::InvalidDimensions("Width and height must be non-zero"));
        }
        let Some(len) = width.checked_mul(height) else {
            return Err(PathError::InvalidDimensions(
                "Grid dimensions too large, would cause overflow",
            ));
        };
        Ok(Grid {
            width,
            height,
            data: vec![true; len],
        })
    }

    /// Builds a Grid from nested columns, so that `columns[x][y]` becomes cell `(x, y)`.
    ///
    /// # Arguments
    /// * `columns` - One vector per column, all of the same non-zero length
    ///
    /// # Returns
    /// * `Result<Self, PathError>` - The Grid, or an error if it is empty or ragged
    pub fn from_columns(columns: Vec<Vec<bool>>) -> Result<Self, PathError> {
        let width = columns.len();
        let height = columns.first().map_or(0, Vec::len);
        let mut grid = Grid::new(width, height)?;

        for (x, column) in columns.into_iter().enumerate() {
            if column.len() != height {
                return Err(PathError::RaggedGrid {
                    column: x,
                    found: column.len(),
                    expected: height,
                });
            }
            let offset = x * height;
            grid.data[offset..offset + height].copy_from_slice(&column);
        }
        Ok(grid)
    }

    /// Parses a text grid where each line is one column and each character one row.
    ///
    /// `.` marks a free cell, `#` or `█` an obstacle. This is the same layout
    /// [`Grid::from_columns`] takes, so a literal reads the way it is rendered.
    ///
    /// # Arguments
    /// * `lines` - One string per column
    ///
    /// # Returns
    /// * `Result<Self, PathError>` - The Grid, or an error on an unknown symbol or uneven lines
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Self, PathError> {
        let columns = lines
            .iter()
            .enumerate()
            .map(|(x, line)| {
                line.as_ref()
                    .chars()
                    .enumerate()
                    .map(|(y, symbol)| match symbol {
                        FREE_SYMBOL => Ok(true),
                        s if BLOCKED_SYMBOLS.contains(&s) => Ok(false),
                        _ => Err(PathError::InvalidCell {
                            symbol,
                            column: x,
                            row: y,
                        }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::from_columns(columns)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Calculates the index in the data vector for a coordinate, if it is in bounds.
    fn index(&self, c: Coordinate) -> Option<usize> {
        let x = usize::try_from(c.col).ok()?;
        let y = usize::try_from(c.row).ok()?;
        (x < self.width && y < self.height).then_some(x * self.height + y)
    }

    /// Returns true if the coordinate lies inside the grid.
    pub fn contains(&self, c: Coordinate) -> bool {
        self.index(c).is_some()
    }

    /// Returns true if the coordinate is inside the grid and traversable.
    pub fn is_traversable(&self, c: Coordinate) -> bool {
        self.index(c).is_some_and(|i| self.data[i])
    }

    /// Gets the traversability flag of a cell.
    ///
    /// # Returns
    /// * `Result<bool, PathError>` - The flag or an error if out of bounds
    pub fn get(&self, c: Coordinate) -> Result<bool, PathError> {
        match self.index(c) {
            Some(i) => Ok(self.data[i]),
            None => Err(self.out_of_bounds(Endpoint::Cell, c)),
        }
    }

    /// Sets the traversability flag of a cell.
    ///
    /// # Returns
    /// * `Result<(), PathError>` - Success or an error if out of bounds
    pub fn set(&mut self, c: Coordinate, traversable: bool) -> Result<(), PathError> {
        match self.index(c) {
            Some(i) => {
                self.data[i] = traversable;
                Ok(())
            }
            None => Err(self.out_of_bounds(Endpoint::Cell, c)),
        }
    }

    /// Checks that a search endpoint is in bounds and traversable.
    pub(crate) fn check_endpoint(&self, endpoint: Endpoint, c: Coordinate) -> Result<(), PathError> {
        match self.index(c) {
            None => Err(self.out_of_bounds(endpoint, c)),
            Some(i) if !self.data[i] => Err(PathError::Blocked { endpoint, coord: c }),
            Some(_) => Ok(()),
        }
    }

    fn out_of_bounds(&self, endpoint: Endpoint, coord: Coordinate) -> PathError {
        PathError::OutOfBounds {
            endpoint,
            coord,
            width: self.width,
            height: self.height,
        }
    }
}
