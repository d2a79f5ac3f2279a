use core::fmt;

/// A cell position on the grid, expressed as (column, row).
///
/// Equality and hashing are structural, so independently constructed
/// coordinates can be used interchangeably as map and set keys.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// The column index (`x`).
    pub col: i32,
    /// The row index (`y`).
    pub row: i32,
}

/// Offsets of the 8 surrounding cells: top row, middle row, bottom row,
/// each scanned from the lowest column.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl Coordinate {
    /// Creates a new `Coordinate`.
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Returns the 8 surrounding coordinates, without any bounds filtering.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .map(move |(dc, dr)| Coordinate::new(self.col + dc, self.row + dr))
    }

    /// Returns true if `other` is one 8-directional step away from `self`.
    #[must_use]
    pub fn is_adjacent(self, other: Coordinate) -> bool {
        self != other && self.col.abs_diff(other.col) <= 1 && self.row.abs_diff(other.row) <= 1
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((col, row): (i32, i32)) -> Self {
        Self::new(col, row)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

/// Joins a path into a single log line: `(0,3),(1,2),(2,2)`.
pub fn format_path(path: &[Coordinate]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
