use crate::coord::Coordinate;

/// Estimate of the remaining cost from a coordinate to the goal.
///
/// Every step, diagonal or not, costs 1. Under that movement model only
/// [`Heuristic::Chebyshev`] never overestimates; [`Heuristic::Manhattan`] may,
/// so the paths it finds are valid but not always the shortest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heuristic {
    /// Manhattan distance (L1 norm): `|dx| + |dy|`.
    #[default]
    Manhattan,
    /// Chebyshev distance (L-infinity norm): `max(|dx|, |dy|)`.
    ///
    /// Admissible and consistent for uniform-cost 8-directional movement.
    Chebyshev,
}

impl Heuristic {
    /// Estimated cost from `from` to `goal`.
    pub fn estimate(self, from: Coordinate, goal: Coordinate) -> u32 {
        match self {
            Heuristic::Manhattan => manhattan_distance(from, goal),
            Heuristic::Chebyshev => chebyshev_distance(from, goal),
        }
    }
}

/// Calculates the Manhattan distance between two coordinates.
pub fn manhattan_distance(a: Coordinate, b: Coordinate) -> u32 {
    a.col.abs_diff(b.col) + a.row.abs_diff(b.row)
}

/// Calculates the Chebyshev distance between two coordinates.
pub fn chebyshev_distance(a: Coordinate, b: Coordinate) -> u32 {
    a.col.abs_diff(b.col).max(a.row.abs_diff(b.row))
}
