use anyhow::{Context, Result};
use gridpath_astar::{Coordinate, Grid};

use crate::settings::ScenarioSettings;

/// A walled pocket carved into an open 12x8 grid, one line per column.
///
/// Kept identical to `REFERENCE_MAP` in `crates/gridpath-astar/tests/common/mod.rs`.
const REFERENCE_MAP: [&str; 12] = [
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

/// A grid ready to be searched.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub grid: Grid,
    pub start: Coordinate,
    pub goal: Coordinate,
}

impl TryFrom<&ScenarioSettings> for Scenario {
    type Error = anyhow::Error;

    fn try_from(settings: &ScenarioSettings) -> Result<Self> {
        let grid = Grid::parse(&settings.map)
            .with_context(|| format!("Invalid map in scenario '{}'", settings.name))?;
        Ok(Scenario {
            name: settings.name.clone(),
            grid,
            start: settings.start,
            goal: settings.goal,
        })
    }
}

/// The two reference searches: into the pocket, and across to the far side.
pub fn builtin() -> Result<Vec<Scenario>> {
    let grid = Grid::parse(&REFERENCE_MAP).context("Invalid built-in reference map")?;
    let start = Coordinate::new(0, 4);
    Ok(vec![
        Scenario {
            name: "pocket".into(),
            grid: grid.clone(),
            start,
            goal: Coordinate::new(3, 2),
        },
        Scenario {
            name: "far-side".into(),
            grid,
            start,
            goal: Coordinate::new(7, 2),
        },
    ])
}
