use config::{Config, ConfigError, Environment, File, FileFormat};
use gridpath_astar::{Coordinate, SearchConfig};
use serde::Deserialize;
use tracing::{error, info};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Top-level settings for the demo driver.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub search: SearchConfig,
    /// Grids to solve. When empty the built-in reference scenarios run instead.
    pub scenarios: Vec<ScenarioSettings>,
}

/// One grid plus its endpoints, as written in the configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioSettings {
    pub name: String,
    /// One line per column, see `Grid::parse`.
    pub map: Vec<String>,
    pub start: Coordinate,
    pub goal: Coordinate,
}

/// Loads settings from `path` layered under `GRIDPATH__*` environment variables.
///
/// Only the default path may be missing; any other path must exist.
pub fn load_config(path: &str) -> Result<Settings, ConfigError> {
    info!("Attempting to load configuration from {}", path);

    let settings = Config::builder()
        .add_source(File::new(path, FileFormat::Toml).required(path != DEFAULT_CONFIG_PATH))
        .add_source(
            Environment::with_prefix("GRIDPATH")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .and_then(|config| config.try_deserialize::<Settings>());

    match settings {
        Ok(settings) => {
            info!(search = ?settings.search, scenarios = settings.scenarios.len(), "Successfully loaded configuration");
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}
