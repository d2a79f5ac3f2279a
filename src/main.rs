mod render; // brings `render.rs` in as `crate::render`
mod scenarios; // brings `scenarios.rs` in as `crate::scenarios`
mod settings; // brings `settings.rs` in as `crate::settings`

use anyhow::{Context, Result};
use gridpath_astar::{PathFinder, SearchRequest, format_path};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use settings::DEFAULT_CONFIG_PATH;
use scenarios::Scenario;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let settings = settings::load_config(&config_path)
        .with_context(|| format!("Failed to load configuration from {config_path}"))?;

    let scenarios = if settings.scenarios.is_empty() {
        info!("No scenarios configured, running the built-in reference grids");
        scenarios::builtin()?
    } else {
        settings
            .scenarios
            .iter()
            .map(Scenario::try_from)
            .collect::<Result<Vec<_>>>()?
    };

    let finder = PathFinder::new(settings.search);
    for scenario in &scenarios {
        run(&finder, scenario)?;
    }
    Ok(())
}

fn run(finder: &PathFinder, scenario: &Scenario) -> Result<()> {
    let request = SearchRequest::new(&scenario.grid, scenario.start, scenario.goal)
        .with_context(|| format!("Invalid endpoints in scenario '{}'", scenario.name))?;
    let result = finder.search(&request);

    if result.is_success() {
        info!(scenario = %scenario.name, %result, "Search finished");
    } else {
        warn!(scenario = %scenario.name, %result, "No path found");
    }

    println!("Path = [{}]", format_path(&result.path));
    print!(
        "{}",
        render::render(request.grid(), request.start(), request.goal(), &result.path)
    );
    println!();
    Ok(())
}
