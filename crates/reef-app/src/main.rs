//! Headless simulation runner.
//!
//! Seeds a world, advances it for a configured number of ticks while
//! logging census snapshots, and prints the final census as JSON.

use anyhow::{Context, Result};
use reef_core::SimConfig;
use reef_world::{random_fill, Census, Grid, SeedCounts, TickEngine};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config()?;
    info!(
        width = config.world.width,
        height = config.world.height,
        num_ticks = config.num_ticks,
        "Starting reef simulation"
    );

    let mut grid = Grid::new(config.world.width, config.world.height)?;
    let mut rng = rand::thread_rng();
    random_fill(&mut grid, SeedCounts::from(&config.world), &mut rng)?;

    let mut engine = TickEngine::new(config.rules);
    for tick in 1..=config.num_ticks {
        grid = engine.advance(grid)?;

        if config.census_interval > 0 && tick % config.census_interval == 0 {
            let census = Census::of(&grid);
            info!(
                event = "census",
                tick,
                algae = census.algae,
                herbivores = census.herbivores,
                predators = census.predators,
                "Census snapshot"
            );
            if census.organisms() == 0 {
                info!(tick, "World is empty, stopping early");
                break;
            }
        }
    }

    let report = Census::of(&grid);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Environment-variable overrides on top of the built-in defaults.
fn load_config() -> Result<SimConfig> {
    let mut config = SimConfig::default();
    if let Some(ticks) = env_var("REEF_TICKS")? {
        config.num_ticks = ticks;
    }
    if let Some(interval) = env_var("REEF_CENSUS_INTERVAL")? {
        config.census_interval = interval;
    }
    if let Some(width) = env_var("REEF_WIDTH")? {
        config.world.width = width;
    }
    if let Some(height) = env_var("REEF_HEIGHT")? {
        config.world.height = height;
    }
    // Initial populations scale with the area when dimensions are overridden.
    let cells = (config.world.width.max(0) as usize) * (config.world.height.max(0) as usize);
    config.world.initial_algae = cells / 10;
    config.world.initial_herbivores = cells / 50;
    config.world.initial_predators = cells / 150;
    Ok(config)
}

fn env_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(value) => {
            let parsed = value
                .parse::<T>()
                .with_context(|| format!("invalid {name}: {value:?}"))?;
            Ok(Some(parsed))
        }
        Err(_) => Ok(None),
    }
}
