//! Configuration types for the simulation.

use serde::{Deserialize, Serialize};

/// Life-cycle thresholds for one species.
///
/// `max_hunger` and `hunger_decrease` are ignored by algae, which never eat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesConfig {
    /// Organisms older than this die at the start of their turn
    pub max_age: u32,
    /// Organisms hungrier than this starve at the start of their turn
    pub max_hunger: u32,
    /// Minimum age at which an organism may spawn offspring
    pub reproduce_age: u32,
    /// How much a successful meal lowers hunger (floored at zero)
    pub hunger_decrease: u32,
}

impl SpeciesConfig {
    pub fn algae() -> Self {
        Self {
            max_age: 20,
            max_hunger: 0,
            reproduce_age: 5,
            hunger_decrease: 0,
        }
    }

    pub fn herbivore() -> Self {
        Self {
            max_age: 50,
            max_hunger: 10,
            reproduce_age: 10,
            hunger_decrease: 5,
        }
    }

    pub fn predator() -> Self {
        Self {
            max_age: 70,
            max_hunger: 15,
            reproduce_age: 15,
            hunger_decrease: 7,
        }
    }
}

/// Per-species rule parameters for the whole ecosystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    pub algae: SpeciesConfig,
    pub herbivore: SpeciesConfig,
    pub predator: SpeciesConfig,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            algae: SpeciesConfig::algae(),
            herbivore: SpeciesConfig::herbivore(),
            predator: SpeciesConfig::predator(),
        }
    }
}

/// World configuration parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Width of the world grid
    pub width: i32,
    /// Height of the world grid
    pub height: i32,
    /// Initial algae count
    pub initial_algae: usize,
    /// Initial herbivore count
    pub initial_herbivores: usize,
    /// Initial predator count
    pub initial_predators: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        // Default densities: 1/10, 1/50 and 1/150 of the cell count.
        let width = 80;
        let height = 40;
        let cells = (width * height) as usize;
        Self {
            width,
            height,
            initial_algae: cells / 10,
            initial_herbivores: cells / 50,
            initial_predators: cells / 150,
        }
    }
}

/// Simulation run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of ticks to run
    pub num_ticks: u64,
    /// Log a census snapshot every this many ticks (0 disables)
    pub census_interval: u64,
    /// World configuration
    pub world: WorldConfig,
    /// Species rule parameters
    pub rules: RuleConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_ticks: 1000,
            census_interval: 100,
            world: WorldConfig::default(),
            rules: RuleConfig::default(),
        }
    }
}
