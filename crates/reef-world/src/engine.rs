//! Tick engine: advances the grid one generation at a time.

use crate::census::Census;
use crate::grid::{Grid, GridView};
use crate::rules;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use reef_core::{CellKind, Result, RuleConfig};
use tracing::debug;

/// Drives the simulation forward one generation per [`advance`] call.
///
/// Strictly sequential by design: rules detect already-claimed cells by
/// reading the partially-built next grid, so the outcome depends on the
/// fixed row-major visitation order. Earlier-visited organisms win
/// contested destinations (first-mover advantage toward lower
/// coordinates), except that a later eater overwrites an earlier claim on
/// its prey's cell.
///
/// [`advance`]: TickEngine::advance
pub struct TickEngine {
    config: RuleConfig,
    rng: ChaCha8Rng,
    tick: u64,
}

impl TickEngine {
    /// Engine with unseeded (OS entropy) neighbor-choice randomness.
    pub fn new(config: RuleConfig) -> Self {
        Self::with_rng(config, ChaCha8Rng::from_entropy())
    }

    /// Engine with an injected random source, for deterministic tests.
    pub fn with_rng(config: RuleConfig, rng: ChaCha8Rng) -> Self {
        Self {
            config,
            rng,
            tick: 0,
        }
    }

    /// Ticks completed so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Advance one generation, consuming the current grid and returning its
    /// successor. The next grid starts all empty; every occupied cell is
    /// visited in scan order and dispatched to its species rule.
    pub fn advance(&mut self, grid: Grid) -> Result<Grid> {
        let mut next = grid.blank_like();

        for pos in grid.positions() {
            match grid.kind(pos)? {
                CellKind::Empty => {}
                CellKind::Algae => {
                    rules::algae(pos, &grid, &mut next, &self.config.algae, &mut self.rng)?
                }
                CellKind::Herbivore => {
                    rules::herbivore(pos, &grid, &mut next, &self.config.herbivore, &mut self.rng)?
                }
                CellKind::Predator => {
                    rules::predator(pos, &grid, &mut next, &self.config.predator, &mut self.rng)?
                }
            }
        }

        self.tick += 1;
        if self.tick % 100 == 0 {
            let census = Census::of(&next);
            debug!(
                event = "tick_census",
                tick = self.tick,
                algae = census.algae,
                herbivores = census.herbivores,
                predators = census.predators,
                "Generation advanced"
            );
        }

        Ok(next)
    }
}
