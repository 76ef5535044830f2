//! Initial population placement.

use crate::census::Census;
use crate::grid::{Grid, GridViewMut};
use rand::seq::SliceRandom;
use rand::Rng;
use reef_core::{CellKind, Error, Position, Result, WorldConfig};
use tracing::info;

/// Requested organism counts for [`random_fill`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedCounts {
    pub algae: usize,
    pub herbivores: usize,
    pub predators: usize,
}

impl SeedCounts {
    pub fn total(&self) -> usize {
        self.algae + self.herbivores + self.predators
    }
}

impl From<&WorldConfig> for SeedCounts {
    fn from(config: &WorldConfig) -> Self {
        Self {
            algae: config.initial_algae,
            herbivores: config.initial_herbivores,
            predators: config.initial_predators,
        }
    }
}

/// Place the requested organisms uniformly at random on distinct empty
/// cells, counters fresh. Fails with `Overcrowded` when the request does
/// not fit in the currently empty cells; the grid is left untouched then.
pub fn random_fill<R: Rng>(grid: &mut Grid, counts: SeedCounts, rng: &mut R) -> Result<()> {
    let mut open: Vec<Position> = grid
        .iter()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(pos, _)| pos)
        .collect();

    if counts.total() > open.len() {
        return Err(Error::Overcrowded {
            requested: counts.total(),
            available: open.len(),
        });
    }

    open.shuffle(rng);
    let mut open = open.into_iter();
    for (count, kind) in [
        (counts.algae, CellKind::Algae),
        (counts.herbivores, CellKind::Herbivore),
        (counts.predators, CellKind::Predator),
    ] {
        for _ in 0..count {
            // Capacity was checked up front, so the iterator cannot run dry.
            if let Some(pos) = open.next() {
                grid.set_kind(pos, kind)?;
            }
        }
    }

    let census = Census::of(grid);
    info!(
        event = "grid_seeded",
        algae = census.algae,
        herbivores = census.herbivores,
        predators = census.predators,
        "Initial population placed"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::census::count_cells;
    use crate::grid::GridView;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_fill_places_exact_counts() {
        let mut grid = Grid::new(20, 20).unwrap();
        let counts = SeedCounts {
            algae: 40,
            herbivores: 8,
            predators: 3,
        };
        random_fill(&mut grid, counts, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();

        assert_eq!(count_cells(&grid, CellKind::Algae), 40);
        assert_eq!(count_cells(&grid, CellKind::Herbivore), 8);
        assert_eq!(count_cells(&grid, CellKind::Predator), 3);
        assert_eq!(count_cells(&grid, CellKind::Empty), 400 - 51);
    }

    #[test]
    fn test_fill_only_uses_empty_cells() {
        let mut grid = Grid::new(3, 3).unwrap();
        let reserved = Position::new(1, 1);
        grid.set_kind(reserved, CellKind::Predator).unwrap();

        let counts = SeedCounts {
            algae: 8,
            ..Default::default()
        };
        random_fill(&mut grid, counts, &mut ChaCha8Rng::seed_from_u64(2)).unwrap();

        assert_eq!(grid.kind(reserved).unwrap(), CellKind::Predator);
        assert_eq!(count_cells(&grid, CellKind::Algae), 8);
    }

    #[test]
    fn test_overfull_request_fails_without_mutation() {
        let mut grid = Grid::new(2, 2).unwrap();
        let counts = SeedCounts {
            algae: 3,
            herbivores: 2,
            predators: 0,
        };
        let err = random_fill(&mut grid, counts, &mut ChaCha8Rng::seed_from_u64(3)).unwrap_err();

        assert_eq!(
            err,
            Error::Overcrowded {
                requested: 5,
                available: 4
            }
        );
        assert_eq!(count_cells(&grid, CellKind::Empty), 4);
    }

    #[test]
    fn test_world_config_counts() {
        let config = WorldConfig::default();
        let counts = SeedCounts::from(&config);
        assert_eq!(counts.algae, 320);
        assert_eq!(counts.herbivores, 64);
        assert_eq!(counts.predators, 21);
    }
}
