//! Entity counting and population snapshots.

use crate::grid::Grid;
use reef_core::CellKind;
use serde::{Deserialize, Serialize};

/// Number of cells holding `kind`. Full scan, pure.
pub fn count_cells(grid: &Grid, kind: CellKind) -> usize {
    grid.iter().filter(|(_, cell)| cell.kind == kind).count()
}

/// All four counts from a single scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    pub empty: usize,
    pub algae: usize,
    pub herbivores: usize,
    pub predators: usize,
}

impl Census {
    pub fn of(grid: &Grid) -> Self {
        let mut census = Self::default();
        for (_, cell) in grid.iter() {
            match cell.kind {
                CellKind::Empty => census.empty += 1,
                CellKind::Algae => census.algae += 1,
                CellKind::Herbivore => census.herbivores += 1,
                CellKind::Predator => census.predators += 1,
            }
        }
        census
    }

    /// Every cell holds exactly one kind, so the counts sum to the area.
    pub fn total(&self) -> usize {
        self.empty + self.algae + self.herbivores + self.predators
    }

    pub fn organisms(&self) -> usize {
        self.algae + self.herbivores + self.predators
    }
}
