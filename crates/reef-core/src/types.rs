//! Core type definitions for the simulation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What occupies a grid cell. Every cell holds exactly one of these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    #[default]
    Empty,
    Algae,
    Herbivore,
    Predator,
}

impl CellKind {
    pub fn is_empty(self) -> bool {
        self == CellKind::Empty
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellKind::Empty => "empty",
            CellKind::Algae => "algae",
            CellKind::Herbivore => "herbivore",
            CellKind::Predator => "predator",
        };
        write!(f, "{name}")
    }
}

/// 2D position in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The 8 positions at Chebyshev distance 1, unfiltered.
    /// Callers bounds-check against the grid; edges are hard boundaries,
    /// there is no wraparound.
    pub fn neighborhood(&self) -> impl Iterator<Item = Position> + '_ {
        (-1..=1).flat_map(move |dy| {
            (-1..=1).filter_map(move |dx| {
                if dx == 0 && dy == 0 {
                    None
                } else {
                    Some(self.offset(dx, dy))
                }
            })
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cell state: the occupant tag plus the occupant's counters.
///
/// Age and hunger travel with the organism when it moves and are zero for
/// `Empty` cells. Hunger is unused by algae and stays zero for them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellKind,
    pub age: u32,
    pub hunger: u32,
}

impl Cell {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A freshly spawned organism: counters at zero.
    pub fn spawn(kind: CellKind) -> Self {
        Self {
            kind,
            age: 0,
            hunger: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighborhood_size() {
        let pos = Position::new(5, 5);
        let neighbors: Vec<_> = pos.neighborhood().collect();
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&pos));
    }

    #[test]
    fn test_neighborhood_chebyshev_distance() {
        let pos = Position::new(0, 0);
        for n in pos.neighborhood() {
            assert!(n.x.abs().max(n.y.abs()) == 1);
        }
    }

    #[test]
    fn test_spawn_resets_counters() {
        let cell = Cell::spawn(CellKind::Herbivore);
        assert_eq!(cell.kind, CellKind::Herbivore);
        assert_eq!(cell.age, 0);
        assert_eq!(cell.hunger, 0);
    }

    #[test]
    fn test_empty_cell_default() {
        assert_eq!(Cell::default(), Cell::empty());
        assert!(Cell::empty().is_empty());
    }
}
