//! 2D grid storage and its read/write views.

use reef_core::{Cell, CellKind, Error, Position, Result};
use serde::{Deserialize, Serialize};

/// Read-only view of one generation. Species rules take the current
/// generation through this trait and can only inspect it.
pub trait GridView {
    /// Occupant tag at a position, `OutOfBounds` outside the grid.
    fn kind(&self, pos: Position) -> Result<CellKind>;

    /// Full cell state (tag plus counters) at a position.
    fn cell(&self, pos: Position) -> Result<Cell>;

    /// Total function; never fails.
    fn in_bounds(&self, pos: Position) -> bool;

    fn width(&self) -> i32;

    fn height(&self) -> i32;
}

/// Read/write view of the generation under construction.
pub trait GridViewMut: GridView {
    /// Overwrite a cell with a freshly spawned organism (counters zeroed).
    /// Unconditional; no prior-value check.
    fn set_kind(&mut self, pos: Position, kind: CellKind) -> Result<()>;

    /// Overwrite a cell carrying the organism's counters along.
    fn set_cell(&mut self, pos: Position, cell: Cell) -> Result<()>;
}

/// Rectangular grid of cells, row-major. Sole owner of its storage;
/// `Clone` is a deep copy with no aliasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid. Fails with `InvalidDimensions` unless both
    /// dimensions are at least 1.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            cells: vec![Cell::empty(); size],
        })
    }

    /// An all-empty grid with the same dimensions as this one.
    pub fn blank_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: vec![Cell::empty(); self.cells.len()],
        }
    }

    /// Iterator over all positions in scan order (row-major, y outer).
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width;
        (0..self.cells.len()).map(move |i| {
            let x = (i as i32) % width;
            let y = (i as i32) / width;
            Position::new(x, y)
        })
    }

    /// Iterator over all cells with positions, in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.positions().zip(self.cells.iter())
    }

    fn index(&self, pos: Position) -> Result<usize> {
        if !self.in_bounds(pos) {
            return Err(Error::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((pos.y * self.width + pos.x) as usize)
    }
}

impl GridView for Grid {
    fn kind(&self, pos: Position) -> Result<CellKind> {
        Ok(self.cells[self.index(pos)?].kind)
    }

    fn cell(&self, pos: Position) -> Result<Cell> {
        Ok(self.cells[self.index(pos)?])
    }

    fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }
}

impl GridViewMut for Grid {
    fn set_kind(&mut self, pos: Position, kind: CellKind) -> Result<()> {
        let index = self.index(pos)?;
        self.cells[index] = Cell::spawn(kind);
        Ok(())
    }

    fn set_cell(&mut self, pos: Position, cell: Cell) -> Result<()> {
        let index = self.index(pos)?;
        self.cells[index] = cell;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(10, 4).unwrap();
        assert_eq!(grid.width(), 10);
        assert_eq!(grid.height(), 4);
        assert!(grid.iter().all(|(_, cell)| cell.is_empty()));
    }

    #[test]
    fn test_invalid_dimensions() {
        for (w, h) in [(0, 10), (10, 0), (-1, 10), (10, -3), (0, 0)] {
            let err = Grid::new(w, h).unwrap_err();
            assert_eq!(err, Error::InvalidDimensions { width: w, height: h });
        }
    }

    #[test]
    fn test_set_then_get() {
        let mut grid = Grid::new(5, 5).unwrap();
        let pos = Position::new(2, 3);
        grid.set_kind(pos, CellKind::Algae).unwrap();
        assert_eq!(grid.kind(pos).unwrap(), CellKind::Algae);
        assert_eq!(grid.cell(pos).unwrap(), Cell::spawn(CellKind::Algae));
    }

    #[test]
    fn test_set_kind_resets_counters() {
        let mut grid = Grid::new(3, 3).unwrap();
        let pos = Position::new(1, 1);
        grid.set_cell(
            pos,
            Cell {
                kind: CellKind::Herbivore,
                age: 7,
                hunger: 4,
            },
        )
        .unwrap();
        grid.set_kind(pos, CellKind::Herbivore).unwrap();
        assert_eq!(grid.cell(pos).unwrap().age, 0);
        assert_eq!(grid.cell(pos).unwrap().hunger, 0);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = Grid::new(4, 4).unwrap();
        for pos in [
            Position::new(-1, 0),
            Position::new(0, -1),
            Position::new(4, 0),
            Position::new(0, 4),
        ] {
            assert!(!grid.in_bounds(pos));
            assert!(matches!(
                grid.kind(pos),
                Err(Error::OutOfBounds { .. })
            ));
            assert!(matches!(
                grid.set_kind(pos, CellKind::Algae),
                Err(Error::OutOfBounds { .. })
            ));
        }
    }

    #[test]
    fn test_clone_is_deep() {
        let mut grid = Grid::new(3, 3).unwrap();
        let copy = grid.clone();
        grid.set_kind(Position::new(0, 0), CellKind::Predator).unwrap();
        assert_eq!(copy.kind(Position::new(0, 0)).unwrap(), CellKind::Empty);
    }

    #[test]
    fn test_scan_order_is_row_major() {
        let grid = Grid::new(3, 2).unwrap();
        let order: Vec<_> = grid.positions().collect();
        assert_eq!(order[0], Position::new(0, 0));
        assert_eq!(order[1], Position::new(1, 0));
        assert_eq!(order[2], Position::new(2, 0));
        assert_eq!(order[3], Position::new(0, 1));
        assert_eq!(order.len(), 6);
    }

    #[test]
    fn test_blank_like() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set_kind(Position::new(1, 1), CellKind::Algae).unwrap();
        let blank = grid.blank_like();
        assert_eq!(blank.width(), 4);
        assert_eq!(blank.height(), 4);
        assert!(blank.iter().all(|(_, cell)| cell.is_empty()));
    }
}
