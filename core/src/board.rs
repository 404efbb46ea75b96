use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// One grid position.
///
/// A cell is never both `revealed` and `flagged`; `adjacent_mines` only carries meaning once a safe cell has been
/// revealed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub revealed: bool,
    pub flagged: bool,
    pub is_mine: bool,
    pub adjacent_mines: u8,
}

impl Cell {
    /// Whether a reveal may open this cell.
    pub const fn is_openable(self) -> bool {
        !self.revealed && !self.flagged
    }
}

/// Fixed-size rectangular grid of [`Cell`]s, created once per game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn new(rows: Coord, cols: Coord) -> Self {
        Self {
            cells: Array2::default((rows, cols).to_nd_index()),
        }
    }

    /// Board with mines at exactly the given coordinates, duplicates are merged.
    pub fn with_mines(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::new(size.0, size.1);

        for &coords in mine_coords {
            if !board.in_bounds(coords) {
                return Err(GameError::InvalidCoords);
            }
            board[coords].is_mine = true;
        }

        Ok(board)
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        // dimensions always come from a Coord2
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.size().area()
    }

    pub fn in_bounds(&self, (row, col): Coord2) -> bool {
        let (rows, cols) = self.size();
        row < rows && col < cols
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.in_bounds(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    /// In-bounds Moore neighbourhood of `coords`, up to 8 cells, never `coords` itself.
    pub fn iter_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        let (row, col) = coords;
        let (last_row, last_col) = (self.rows().saturating_sub(1), self.cols().saturating_sub(1));
        let rows = row.saturating_sub(1)..=row.saturating_add(1).min(last_row);
        let cols = col.saturating_sub(1)..=col.saturating_add(1).min(last_col);

        rows.flat_map(move |r| cols.clone().map(move |c| (r, c)))
            .filter(move |&pos| pos != coords)
    }

    /// Mines in the Moore neighbourhood, out-of-bounds neighbours count as safe.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbours
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].is_mine)
            .count() as u8
    }

    pub fn mine_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.is_mine).count() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.revealed).count() as CellCount
    }

    pub fn flagged_count(&self) -> CellCount {
        self.cells.iter().filter(|cell| cell.flagged).count() as CellCount
    }

    /// Mine locations in row-major order.
    pub fn mine_coords(&self) -> Vec<Coord2> {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
            .collect()
    }

    pub(crate) fn clear_mines(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.is_mine = false;
        }
    }

    pub(crate) fn cells_mut(&mut self) -> &mut Array2<Cell> {
        &mut self.cells
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}
