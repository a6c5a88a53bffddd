use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Grid of [`Cell`]s for one game, indexed by `(row, col)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    config: GameConfig,
    cells: Array2<Cell>,
}

impl Board {
    /// Builds a fully covered board. `mines` must hold exactly
    /// `config.mines()` in-bounds positions, as produced by a [`MinePlacer`].
    pub fn new(config: GameConfig, mines: &MineSet) -> Self {
        let cells = Array2::from_shape_fn(config.size().to_nd_index(), |index| {
            let coords = from_nd_index(index);
            Cell::new(coords, mines.contains(coords))
        });
        Self { config, cells }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn validate(&self, coords: Coord2) -> Result<Coord2> {
        self.config.validate_coords(coords)
    }

    pub fn cell(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate(coords)?;
        Ok(&self[coords])
    }

    /// In-bounds neighbours of `coords`, row-major from the top-left.
    pub fn neighbours(&self, coords: Coord2) -> Result<NeighborIter> {
        let coords = self.validate(coords)?;
        Ok(self.iter_neighbors(coords))
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub fn adjacent_mines(&self, coords: Coord2) -> Result<u8> {
        let coords = self.validate(coords)?;
        Ok(self.count_adjacent_mines(coords))
    }

    pub(crate) fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        let count = self
            .iter_neighbors(coords)
            .filter(|&pos| self[pos].is_mine)
            .count();
        // at most eight neighbours
        count as u8
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    pub fn for_each(&self, visitor: impl FnMut(&Cell)) {
        self.iter().for_each(visitor);
    }

    pub fn mine_positions(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter().filter(|cell| cell.is_mine).map(Cell::coords)
    }

    /// Covers every cell again and re-seeds the mines, keeping the dimensions.
    pub(crate) fn reset(&mut self, mines: &MineSet) {
        for cell in self.cells.iter_mut() {
            *cell = Cell::new(cell.coords, mines.contains(cell.coords));
        }
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
