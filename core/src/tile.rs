use serde::{Deserialize, Serialize};

use crate::{Coord, Coord2};

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Covered,
    Flagged,
    Revealed,
}

/// One square of the board.
///
/// `is_mine` is fixed when the board is built. `adjacent_mines` is only
/// meaningful once a safe cell has been revealed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) coords: Coord2,
    pub(crate) is_mine: bool,
    pub(crate) state: CellState,
    pub(crate) adjacent_mines: u8,
}

impl Cell {
    pub(crate) const fn new(coords: Coord2, is_mine: bool) -> Self {
        Self {
            coords,
            is_mine,
            state: CellState::Covered,
            adjacent_mines: 0,
        }
    }

    pub const fn row(&self) -> Coord {
        self.coords.0
    }

    pub const fn col(&self) -> Coord {
        self.coords.1
    }

    pub const fn coords(&self) -> Coord2 {
        self.coords
    }

    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn state(&self) -> CellState {
        self.state
    }

    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    /// View of this cell as a front-end may see it. Mines stay hidden
    /// until `game_over` is set.
    pub const fn view(&self, game_over: bool) -> CellView {
        let adjacent_mines = match (self.state, self.is_mine) {
            (CellState::Revealed, false) => Some(self.adjacent_mines),
            _ => None,
        };
        CellView {
            state: self.state,
            adjacent_mines,
            is_mine: if game_over { Some(self.is_mine) } else { None },
        }
    }
}

/// Immutable per-cell view handed to front-ends.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub state: CellState,
    pub adjacent_mines: Option<u8>,
    pub is_mine: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covered_cell_hides_everything() {
        let cell = Cell::new((0, 0), true);
        assert_eq!(
            cell.view(false),
            CellView {
                state: CellState::Covered,
                adjacent_mines: None,
                is_mine: None,
            }
        );
    }

    #[test]
    fn revealed_safe_cell_exposes_count() {
        let mut cell = Cell::new((2, 3), false);
        cell.state = CellState::Revealed;
        cell.adjacent_mines = 4;

        assert_eq!(cell.row(), 2);
        assert_eq!(cell.col(), 3);
        assert_eq!(cell.view(false).adjacent_mines, Some(4));
        assert_eq!(cell.view(true).is_mine, Some(false));
    }

    #[test]
    fn revealed_mine_has_no_count() {
        let mut cell = Cell::new((0, 0), true);
        cell.state = CellState::Revealed;

        let view = cell.view(true);
        assert_eq!(view.adjacent_mines, None);
        assert_eq!(view.is_mine, Some(true));
    }
}
