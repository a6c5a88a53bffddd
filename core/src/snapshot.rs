use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a front-end needs to draw the board, detached from the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub status: GameStatus,
    pub flag_budget: i32,
    pub revealed_count: CellCount,
    pub cells: Array2<CellView>,
}

impl Snapshot {
    pub fn from_session<R>(session: &GameSession<R>) -> Self {
        let game_over = session.is_finished();
        let board = session.board();
        let cells = Array2::from_shape_fn(board.size().to_nd_index(), |index| {
            board[from_nd_index(index)].view(game_over)
        });

        Self {
            size: board.size(),
            status: session.status(),
            flag_budget: session.flag_budget(),
            revealed_count: session.revealed_count(),
            cells,
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<&CellView> {
        self.cells.get(coords.to_nd_index())
    }

    /// Cells of one row, left to right. `None` past the last row.
    pub fn row(&self, row: Coord) -> Option<impl Iterator<Item = &CellView> + '_> {
        if row >= self.size.0 {
            return None;
        }
        Some(self.cells.row(usize::from(row)).into_iter())
    }
}
