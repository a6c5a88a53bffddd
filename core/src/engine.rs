use alloc::collections::VecDeque;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
/// - Won | Lost -> Playing, only through a reset
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

/// Owns the board of a running game and applies reveals and flags to it.
///
/// Every method that mutates cells appends the coordinates it touched to
/// `changes`, in the order they were touched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealEngine {
    board: Board,
    status: GameStatus,
    revealed_count: CellCount,
    triggered_mine: Option<Coord2>,
}

impl RevealEngine {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            status: GameStatus::Playing,
            revealed_count: 0,
            triggered_mine: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Cells revealed by play: cascaded safe cells plus the detonated mine.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn reveal(&mut self, coords: Coord2, changes: &mut Vec<Coord2>) -> Result<RevealOutcome> {
        let coords = self.board.validate(coords)?;
        if self.status.is_finished() {
            return Ok(RevealOutcome::NoChange);
        }
        Ok(self.reveal_single_cell(coords, changes))
    }

    pub fn toggle_flag(
        &mut self,
        coords: Coord2,
        changes: &mut Vec<Coord2>,
    ) -> Result<MarkOutcome> {
        use MarkOutcome::*;

        let coords = self.board.validate(coords)?;
        if self.status.is_finished() {
            return Ok(NoChange);
        }

        let cell = &mut self.board[coords];
        let outcome = match cell.state {
            CellState::Covered => {
                cell.state = CellState::Flagged;
                Flagged
            }
            CellState::Flagged => {
                cell.state = CellState::Covered;
                Unflagged
            }
            CellState::Revealed => NoChange,
        };
        if outcome.has_update() {
            changes.push(coords);
        }
        Ok(outcome)
    }

    /// Starts over on the same board with a new mine layout.
    pub(crate) fn reset(&mut self, mines: &MineSet, changes: &mut Vec<Coord2>) {
        changes.extend(
            self.board
                .iter()
                .filter(|cell| cell.state != CellState::Covered)
                .map(Cell::coords),
        );
        self.board.reset(mines);
        self.status = GameStatus::Playing;
        self.revealed_count = 0;
        self.triggered_mine = None;
    }

    fn reveal_single_cell(&mut self, coords: Coord2, changes: &mut Vec<Coord2>) -> RevealOutcome {
        let cell = self.board[coords];

        match (cell.state, cell.is_mine) {
            (CellState::Covered, true) => {
                self.open(coords, 0, changes);
                self.triggered_mine = Some(coords);
                log::debug!("Hit mine at {:?}", coords);
                self.end_game(false, changes);
                RevealOutcome::HitMine
            }
            (CellState::Covered, false) => {
                let mut to_visit = VecDeque::from([coords]);

                while let Some(visit_coords) = to_visit.pop_front() {
                    // queued more than once, or flagged
                    if self.board[visit_coords].state != CellState::Covered {
                        continue;
                    }

                    let adjacent_mines = self.board.count_adjacent_mines(visit_coords);
                    self.open(visit_coords, adjacent_mines, changes);
                    log::trace!(
                        "Opened cell at {:?}, adjacent mines: {}",
                        visit_coords,
                        adjacent_mines
                    );

                    if adjacent_mines == 0 {
                        to_visit.extend(
                            self.board
                                .iter_neighbors(visit_coords)
                                .filter(|&pos| self.board[pos].state == CellState::Covered),
                        );
                    }
                }

                if self.revealed_count == self.board.config().safe_cells() {
                    self.end_game(true, changes);
                    RevealOutcome::Won
                } else {
                    RevealOutcome::Revealed
                }
            }
            _ => RevealOutcome::NoChange,
        }
    }

    fn open(&mut self, coords: Coord2, adjacent_mines: u8, changes: &mut Vec<Coord2>) {
        let cell = &mut self.board[coords];
        cell.state = CellState::Revealed;
        cell.adjacent_mines = adjacent_mines;
        self.revealed_count += 1;
        changes.push(coords);
    }

    fn end_game(&mut self, won: bool, changes: &mut Vec<Coord2>) {
        if self.status.is_finished() {
            return;
        }

        self.status = if won {
            GameStatus::Won
        } else {
            GameStatus::Lost
        };
        log::debug!("Game ended: {:?}", self.status);
        self.expose_mines(changes);
    }

    /// Shows every remaining mine; does not count towards `revealed_count`.
    fn expose_mines(&mut self, changes: &mut Vec<Coord2>) {
        let hidden: Vec<Coord2> = self
            .board
            .iter()
            .filter(|cell| cell.is_mine && cell.state != CellState::Revealed)
            .map(Cell::coords)
            .collect();

        for coords in hidden {
            self.board[coords].state = CellState::Revealed;
            changes.push(coords);
        }
    }
}
