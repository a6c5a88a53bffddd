use alloc::string::String;
use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates {coords:?} are outside the {}x{} board", .size.0, .size.1)]
    OutOfBounds { coords: Coord2, size: Coord2 },
    #[error("Invalid board configuration: {rows}x{cols} with {mines} mines")]
    InvalidConfiguration {
        rows: Coord,
        cols: Coord,
        mines: CellCount,
    },
    #[error("Unknown difficulty {name:?}")]
    UnknownDifficulty { name: String },
}

pub type Result<T> = core::result::Result<T, GameError>;
