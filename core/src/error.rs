use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Too many mines, the board needs at least one safe cell")]
    TooManyMines,
    #[error("Board size {rows}x{cols} is outside the configured bounds")]
    BoardSize { rows: Coord, cols: Coord },
    #[error("Mine count {mines} is outside the configured bounds")]
    MineCount { mines: CellCount },
    #[error("Configured bounds are empty or inverted")]
    InvalidBounds,
    #[error("A game is already in progress, reset it first")]
    AlreadyInProgress,
    #[error("Saved game state is inconsistent")]
    InvalidState,
}

pub type Result<T> = core::result::Result<T, GameError>;
