use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a presentation layer may show for one cell.
///
/// Mine variants only appear once the game is lost.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
    TriggeredMine,
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndMessage {
    GameOver,
    YouWon,
}

impl EndMessage {
    pub const fn text(self) -> &'static str {
        match self {
            Self::GameOver => "GAME OVER",
            Self::YouWon => "YOU WON",
        }
    }
}

impl fmt::Display for EndMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Full observable state of a running or finished game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub state: GameState,
    pub cells: Array2<CellView>,
    pub mines: CellCount,
    pub flags: CellCount,
    pub message: Option<EndMessage>,
}

impl Snapshot {
    /// Returns `None` while no board exists.
    pub fn from_game(game: &Game) -> Option<Self> {
        let board = game.board()?;
        let size = board.size();
        let mut cells = Array2::from_elem(size.to_nd_index(), CellView::Hidden);

        for ((row, col), view) in cells.indexed_iter_mut() {
            if let Some(cell) = game.cell_view((row as Coord, col as Coord)) {
                *view = cell;
            }
        }

        Some(Self {
            size,
            state: game.state(),
            cells,
            mines: game.config().map_or(0, |config| config.mines),
            flags: board.flagged_count(),
            message: game.end_message(),
        })
    }

    pub fn cell_at(&self, coords: Coord2) -> CellView {
        self.cells[coords.to_nd_index()]
    }
}
