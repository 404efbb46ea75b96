use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

/// Where the mines of a new game come from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MinePlacement {
    /// Uniformly random placement from a seeded generator.
    Random { seed: u64 },
    /// Exact layout, the requested mine count must match the distinct coordinates.
    Fixed(Vec<Coord2>),
}

impl MinePlacement {
    pub(crate) fn apply(&self, board: &mut Board, mine_count: CellCount) -> Result<()> {
        match self {
            Self::Random { seed } => place_mines_seeded(board, mine_count, *seed),
            Self::Fixed(coords) => {
                board.clear_mines();
                for &pos in coords {
                    board.validate_coords(pos)?;
                    board[pos].is_mine = true;
                }
                if board.mine_count() != mine_count {
                    log::warn!(
                        "Fixed layout has {} distinct mines, requested {}",
                        board.mine_count(),
                        mine_count
                    );
                    return Err(GameError::MineCount { mines: mine_count });
                }
                Ok(())
            }
        }
    }
}
