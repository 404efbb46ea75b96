use alloc::collections::VecDeque;

use crate::*;

/// Result of running the reveal engine on one coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The coordinate holds a mine, the board was not touched.
    Mine,
    /// Number of safe cells opened by this call, including the cascade.
    Cleared(CellCount),
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Cleared(0))
    }
}

/// Opens `coords` and, for zero-count cells, flood fills the connected region.
///
/// Out-of-bounds, revealed or flagged coordinates are a no-op returning `Cleared(0)`. Mines are never opened by the
/// cascade, and flagged cells stop it. The fill uses an explicit worklist so the depth of a cascade is not bound to the
/// call stack; the final revealed set does not depend on visiting order.
pub fn reveal(board: &mut Board, coords: Coord2) -> RevealOutcome {
    let Some(cell) = board.get(coords) else {
        return RevealOutcome::Cleared(0);
    };
    if !cell.is_openable() {
        return RevealOutcome::Cleared(0);
    }
    if cell.is_mine {
        return RevealOutcome::Mine;
    }

    let mut cleared: CellCount = 0;
    let mut to_visit = VecDeque::from([coords]);

    while let Some(visit_coords) = to_visit.pop_front() {
        let cell = board[visit_coords];
        if !cell.is_openable() || cell.is_mine {
            continue;
        }

        let adjacent_mines = board.adjacent_mine_count(visit_coords);
        let cell = &mut board[visit_coords];
        cell.revealed = true;
        cell.adjacent_mines = adjacent_mines;
        cleared += 1;
        log::trace!(
            "Opened cell at {:?}, adjacent mines: {}",
            visit_coords,
            adjacent_mines
        );

        if adjacent_mines == 0 {
            to_visit.extend(
                board
                    .iter_neighbors(visit_coords)
                    .filter(|&pos| board[pos].is_openable()),
            );
        }
    }

    if cleared > 1 {
        log::debug!("Cascade from {:?} opened {} cells", coords, cleared);
    }
    RevealOutcome::Cleared(cleared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn board(size: Coord2, mines: &[Coord2]) -> Board {
        Board::with_mines(size, mines).unwrap()
    }

    fn revealed_set(board: &Board) -> Vec<Coord2> {
        let (rows, cols) = board.size();
        (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .filter(|&pos| board[pos].revealed)
            .collect()
    }

    #[test]
    fn mine_is_reported_without_mutation() {
        let mut board = board((3, 3), &[(1, 1)]);
        let before = board.clone();

        assert_eq!(reveal(&mut board, (1, 1)), RevealOutcome::Mine);
        assert_eq!(board, before);
    }

    #[test]
    fn numbered_cell_opens_alone() {
        let mut board = board((3, 3), &[(0, 0)]);

        assert_eq!(reveal(&mut board, (1, 1)), RevealOutcome::Cleared(1));
        assert!(board[(1, 1)].revealed);
        assert_eq!(board[(1, 1)].adjacent_mines, 1);
        assert_eq!(board.revealed_count(), 1);
    }

    #[test]
    fn cascade_opens_region_and_its_border() {
        let mut board = board((5, 5), &[(2, 2)]);

        assert_eq!(reveal(&mut board, (0, 0)), RevealOutcome::Cleared(24));
        assert!(!board[(2, 2)].revealed);
        assert_eq!(board[(1, 1)].adjacent_mines, 1);
        assert_eq!(board[(0, 0)].adjacent_mines, 0);
    }

    #[test]
    fn guards_are_noops() {
        let mut board = board((3, 3), &[(0, 0)]);
        board[(2, 2)].flagged = true;

        assert_eq!(reveal(&mut board, (3, 0)), RevealOutcome::Cleared(0));
        assert_eq!(reveal(&mut board, (2, 2)), RevealOutcome::Cleared(0));
        assert!(!board[(2, 2)].revealed);

        assert_eq!(reveal(&mut board, (1, 1)), RevealOutcome::Cleared(1));
        assert_eq!(reveal(&mut board, (1, 1)), RevealOutcome::Cleared(0));
        assert!(!RevealOutcome::Cleared(0).has_update());
    }

    #[test]
    fn flags_stop_the_cascade() {
        // a wall of flags splits the empty board in two
        let mut board = board((3, 5), &[]);
        for row in 0..3 {
            board[(row, 2)].flagged = true;
        }

        assert_eq!(reveal(&mut board, (0, 0)), RevealOutcome::Cleared(6));
        assert!(revealed_set(&board).iter().all(|&(_, col)| col < 2));
        assert!((0..3).all(|row| !board[(row, 2)].revealed && board[(row, 2)].flagged));
    }

    #[test]
    fn cascade_is_order_independent() {
        let mines = [(0, 4), (3, 1), (4, 4), (5, 0)];
        let zero_cells = [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)];

        let sets: Vec<_> = zero_cells
            .iter()
            .map(|&start| {
                let mut b = board((6, 6), &mines);
                assert_eq!(b.adjacent_mine_count(start), 0);
                reveal(&mut b, start);
                revealed_set(&b)
            })
            .collect();

        assert!(sets.windows(2).all(|pair| pair[0] == pair[1]));
        assert!(sets[0].len() > zero_cells.len());
    }

    #[test]
    fn large_empty_board_does_not_overflow_the_stack() {
        let mut board = board((255, 255), &[]);

        assert_eq!(reveal(&mut board, (127, 127)), RevealOutcome::Cleared(65025));
    }
}
