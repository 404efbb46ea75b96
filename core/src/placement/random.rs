use alloc::vec::Vec;
use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::*;

/// Marks exactly `mine_count` distinct cells of `board` as mines, chosen uniformly without replacement.
///
/// Any mines already on the board are cleared first. Uses a partial Fisher-Yates shuffle over every cell index, so it
/// terminates in `O(rows * cols)` regardless of density. The player's first click is not excluded.
pub fn place_mines<R: Rng + ?Sized>(
    board: &mut Board,
    mine_count: CellCount,
    rng: &mut R,
) -> Result<()> {
    let total_cells = board.total_cells();
    if mine_count >= total_cells.max(1) {
        log::warn!(
            "Cannot place {} mines on {} cells, at least one must stay safe",
            mine_count,
            total_cells
        );
        return Err(GameError::TooManyMines);
    }

    board.clear_mines();

    let mut indices: Vec<usize> = (0..usize::from(total_cells)).collect();
    let (chosen, _) = indices.partial_shuffle(rng, usize::from(mine_count));

    let cells = board
        .cells_mut()
        .as_slice_mut()
        .ok_or(GameError::InvalidCoords)?;
    for &index in chosen.iter() {
        cells[index].is_mine = true;
    }

    log::debug!("Placed {} mines on {} cells", mine_count, total_cells);
    Ok(())
}

/// Same as [`place_mines`] but driven by a [`SmallRng`] seeded from `seed`, for reproducible layouts.
pub fn place_mines_seeded(board: &mut Board, mine_count: CellCount, seed: u64) -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(seed);
    place_mines(board, mine_count, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    #[test]
    fn places_exact_distinct_count() {
        for seed in 0..32 {
            let mut board = Board::new(8, 8);
            place_mines_seeded(&mut board, 10, seed).unwrap();

            let coords = board.mine_coords();
            let distinct: BTreeSet<_> = coords.iter().copied().collect();
            assert_eq!(coords.len(), 10);
            assert_eq!(distinct.len(), 10);
            assert!(coords.iter().all(|&pos| board.in_bounds(pos)));
        }
    }

    #[test]
    fn dense_board_leaves_one_safe_cell() {
        let mut board = Board::new(5, 5);
        place_mines_seeded(&mut board, 24, 7).unwrap();

        assert_eq!(board.mine_count(), 24);
        assert_eq!(board.safe_cell_count(), 1);
    }

    #[test]
    fn full_board_is_rejected() {
        let mut board = Board::new(3, 3);

        assert_eq!(
            place_mines_seeded(&mut board, 9, 1),
            Err(GameError::TooManyMines)
        );
        assert_eq!(board.mine_count(), 0);
    }

    #[test]
    fn zero_mines_is_allowed() {
        let mut board = Board::new(4, 4);
        place_mines_seeded(&mut board, 0, 3).unwrap();

        assert_eq!(board.mine_count(), 0);
    }

    #[test]
    fn same_seed_same_layout() {
        let mut a = Board::new(9, 9);
        let mut b = Board::new(9, 9);
        place_mines_seeded(&mut a, 10, 42).unwrap();
        place_mines_seeded(&mut b, 10, 42).unwrap();

        assert_eq!(a.mine_coords(), b.mine_coords());
    }

    #[test]
    fn replacing_previous_mines() {
        let mut board = Board::with_mines((4, 4), &[(0, 0), (1, 1), (2, 2), (3, 3)]).unwrap();
        place_mines_seeded(&mut board, 2, 11).unwrap();

        assert_eq!(board.mine_count(), 2);
    }

    #[test]
    fn fixed_placement_must_match_count() {
        let mut board = Board::new(3, 3);
        let placement = MinePlacement::Fixed(alloc::vec![(0, 0), (0, 0)]);

        assert_eq!(
            placement.apply(&mut board, 2),
            Err(GameError::MineCount { mines: 2 })
        );
        assert_eq!(placement.apply(&mut board, 1), Ok(()));
    }
}
