//! Blockade detection on the shared main track.
//!
//! Two or more pawns of a single color stacked on one track cell form a
//! blockade: no other color may travel through that cell. The blockade's
//! own color passes freely, and the rule covers only pass-through cells,
//! not the landing cell.

use super::super::layout::TRACK_LEN;
use super::super::types::{Board, Color};
use tracing::debug;

/// Checks whether a cell holds a blockade against the given mover.
pub fn is_blocked_for(board: &Board, mover: Color, cell: i32) -> bool {
    Color::ALL
        .into_iter()
        .filter(|owner| *owner != mover)
        .any(|owner| board.count_at(owner, cell) >= 2)
}

/// Scans the `steps` track cells after `from` (wrapping) for an opposing
/// blockade, returning the first blocked cell.
pub fn first_blockade(board: &Board, mover: Color, from: i32, steps: i32) -> Option<i32> {
    for k in 1..=steps {
        let cell = (from + k).rem_euclid(TRACK_LEN);
        if is_blocked_for(board, mover, cell) {
            debug!(%mover, cell, "blockade found on path");
            return Some(cell);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::ludo::layout::BoardLayout;

    fn board_with_red_blockade_at(cell: i32) -> Board {
        let layout = BoardLayout::default();
        let mut board = Board::starting(&layout);
        board.set(Color::R, 0, cell).unwrap();
        board.set(Color::R, 1, cell).unwrap();
        board
    }

    #[test]
    fn test_two_same_color_pawns_block_others() {
        let board = board_with_red_blockade_at(10);
        assert!(is_blocked_for(&board, Color::G, 10));
        assert!(is_blocked_for(&board, Color::B, 10));
    }

    #[test]
    fn test_blockade_does_not_block_its_own_color() {
        let board = board_with_red_blockade_at(10);
        assert!(!is_blocked_for(&board, Color::R, 10));
    }

    #[test]
    fn test_single_pawn_is_not_a_blockade() {
        let layout = BoardLayout::default();
        let mut board = Board::starting(&layout);
        board.set(Color::R, 0, 10).unwrap();
        assert!(!is_blocked_for(&board, Color::G, 10));
    }

    #[test]
    fn test_mixed_stack_is_not_a_blockade() {
        let layout = BoardLayout::default();
        let mut board = Board::starting(&layout);
        board.set(Color::R, 0, 10).unwrap();
        board.set(Color::Y, 0, 10).unwrap();
        assert!(!is_blocked_for(&board, Color::G, 10));
    }

    #[test]
    fn test_first_blockade_scans_wrapping_cells() {
        let board = board_with_red_blockade_at(1);
        // From cell 54, five steps cross 55, 0, 1, 2, 3.
        assert_eq!(first_blockade(&board, Color::G, 54, 5), Some(1));
        // Two steps stop at 0, short of the blockade.
        assert_eq!(first_blockade(&board, Color::G, 54, 2), None);
    }
}
