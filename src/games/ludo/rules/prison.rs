//! Prison and home slot allocation.

use super::super::layout::{BoardLayout, HOME_SLOTS, PRISON_SLOTS};
use super::super::types::{Board, Color};
use tracing::{instrument, warn};

/// Assigns the next free slot in the capturing color's prison ring.
///
/// Slots descend from the prison base in arrival order. With sixteen
/// pawns in play the ring can never actually fill; if it somehow does,
/// the last slot is returned as a degraded fallback.
#[instrument(skip(layout, board))]
pub fn next_prison_slot(layout: &BoardLayout, board: &Board, prison_color: Color) -> i32 {
    let base = layout.prison_base().get(prison_color);
    for i in 0..PRISON_SLOTS {
        let slot = base - i;
        if !board.is_occupied(slot) {
            return slot;
        }
    }
    warn!(%prison_color, "prison ring full, reusing last slot");
    base - (PRISON_SLOTS - 1)
}

/// Finds the first free home slot for a pawn released from prison.
///
/// Slots are scanned in ascending order from the home base. A full home
/// defaults to slot 0, matching the server's behavior.
#[instrument(skip(layout, board))]
pub fn first_free_home_slot(layout: &BoardLayout, board: &Board, color: Color) -> i32 {
    let base = layout.home_base().get(color);
    for i in 0..HOME_SLOTS {
        let slot = base + i;
        if !board.is_occupied(slot) {
            return slot;
        }
    }
    warn!(%color, "all home slots occupied, defaulting to slot 0");
    base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_prison_yields_base_slot() {
        let layout = BoardLayout::default();
        let board = Board::starting(&layout);
        assert_eq!(next_prison_slot(&layout, &board, Color::G), -200);
    }

    #[test]
    fn test_occupied_slots_are_skipped() {
        let layout = BoardLayout::default();
        let mut board = Board::starting(&layout);
        board.set(Color::R, 0, -200).unwrap();
        board.set(Color::Y, 1, -201).unwrap();
        assert_eq!(next_prison_slot(&layout, &board, Color::G), -202);
    }

    #[test]
    fn test_scan_walks_past_a_crowded_ring() {
        let layout = BoardLayout::default();
        let mut board = Board::starting(&layout);
        // Every pawn in the game stacked into Green's ring still leaves
        // four free slots; the scan finds the first of them.
        for (i, (color, pawn)) in Color::ALL
            .into_iter()
            .flat_map(|c| (0..4).map(move |p| (c, p)))
            .enumerate()
        {
            board.set(color, pawn, -200 - i as i32).unwrap();
        }
        assert_eq!(next_prison_slot(&layout, &board, Color::G), -216);
    }

    #[test]
    fn test_first_free_home_slot_scans_ascending() {
        let layout = BoardLayout::default();
        let mut board = Board::starting(&layout);
        // Red pawn 0 is out on the track; its slot is free again.
        board.set(Color::R, 0, 5).unwrap();
        assert_eq!(first_free_home_slot(&layout, &board, Color::R), -10);

        // Occupy slot 0; the scan moves to slot 1.
        board.set(Color::R, 0, -10).unwrap();
        board.set(Color::R, 1, 6).unwrap();
        assert_eq!(first_free_home_slot(&layout, &board, Color::R), -9);
    }

    #[test]
    fn test_full_home_defaults_to_slot_zero() {
        let layout = BoardLayout::default();
        let board = Board::starting(&layout);
        // Starting board: every home slot occupied.
        assert_eq!(first_free_home_slot(&layout, &board, Color::B), -40);
    }
}
