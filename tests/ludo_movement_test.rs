//! Tests for movement resolution.

use ludo_client::{calculate_move, Board, BoardLayout, Color, RuleViolation, GOAL};

fn layout() -> BoardLayout {
    BoardLayout::default()
}

#[test]
fn test_home_pawn_moves_only_on_six() {
    let layout = layout();
    let board = Board::starting(&layout);
    for color in Color::ALL {
        for dice in 1..=6u8 {
            let outcome = calculate_move(&layout, &board, color, 0, dice).unwrap();
            if dice == 6 {
                assert_eq!(
                    outcome.new_position(),
                    Some(layout.start_index().get(color)),
                    "{} exits to its start on a 6",
                    color
                );
                assert!(outcome.roll_again());
            } else {
                assert_eq!(outcome.violation(), Some(RuleViolation::HomeNeedsSix));
            }
        }
    }
}

#[test]
fn test_track_move_is_modular_arithmetic() {
    let layout = layout();
    let mut board = Board::starting(&layout);
    // Green at 54 with entry far away: a 4 wraps to cell 2.
    board.set(Color::G, 0, 54).unwrap();
    let outcome = calculate_move(&layout, &board, Color::G, 0, 4).unwrap();
    assert_eq!(outcome.new_position(), Some(2));
}

#[test]
fn test_track_destinations_stay_on_track() {
    let layout = layout();
    for cell in [0, 13, 27, 41, 54, 55] {
        for dice in 1..=6u8 {
            let mut board = Board::starting(&layout);
            board.set(Color::G, 0, cell).unwrap();
            let outcome = calculate_move(&layout, &board, Color::G, 0, dice).unwrap();
            let Some(dest) = outcome.new_position() else {
                continue;
            };
            let corridor = layout.safe_base().get(Color::G);
            let in_corridor = (corridor..corridor + 6).contains(&dest);
            assert!(
                (0..56).contains(&dest) || in_corridor || dest == GOAL,
                "destination {} from cell {} with die {}",
                dest,
                cell,
                dice
            );
        }
    }
}

#[test]
fn test_corridor_overshoot_always_rejected() {
    let layout = layout();
    for idx in 0..6i32 {
        for dice in 1..=6u8 {
            let mut board = Board::starting(&layout);
            board
                .set(Color::R, 0, layout.safe_base().get(Color::R) + idx)
                .unwrap();
            let outcome = calculate_move(&layout, &board, Color::R, 0, dice).unwrap();
            if idx + dice as i32 > 6 {
                assert_eq!(
                    outcome.violation(),
                    Some(RuleViolation::CorridorOvershoot),
                    "offset {} die {}",
                    idx,
                    dice
                );
            } else {
                assert!(outcome.is_legal());
            }
        }
    }
}

#[test]
fn test_exact_corridor_arrival_reaches_goal() {
    let layout = layout();
    let mut board = Board::starting(&layout);
    // Red at corridor offset 5 with a 1 finishes.
    board
        .set(Color::R, 0, layout.safe_base().get(Color::R) + 5)
        .unwrap();
    let outcome = calculate_move(&layout, &board, Color::R, 0, 1).unwrap();
    assert_eq!(outcome.new_position(), Some(GOAL));
}

#[test]
fn test_track_entry_into_corridor() {
    let layout = layout();
    let mut board = Board::starting(&layout);
    // Red at 53, entry at 55: a 5 lands at corridor offset 2.
    board.set(Color::R, 0, 53).unwrap();
    let outcome = calculate_move(&layout, &board, Color::R, 0, 5).unwrap();
    assert_eq!(
        outcome.new_position(),
        Some(layout.safe_base().get(Color::R) + 2)
    );

    // From the entry cell itself a 6 reaches the last corridor cell.
    board.set(Color::R, 0, 55).unwrap();
    let outcome = calculate_move(&layout, &board, Color::R, 0, 6).unwrap();
    assert_eq!(outcome.new_position(), Some(layout.safe_base().get(Color::R) + 5));
}

#[test]
fn test_finished_pawn_never_moves() {
    let layout = layout();
    let mut board = Board::starting(&layout);
    board.set(Color::B, 2, GOAL).unwrap();
    for dice in 1..=6u8 {
        let outcome = calculate_move(&layout, &board, Color::B, 2, dice).unwrap();
        assert_eq!(outcome.violation(), Some(RuleViolation::AlreadyFinished));
    }
}

#[test]
fn test_landing_on_enemy_pawn_captures_into_movers_prison() {
    let layout = layout();
    let mut board = Board::starting(&layout);
    board.set(Color::R, 0, 0).unwrap();
    board.set(Color::G, 1, 3).unwrap();

    let outcome = calculate_move(&layout, &board, Color::R, 0, 3).unwrap();
    assert_eq!(outcome.new_position(), Some(3));
    let capture = outcome.capture().expect("capture expected");
    assert_eq!(capture.color, Color::G);
    assert_eq!(capture.pawn, 1);
    assert_eq!(capture.prison_position, layout.prison_base().get(Color::R));
    assert!(outcome.roll_again(), "capture grants an extra turn");
}

#[test]
fn test_landing_on_empty_cell_grants_no_extra_turn() {
    let layout = layout();
    let mut board = Board::starting(&layout);
    board.set(Color::R, 0, 0).unwrap();
    let outcome = calculate_move(&layout, &board, Color::R, 0, 3).unwrap();
    assert_eq!(outcome.capture(), None);
    assert!(!outcome.roll_again());
}

#[test]
fn test_shared_start_immunity() {
    let layout = layout();
    let mut board = Board::starting(&layout);
    // Green stands on its own start; Red lands on the same cell.
    let green_start = layout.start_index().get(Color::G);
    board.set(Color::G, 0, green_start).unwrap();
    board.set(Color::R, 0, green_start - 3).unwrap();

    let outcome = calculate_move(&layout, &board, Color::R, 0, 3).unwrap();
    assert_eq!(outcome.new_position(), Some(green_start));
    assert_eq!(outcome.capture(), None, "no capture on the enemy's own start");
}

#[test]
fn test_home_exit_captures_squatter_on_start() {
    let layout = layout();
    let mut board = Board::starting(&layout);
    // A Green pawn squats on Red's start (not Green's own start).
    board.set(Color::G, 3, layout.start_index().get(Color::R)).unwrap();

    let outcome = calculate_move(&layout, &board, Color::R, 0, 6).unwrap();
    assert_eq!(outcome.new_position(), Some(0));
    let capture = outcome.capture().expect("squatter captured");
    assert_eq!(capture.color, Color::G);
    assert_eq!(capture.pawn, 3);
}

#[test]
fn test_blockade_blocks_every_other_color() {
    let layout = layout();
    let mut board = Board::starting(&layout);
    // Red blockade at cell 10.
    board.set(Color::R, 0, 10).unwrap();
    board.set(Color::R, 1, 10).unwrap();

    for (color, from, dice) in [
        (Color::G, 8, 4u8),
        (Color::Y, 6, 5u8),
        (Color::B, 9, 2u8),
    ] {
        let mut fixture = board.clone();
        fixture.set(color, 0, from).unwrap();
        let outcome = calculate_move(&layout, &fixture, color, 0, dice).unwrap();
        assert_eq!(
            outcome.violation(),
            Some(RuleViolation::BlockadeInPath),
            "{} from {} with die {}",
            color,
            from,
            dice
        );
    }
}

#[test]
fn test_blockade_does_not_stop_its_own_color() {
    let layout = layout();
    let mut board = Board::starting(&layout);
    board.set(Color::R, 0, 10).unwrap();
    board.set(Color::R, 1, 10).unwrap();
    board.set(Color::R, 2, 8).unwrap();

    let outcome = calculate_move(&layout, &board, Color::R, 2, 4).unwrap();
    assert_eq!(outcome.new_position(), Some(12));
}

#[test]
fn test_prison_release_requires_six() {
    let layout = layout();
    let mut board = Board::starting(&layout);
    // Red pawn held in Green's prison.
    board
        .set(Color::R, 0, layout.prison_base().get(Color::G))
        .unwrap();

    let outcome = calculate_move(&layout, &board, Color::R, 0, 4).unwrap();
    let violation = outcome.violation().expect("release needs a 6");
    assert_eq!(violation, RuleViolation::PrisonNeedsSix);
    assert_eq!(violation.to_string(), "exit prison requires 6");

    let outcome = calculate_move(&layout, &board, Color::R, 0, 6).unwrap();
    // Slot 0 freed when the pawn was captured; release returns there.
    assert_eq!(
        outcome.new_position(),
        Some(layout.home_base().get(Color::R))
    );
    assert!(outcome.roll_again(), "release grants an extra turn");
}

#[test]
fn test_prison_release_takes_first_free_home_slot() {
    let layout = layout();
    let mut board = Board::starting(&layout);
    let home = layout.home_base().get(Color::R);
    // Slots 0 and 1 still occupied; pawns 2 and 3 are out.
    board.set(Color::R, 2, 20).unwrap();
    board
        .set(Color::R, 3, layout.prison_base().get(Color::G))
        .unwrap();

    let outcome = calculate_move(&layout, &board, Color::R, 3, 6).unwrap();
    assert_eq!(outcome.new_position(), Some(home + 2));
}

#[test]
fn test_opening_advance_on_fresh_board() {
    let layout = layout();
    let board = Board::from_positions([
        [0, -10, -10, -10],
        [-20, -19, -18, -17],
        [-30, -29, -28, -27],
        [-40, -39, -38, -37],
    ]);
    let outcome = calculate_move(&layout, &board, Color::R, 0, 3).unwrap();
    assert_eq!(outcome.new_position(), Some(3));
    assert_eq!(outcome.capture(), None);
}
