//! Movement resolution: the rules engine proper.
//!
//! Resolution is a pure function of (layout, board, color, pawn, die).
//! The client runs it to predict what the authoritative server will do;
//! the prediction holds only until the next authoritative snapshot.

use super::super::action::{Capture, MoveOutcome, RuleViolation};
use super::super::error::EngineError;
use super::super::layout::{BoardLayout, GOAL, SAFE_LEN, TRACK_LEN};
use super::super::position::{self, Zone};
use super::super::types::{Board, Color, PAWNS_PER_COLOR};
use super::{blockade, prison};
use tracing::{debug, error, instrument};

/// Resolves one die roll for one pawn.
///
/// Expected rule violations (wrong die for an exit, overshoot, blockade,
/// finished pawn) come back as `MoveOutcome::Illegal`. Only malformed
/// input and the own-prison invariant violation surface as `Err`.
///
/// # Errors
///
/// Returns `EngineError` if the pawn index or die is out of range, the
/// pawn's position decodes to no zone, or the pawn sits in its own
/// prison (a defect upstream, never a game state).
#[instrument(skip(layout, board))]
pub fn calculate_move(
    layout: &BoardLayout,
    board: &Board,
    color: Color,
    pawn: usize,
    dice: u8,
) -> Result<MoveOutcome, EngineError> {
    if pawn >= PAWNS_PER_COLOR {
        return Err(EngineError::new(format!(
            "pawn index {} out of range",
            pawn
        )));
    }
    if !(1..=6).contains(&dice) {
        return Err(EngineError::new(format!("die value {} out of range", dice)));
    }

    let pos = board
        .position(color, pawn)
        .ok_or_else(|| EngineError::new("pawn position missing from snapshot"))?;

    match position::decode(layout, pos)? {
        Zone::Prison(owner, _) if owner != color => {
            Ok(resolve_prison_release(layout, board, color, dice))
        }
        Zone::Prison(_, slot) => {
            error!(%color, pawn, slot, "pawn found in its own prison");
            Err(EngineError::new(format!(
                "{} pawn {} is in its own prison",
                color, pawn
            )))
        }
        Zone::Goal => Ok(MoveOutcome::illegal(RuleViolation::AlreadyFinished)),
        Zone::Corridor(owner, idx) => {
            if owner != color {
                error!(%color, pawn, corridor = %owner, "pawn found in a foreign corridor");
                return Err(EngineError::new(format!(
                    "{} pawn {} is in {}'s corridor",
                    color, pawn, owner
                )));
            }
            Ok(resolve_corridor_advance(layout, color, idx, dice))
        }
        Zone::Home(owner, _) => {
            if owner != color {
                error!(%color, pawn, home = %owner, "pawn found in a foreign home");
                return Err(EngineError::new(format!(
                    "{} pawn {} is in {}'s home",
                    color, pawn, owner
                )));
            }
            Ok(resolve_home_exit(layout, board, color, dice))
        }
        Zone::Track(cell) => Ok(resolve_track_move(layout, board, color, cell as i32, dice)),
    }
}

/// Enumerates, per pawn, every legal outcome the color has for this die.
///
/// This is the UI affordance query: the caller highlights exactly these
/// pawns and animates the outcome of the one the player picks.
#[instrument(skip(layout, board))]
pub fn legal_moves(
    layout: &BoardLayout,
    board: &Board,
    color: Color,
    dice: u8,
) -> Result<Vec<(usize, MoveOutcome)>, EngineError> {
    let mut moves = Vec::new();
    for pawn in 0..PAWNS_PER_COLOR {
        let outcome = calculate_move(layout, board, color, pawn, dice)?;
        if outcome.is_legal() {
            moves.push((pawn, outcome));
        }
    }
    debug!(count = moves.len(), "legal moves enumerated");
    Ok(moves)
}

// ─────────────────────────────────────────────────────────────
//  Per-zone resolution
// ─────────────────────────────────────────────────────────────

fn resolve_prison_release(
    layout: &BoardLayout,
    board: &Board,
    color: Color,
    dice: u8,
) -> MoveOutcome {
    if dice != 6 {
        return MoveOutcome::illegal(RuleViolation::PrisonNeedsSix);
    }
    let home_slot = prison::first_free_home_slot(layout, board, color);
    MoveOutcome::Legal {
        new_position: home_slot,
        capture: None,
        roll_again: true,
    }
}

fn resolve_corridor_advance(
    layout: &BoardLayout,
    color: Color,
    idx: u8,
    dice: u8,
) -> MoveOutcome {
    let landing = idx as i32 + dice as i32;
    if landing > SAFE_LEN {
        return MoveOutcome::illegal(RuleViolation::CorridorOvershoot);
    }
    if landing == SAFE_LEN {
        return MoveOutcome::advance(GOAL);
    }
    MoveOutcome::advance(layout.safe_base().get(color) + landing)
}

fn resolve_home_exit(
    layout: &BoardLayout,
    board: &Board,
    color: Color,
    dice: u8,
) -> MoveOutcome {
    if dice != 6 {
        return MoveOutcome::illegal(RuleViolation::HomeNeedsSix);
    }
    let start = layout.start_index().get(color);
    let capture = find_capture(layout, board, color, start);
    MoveOutcome::Legal {
        new_position: start,
        capture,
        roll_again: true,
    }
}

fn resolve_track_move(
    layout: &BoardLayout,
    board: &Board,
    color: Color,
    cell: i32,
    dice: u8,
) -> MoveOutcome {
    let entry = layout.entry_index().get(color);
    let dist = (entry - cell).rem_euclid(TRACK_LEN);
    let dice = dice as i32;

    if dice <= dist {
        // Stays on the track. Intermediate cells only; the landing cell
        // is governed by the capture rule instead.
        if blockade::first_blockade(board, color, cell, dice - 1).is_some() {
            return MoveOutcome::illegal(RuleViolation::BlockadeInPath);
        }
        let dest = (cell + dice).rem_euclid(TRACK_LEN);
        let capture = find_capture(layout, board, color, dest);
        return MoveOutcome::Legal {
            new_position: dest,
            roll_again: capture.is_some(),
            capture,
        };
    }

    // Turns into the corridor: the pawn passes through every cell up to
    // and including the entry cell.
    if blockade::first_blockade(board, color, cell, dist).is_some() {
        return MoveOutcome::illegal(RuleViolation::BlockadeInPath);
    }
    let rem = dice - dist - 1;
    if rem > SAFE_LEN {
        return MoveOutcome::illegal(RuleViolation::CorridorOvershoot);
    }
    if rem == SAFE_LEN {
        return MoveOutcome::advance(GOAL);
    }
    MoveOutcome::advance(layout.safe_base().get(color) + rem)
}

/// Finds the pawn captured by landing on a track cell, if any.
///
/// A pawn standing on its own start cell is immune (shared-start rule),
/// so home exits and track landings coexist there without capture.
fn find_capture(
    layout: &BoardLayout,
    board: &Board,
    mover: Color,
    cell: i32,
) -> Option<Capture> {
    for victim in Color::ALL {
        if victim == mover {
            continue;
        }
        if cell == layout.start_index().get(victim) {
            continue;
        }
        for pawn in 0..PAWNS_PER_COLOR {
            if board.position(victim, pawn) == Some(cell) {
                let prison_position = prison::next_prison_slot(layout, board, mover);
                debug!(%mover, %victim, pawn, cell, prison_position, "capture at landing cell");
                return Some(Capture {
                    color: victim,
                    pawn,
                    prison_position,
                });
            }
        }
    }
    None
}
