//! Boundary data shapes shared with the authoritative server.
//!
//! These types mirror the server's JSON bit-for-bit. The engine works on
//! the decoded domain types; everything here exists to cross the wire
//! and is converted at the edge.

use crate::games::ludo::{Board, Capture, Color, MoveOutcome, PAWNS_PER_COLOR};
use serde::{Deserialize, Serialize};

/// Board snapshot as the server publishes it: one array of four encoded
/// positions per color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Red pawn positions.
    #[serde(rename = "R")]
    pub r: [i32; PAWNS_PER_COLOR],
    /// Green pawn positions.
    #[serde(rename = "G")]
    pub g: [i32; PAWNS_PER_COLOR],
    /// Yellow pawn positions.
    #[serde(rename = "Y")]
    pub y: [i32; PAWNS_PER_COLOR],
    /// Blue pawn positions.
    #[serde(rename = "B")]
    pub b: [i32; PAWNS_PER_COLOR],
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        Self {
            r: *board.positions(Color::R),
            g: *board.positions(Color::G),
            y: *board.positions(Color::Y),
            b: *board.positions(Color::B),
        }
    }
}

impl From<BoardSnapshot> for Board {
    fn from(snapshot: BoardSnapshot) -> Self {
        Board::from_positions([snapshot.r, snapshot.g, snapshot.y, snapshot.b])
    }
}

/// Action kinds a client may submit to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// Roll the die.
    Roll,
    /// Move a pawn by the rolled value.
    Move,
    /// Skip the turn (no legal move).
    Skip,
    /// Leave the game.
    Exit,
    /// Start the game.
    Start,
    /// Let the server play the turn automatically.
    AutoPlay,
    /// Claim the winner's prize.
    ClaimPrize,
}

/// A move intent submitted to the remote authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveIntent {
    /// The action to perform.
    pub action: Action,
    /// Identifier of the game the action targets.
    pub game_id: String,
    /// Pawn the action applies to, for `Move`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pawn_index: Option<usize>,
}

impl MoveIntent {
    /// Creates an intent with no pawn attached.
    pub fn new(action: Action, game_id: impl Into<String>) -> Self {
        Self {
            action,
            game_id: game_id.into(),
            pawn_index: None,
        }
    }

    /// Creates a move intent for one pawn.
    pub fn for_pawn(game_id: impl Into<String>, pawn_index: usize) -> Self {
        Self {
            action: Action::Move,
            game_id: game_id.into(),
            pawn_index: Some(pawn_index),
        }
    }
}

/// Move result in the server's shape, also produced locally so UI
/// prediction and server truth are structurally interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireMoveResult {
    /// Whether the move was legal.
    pub valid: bool,
    /// Encoded destination position of a legal move.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_position: Option<i32>,
    /// Captured pawn of a legal move, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured_pawn: Option<Capture>,
    /// Whether the mover may roll again.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_roll_again: Option<bool>,
    /// Human-readable reason of an illegal move.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<&MoveOutcome> for WireMoveResult {
    fn from(outcome: &MoveOutcome) -> Self {
        match outcome {
            MoveOutcome::Legal {
                new_position,
                capture,
                roll_again,
            } => Self {
                valid: true,
                new_position: Some(*new_position),
                captured_pawn: *capture,
                can_roll_again: roll_again.then_some(true),
                reason: None,
            },
            MoveOutcome::Illegal { violation } => Self {
                valid: false,
                new_position: None,
                captured_pawn: None,
                can_roll_again: None,
                reason: Some(violation.to_string()),
            },
        }
    }
}

/// Reply returned by the remote authority for a submitted intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveReply {
    /// Whether the server accepted the intent.
    pub ok: bool,
    /// Error message when the intent was refused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Machine-readable error code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Die value the server rolled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dice_value: Option<u8>,
    /// Result of the move the server applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_result: Option<WireMoveResult>,
    /// Whether the game ended with this move.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished: Option<bool>,
    /// Winner of a finished game.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Color>,
}
