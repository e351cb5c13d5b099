//! First-class move outcomes for the track game.
//!
//! The engine never mutates a board: it resolves a die roll for one pawn
//! into an outcome value the caller applies, animates, or discards once
//! the authoritative server answers.

use super::types::Color;
use serde::{Deserialize, Serialize};

/// A capture side effect: the pawn sent to the capturing color's prison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capture {
    /// Color of the captured pawn.
    pub color: Color,
    /// Index of the captured pawn (0-3).
    pub pawn: usize,
    /// Encoded prison slot the captured pawn is sent to.
    pub prison_position: i32,
}

/// Outcome of resolving one die roll for one pawn.
///
/// Expected rule violations are data, not errors: an `Illegal` outcome is
/// a normal answer the UI surfaces to the player, never something the
/// engine retries or raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move is legal and produces a new position.
    Legal {
        /// Encoded destination position.
        new_position: i32,
        /// Capture produced by landing on an enemy pawn, if any.
        capture: Option<Capture>,
        /// Whether the mover is granted an extra turn.
        roll_again: bool,
    },
    /// The move breaks a rule.
    Illegal {
        /// The rule that was broken.
        violation: RuleViolation,
    },
}

impl MoveOutcome {
    /// Creates a legal outcome with no side effects.
    pub fn advance(new_position: i32) -> Self {
        MoveOutcome::Legal {
            new_position,
            capture: None,
            roll_again: false,
        }
    }

    /// Creates an illegal outcome for the given violation.
    pub fn illegal(violation: RuleViolation) -> Self {
        MoveOutcome::Illegal { violation }
    }

    /// Whether the outcome is legal.
    pub fn is_legal(&self) -> bool {
        matches!(self, MoveOutcome::Legal { .. })
    }

    /// Destination position of a legal outcome.
    pub fn new_position(&self) -> Option<i32> {
        match self {
            MoveOutcome::Legal { new_position, .. } => Some(*new_position),
            MoveOutcome::Illegal { .. } => None,
        }
    }

    /// Capture carried by a legal outcome.
    pub fn capture(&self) -> Option<Capture> {
        match self {
            MoveOutcome::Legal { capture, .. } => *capture,
            MoveOutcome::Illegal { .. } => None,
        }
    }

    /// Whether the outcome grants an extra turn.
    pub fn roll_again(&self) -> bool {
        matches!(self, MoveOutcome::Legal { roll_again: true, .. })
    }

    /// The violation of an illegal outcome.
    pub fn violation(&self) -> Option<RuleViolation> {
        match self {
            MoveOutcome::Legal { .. } => None,
            MoveOutcome::Illegal { violation } => Some(*violation),
        }
    }
}

/// A rule the player's request would break.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
pub enum RuleViolation {
    /// A captured pawn can only leave prison on a 6.
    #[display("exit prison requires 6")]
    PrisonNeedsSix,

    /// A home pawn can only enter the track on a 6.
    #[display("exit home requires 6")]
    HomeNeedsSix,

    /// The pawn has already reached the goal.
    #[display("pawn has already finished")]
    AlreadyFinished,

    /// The roll would run past the end of the safe corridor.
    #[display("overshoot, exact landing required")]
    CorridorOvershoot,

    /// An opposing blockade sits on the path.
    #[display("blockade, cannot pass")]
    BlockadeInPath,
}

impl std::error::Error for RuleViolation {}
