//! Ludo client core - optimistic rules engine for a remote-authoritative game
//!
//! This library predicts moves for a four-color race-and-capture track
//! game whose source of truth is a remote server.
//!
//! # Architecture
//!
//! - **Layout**: injected per-color constant tables, bit-identical to the server
//! - **Rules**: pure movement resolution over a board snapshot
//! - **Path**: step-by-step expansion of moves for animation
//! - **Turn**: validation of client actions against replicated turn state
//! - **Wire**: boundary shapes shared with the authoritative server
//!
//! # Example
//!
//! ```
//! use ludo_client::{calculate_move, Board, BoardLayout, Color};
//!
//! let layout = BoardLayout::default();
//! let mut board = Board::starting(&layout);
//! board.set(Color::R, 0, 0).unwrap();
//!
//! let outcome = calculate_move(&layout, &board, Color::R, 0, 3).unwrap();
//! assert_eq!(outcome.new_position(), Some(3));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod turn;
mod wire;

// Crate-level exports - Game types and layout
pub use games::ludo::{
    Board, BoardLayout, Color, ColorTable, GameStatus, LayoutError, GOAL, HOME_SLOTS,
    PAWNS_PER_COLOR, PRISON_SLOTS, SAFE_LEN, TRACK_LEN,
};

// Crate-level exports - Position model
pub use games::ludo::{
    decode, encode, is_at_goal, is_in_enemy_prison, is_in_home, is_in_own_corridor,
    is_in_own_prison, is_on_track, Zone,
};

// Crate-level exports - Rules engine
pub use games::ludo::{
    calculate_move, first_free_home_slot, legal_moves, next_prison_slot, Capture, EngineError,
    MoveOutcome, RuleViolation,
};

// Crate-level exports - Path generation and reconciliation
pub use games::ludo::{
    diff_snapshots, generate_path, reconcile, PawnTransition, Reconciliation,
};

// Crate-level exports - Turn validation
pub use turn::{
    validate_turn, validate_turn_with_retry, RetryPolicy, TurnContext, TurnRejection, TurnVerdict,
};

// Crate-level exports - Wire shapes
pub use wire::{Action, BoardSnapshot, MoveIntent, MoveReply, WireMoveResult};
