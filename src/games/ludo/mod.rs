mod action;
mod error;
mod layout;
mod path;
mod position;
mod rules;
mod types;

pub use action::{Capture, MoveOutcome, RuleViolation};
pub use error::EngineError;
pub use layout::{
    BoardLayout, ColorTable, LayoutError, GOAL, HOME_SLOTS, PRISON_SLOTS, SAFE_LEN, TRACK_LEN,
};
pub use path::{diff_snapshots, generate_path, reconcile, PawnTransition, Reconciliation};
pub use position::{
    decode, encode, is_at_goal, is_in_enemy_prison, is_in_home, is_in_own_corridor,
    is_in_own_prison, is_on_track, Zone,
};
pub use rules::{calculate_move, first_free_home_slot, legal_moves, next_prison_slot};
pub use types::{Board, Color, GameStatus, PAWNS_PER_COLOR};
