//! Game rules for the four-color track game.
//!
//! This module contains pure functions for resolving moves against a
//! board snapshot. Rules are separated from board storage so the same
//! functions serve local prediction and remote-move reconstruction.

pub mod blockade;
pub mod movement;
pub mod prison;

pub use movement::{calculate_move, legal_moves};
pub use prison::{first_free_home_slot, next_prison_slot};
