//! Core domain types for the four-color track game.

use super::layout::{BoardLayout, GOAL, HOME_SLOTS};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of pawns each color owns.
pub const PAWNS_PER_COLOR: usize = 4;

/// One of the four pawn colors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Color {
    /// Red.
    R,
    /// Green.
    G,
    /// Yellow.
    Y,
    /// Blue.
    B,
}

impl Color {
    /// All four colors in canonical order.
    pub const ALL: [Color; 4] = [Color::R, Color::G, Color::Y, Color::B];

    /// Dense index of this color (0-3), used for table lookups.
    pub fn index(self) -> usize {
        match self {
            Color::R => 0,
            Color::G => 1,
            Color::Y => 2,
            Color::B => 3,
        }
    }

    /// Get label for this color (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Color::R => "Red",
            Color::G => "Green",
            Color::Y => "Yellow",
            Color::B => "Blue",
        }
    }

    /// Parse from a single letter or full label (case-insensitive).
    pub fn from_label(s: &str) -> Option<Color> {
        let s = s.trim();
        <Color as strum::IntoEnumIterator>::iter().find(|color| {
            color.label().eq_ignore_ascii_case(s) || color.letter().eq_ignore_ascii_case(s)
        })
    }

    /// Single-letter form used in wire snapshots.
    pub fn letter(&self) -> &'static str {
        match self {
            Color::R => "R",
            Color::G => "G",
            Color::Y => "Y",
            Color::B => "B",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Snapshot of every pawn position on the board.
///
/// The board is the entire mutable state the rules operate on. It is
/// always passed into the engine by reference and replaced wholesale
/// whenever the authoritative server publishes a new state; the engine
/// itself never holds one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Encoded pawn positions, indexed by `Color::index` then pawn index.
    pawns: [[i32; PAWNS_PER_COLOR]; 4],
}

impl Board {
    /// Creates the starting board: every pawn in its home base.
    #[instrument(skip(layout))]
    pub fn starting(layout: &BoardLayout) -> Self {
        let mut pawns = [[0; PAWNS_PER_COLOR]; 4];
        for color in Color::ALL {
            let base = layout.home_base().get(color);
            for (slot, pos) in pawns[color.index()].iter_mut().enumerate() {
                *pos = base + slot as i32;
            }
        }
        Self { pawns }
    }

    /// Creates a board from raw encoded positions (R, G, Y, B order).
    pub fn from_positions(pawns: [[i32; PAWNS_PER_COLOR]; 4]) -> Self {
        Self { pawns }
    }

    /// Gets the encoded position of the given pawn.
    pub fn position(&self, color: Color, pawn: usize) -> Option<i32> {
        self.pawns.get(color.index())?.get(pawn).copied()
    }

    /// All four pawn positions for one color.
    pub fn positions(&self, color: Color) -> &[i32; PAWNS_PER_COLOR] {
        &self.pawns[color.index()]
    }

    /// Sets the encoded position of the given pawn.
    pub fn set(&mut self, color: Color, pawn: usize, pos: i32) -> Result<(), &'static str> {
        if pawn >= PAWNS_PER_COLOR {
            return Err("Pawn index out of bounds");
        }
        self.pawns[color.index()][pawn] = pos;
        Ok(())
    }

    /// Checks whether any pawn of any color occupies the encoded position.
    pub fn is_occupied(&self, pos: i32) -> bool {
        self.pawns.iter().flatten().any(|p| *p == pos)
    }

    /// Counts pawns of one color at the encoded position.
    pub fn count_at(&self, color: Color, pos: i32) -> usize {
        self.pawns[color.index()].iter().filter(|p| **p == pos).count()
    }

    /// All pawns standing on the encoded position, as (color, pawn index).
    pub fn occupants(&self, pos: i32) -> Vec<(Color, usize)> {
        let mut found = Vec::new();
        for color in Color::ALL {
            for (pawn, p) in self.pawns[color.index()].iter().enumerate() {
                if *p == pos {
                    found.push((color, pawn));
                }
            }
        }
        found
    }

    /// Checks for a winner: the first color with all four pawns at goal.
    pub fn winner(&self) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|color| self.pawns[color.index()].iter().all(|p| *p == GOAL))
    }

    /// Checks whether the game is finished.
    pub fn is_finished(&self) -> bool {
        self.winner().is_some()
    }
}

/// Current status of the game as replicated from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for players to join.
    Waiting,
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(Color),
}

impl GameStatus {
    /// Whether actions may still be submitted.
    pub fn is_active(&self) -> bool {
        matches!(self, GameStatus::InProgress)
    }
}

// Home capacity and pawn count agree; a full home always has a slot
// for every pawn of its color.
const _: () = assert!(HOME_SLOTS as usize == PAWNS_PER_COLOR);
