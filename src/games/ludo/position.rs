//! Flat position encoding and its decoded zone form.
//!
//! Every pawn position travels as a single signed integer so that board
//! snapshots stay wire-compatible with the authoritative server. Rule
//! logic never branches on raw ranges: a position is decoded into a
//! `Zone` on entry and re-encoded at the boundary.

use super::error::EngineError;
use super::layout::{BoardLayout, GOAL, HOME_SLOTS, PRISON_SLOTS, SAFE_LEN, TRACK_LEN};
use super::types::Color;

/// Decoded form of an encoded pawn position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// On the shared main track, at the given cell (0-55).
    Track(u8),
    /// Inside the color's private safe corridor, at the given offset (0-5).
    Corridor(Color, u8),
    /// In the color's home base, at the given slot (0-3).
    Home(Color, u8),
    /// Held in the color's prison ring, at the given slot (0-19).
    /// The color is the capturing owner, not the pawn's own color.
    Prison(Color, u8),
    /// Finished.
    Goal,
}

/// Decodes an encoded position into its zone.
///
/// # Errors
///
/// Returns `EngineError` if the value falls in no zone of the layout;
/// such a value can only come from a malformed snapshot.
pub fn decode(layout: &BoardLayout, pos: i32) -> Result<Zone, EngineError> {
    if pos == GOAL {
        return Ok(Zone::Goal);
    }
    if (0..TRACK_LEN).contains(&pos) {
        return Ok(Zone::Track(pos as u8));
    }
    for color in Color::ALL {
        let safe = layout.safe_base().get(color);
        if (safe..safe + SAFE_LEN).contains(&pos) {
            return Ok(Zone::Corridor(color, (pos - safe) as u8));
        }
        let home = layout.home_base().get(color);
        if (home..home + HOME_SLOTS).contains(&pos) {
            return Ok(Zone::Home(color, (pos - home) as u8));
        }
        let prison = layout.prison_base().get(color);
        if (prison - (PRISON_SLOTS - 1)..=prison).contains(&pos) {
            return Ok(Zone::Prison(color, (prison - pos) as u8));
        }
    }
    Err(EngineError::new(format!(
        "position {} falls in no zone of the board layout",
        pos
    )))
}

/// Encodes a zone back into its flat integer form.
pub fn encode(layout: &BoardLayout, zone: Zone) -> i32 {
    match zone {
        Zone::Track(cell) => cell as i32,
        Zone::Corridor(color, idx) => layout.safe_base().get(color) + idx as i32,
        Zone::Home(color, slot) => layout.home_base().get(color) + slot as i32,
        Zone::Prison(color, slot) => layout.prison_base().get(color) - slot as i32,
        Zone::Goal => GOAL,
    }
}

/// Checks whether the position is on the shared main track.
pub fn is_on_track(pos: i32) -> bool {
    (0..TRACK_LEN).contains(&pos)
}

/// Checks whether the position has reached the goal.
pub fn is_at_goal(pos: i32) -> bool {
    pos == GOAL
}

/// Checks whether the position is inside the color's own safe corridor.
pub fn is_in_own_corridor(layout: &BoardLayout, pos: i32, color: Color) -> bool {
    let safe = layout.safe_base().get(color);
    (safe..safe + SAFE_LEN).contains(&pos)
}

/// Checks whether the position is a home-base slot of the color.
pub fn is_in_home(layout: &BoardLayout, pos: i32, color: Color) -> bool {
    let home = layout.home_base().get(color);
    (home..home + HOME_SLOTS).contains(&pos)
}

/// Checks whether the position sits in the prison of any other color.
pub fn is_in_enemy_prison(layout: &BoardLayout, pos: i32, color: Color) -> bool {
    Color::ALL
        .into_iter()
        .filter(|owner| *owner != color)
        .any(|owner| in_prison_of(layout, pos, owner))
}

/// Checks whether the position sits in the color's own prison.
///
/// A pawn never legitimately occupies its own prison; callers treat a
/// `true` here as an invariant violation, not a game state.
pub fn is_in_own_prison(layout: &BoardLayout, pos: i32, color: Color) -> bool {
    in_prison_of(layout, pos, color)
}

fn in_prison_of(layout: &BoardLayout, pos: i32, owner: Color) -> bool {
    let prison = layout.prison_base().get(owner);
    (prison - (PRISON_SLOTS - 1)..=prison).contains(&pos)
}
