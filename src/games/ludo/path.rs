//! Step-by-step path expansion for animation and move reconstruction.
//!
//! A move is stored as a bare (start, end) position pair; the UI needs
//! every intermediate cell to slide the pawn through. The same expansion
//! serves moves detected by diffing two authoritative snapshots, so a
//! remote player's move animates exactly like a local one.

use super::layout::{BoardLayout, GOAL, SAFE_LEN, TRACK_LEN};
use super::position::{self, Zone};
use super::types::{Board, Color, PAWNS_PER_COLOR};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Expands a position transition into the ordered cells to animate
/// through, excluding `start`, including `end`.
///
/// Exits (home to track, prison to home) are instantaneous teleports.
/// Any transition the rules cannot produce degrades to a single-element
/// teleport rather than failing: a stale or surprising server state must
/// never break the animation layer.
#[instrument(skip(layout))]
pub fn generate_path(layout: &BoardLayout, start: i32, end: i32, color: Color) -> Vec<i32> {
    let (Ok(from), Ok(to)) = (
        position::decode(layout, start),
        position::decode(layout, end),
    ) else {
        debug!(start, end, "undecodable transition, teleporting");
        return vec![end];
    };

    match (from, to) {
        // Exits are teleports: no cells between the zones exist.
        (Zone::Home(..), Zone::Track(_)) | (Zone::Prison(..), Zone::Home(..)) => vec![end],

        // Movement fully inside the safe corridor.
        (Zone::Corridor(c0, i0), Zone::Corridor(c1, i1)) if c0 == color && c1 == color && i0 < i1 => {
            corridor_ascent(layout, color, i0 as i32 + 1, i1 as i32)
        }
        (Zone::Corridor(c0, i0), Zone::Goal) if c0 == color => {
            let mut path = corridor_ascent(layout, color, i0 as i32 + 1, SAFE_LEN - 1);
            path.push(GOAL);
            path
        }

        // Track into corridor or goal: ride the track to the entry cell,
        // then ascend the corridor from offset 0.
        (Zone::Track(cell), Zone::Corridor(c1, i1)) if c1 == color => {
            let mut path = track_ride(layout, color, cell as i32);
            path.extend(corridor_ascent(layout, color, 0, i1 as i32));
            path
        }
        (Zone::Track(cell), Zone::Goal) => {
            let mut path = track_ride(layout, color, cell as i32);
            path.extend(corridor_ascent(layout, color, 0, SAFE_LEN - 1));
            path.push(GOAL);
            path
        }

        // Pure on-track movement.
        (Zone::Track(s), Zone::Track(e)) if s != e => {
            let s = s as i32;
            let steps = (e as i32 - s).rem_euclid(TRACK_LEN);
            (1..=steps).map(|k| (s + k).rem_euclid(TRACK_LEN)).collect()
        }

        _ => {
            debug!(start, end, "unhandled transition, teleporting");
            vec![end]
        }
    }
}

/// Corridor cells from offset `lo` through `hi`, encoded.
fn corridor_ascent(layout: &BoardLayout, color: Color, lo: i32, hi: i32) -> Vec<i32> {
    let base = layout.safe_base().get(color);
    (lo..=hi).map(|i| base + i).collect()
}

/// Track cells from the one after `cell` through the color's entry cell.
fn track_ride(layout: &BoardLayout, color: Color, cell: i32) -> Vec<i32> {
    let entry = layout.entry_index().get(color);
    let steps = (entry - cell).rem_euclid(TRACK_LEN);
    (1..=steps).map(|k| (cell + k).rem_euclid(TRACK_LEN)).collect()
}

/// One pawn's movement between two authoritative snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PawnTransition {
    /// Color of the pawn that moved.
    pub color: Color,
    /// Index of the pawn that moved (0-3).
    pub pawn: usize,
    /// Encoded position in the previous snapshot.
    pub from: i32,
    /// Encoded position in the new snapshot.
    pub to: i32,
}

/// Diffs two board snapshots into per-pawn transitions.
///
/// The realtime channel delivers whole snapshots, not moves; this
/// recovers what moved so each transition can be fed to `generate_path`.
#[instrument(skip(prev, next))]
pub fn diff_snapshots(prev: &Board, next: &Board) -> Vec<PawnTransition> {
    let mut transitions = Vec::new();
    for color in Color::ALL {
        for pawn in 0..PAWNS_PER_COLOR {
            let (Some(from), Some(to)) = (prev.position(color, pawn), next.position(color, pawn))
            else {
                continue;
            };
            if from != to {
                transitions.push(PawnTransition { color, pawn, from, to });
            }
        }
    }
    debug!(count = transitions.len(), "snapshot diff computed");
    transitions
}

/// Fate of an in-flight predicted animation once authoritative state lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// The server agreed with the prediction; let the animation finish.
    Confirmed,
    /// The server placed the pawn elsewhere; discard the animation and
    /// snap (or re-animate) to the actual position.
    Superseded {
        /// The authoritative position.
        actual: i32,
    },
}

/// Compares a predicted animation target against the authoritative
/// position for the same pawn.
pub fn reconcile(predicted_target: i32, authoritative: i32) -> Reconciliation {
    if predicted_target == authoritative {
        Reconciliation::Confirmed
    } else {
        Reconciliation::Superseded {
            actual: authoritative,
        }
    }
}
