//! Board layout tables: the per-color constants shared with the server.
//!
//! The layout is injected configuration, not a module-level global. Every
//! value here must stay bit-identical to the authoritative server's tables
//! or client predictions will diverge from applied moves.

use super::types::Color;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Length of the shared circular main track.
pub const TRACK_LEN: i32 = 56;

/// Length of each color's private safe corridor.
pub const SAFE_LEN: i32 = 6;

/// Shared terminal sentinel: the pawn has finished.
pub const GOAL: i32 = 999;

/// Capacity of each color's prison ring.
pub const PRISON_SLOTS: i32 = 20;

/// Home-base slots per color.
pub const HOME_SLOTS: i32 = 4;

/// One value per color, used for each layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTable {
    /// Red's entry.
    #[serde(rename = "R")]
    pub r: i32,
    /// Green's entry.
    #[serde(rename = "G")]
    pub g: i32,
    /// Yellow's entry.
    #[serde(rename = "Y")]
    pub y: i32,
    /// Blue's entry.
    #[serde(rename = "B")]
    pub b: i32,
}

impl ColorTable {
    /// Looks up the entry for a color.
    pub fn get(&self, color: Color) -> i32 {
        match color {
            Color::R => self.r,
            Color::G => self.g,
            Color::Y => self.y,
            Color::B => self.b,
        }
    }
}

/// Immutable board layout: where each color starts, turns in, and
/// parks captured or waiting pawns inside the flat position encoding.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Track cell a pawn lands on when leaving home.
    start_index: ColorTable,
    /// Last track cell before the color's corridor entrance.
    entry_index: ColorTable,
    /// First encoded cell of the color's safe corridor.
    safe_base: ColorTable,
    /// First encoded home-base slot (slots ascend from here).
    home_base: ColorTable,
    /// First encoded prison slot (slots descend from here).
    prison_base: ColorTable,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            start_index: ColorTable { r: 0, g: 14, y: 28, b: 42 },
            entry_index: ColorTable { r: 55, g: 13, y: 27, b: 41 },
            safe_base: ColorTable { r: 100, g: 200, y: 300, b: 400 },
            home_base: ColorTable { r: -10, g: -20, y: -30, b: -40 },
            prison_base: ColorTable { r: -100, g: -200, y: -300, b: -400 },
        }
    }
}

impl BoardLayout {
    /// Loads a layout from a TOML file and validates it.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        debug!("Loading board layout from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| LayoutError::new(format!("Failed to read layout file: {}", e)))?;

        let layout: Self = toml::from_str(&content)
            .map_err(|e| LayoutError::new(format!("Failed to parse layout: {}", e)))?;

        layout.validate()?;
        info!("Board layout loaded successfully");
        Ok(layout)
    }

    /// Validates that the layout's zones partition the encoding cleanly.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError` if a start or entry cell falls off the track,
    /// or if any two zones overlap in the flat integer space.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), LayoutError> {
        for color in Color::ALL {
            let start = self.start_index.get(color);
            if !(0..TRACK_LEN).contains(&start) {
                return Err(LayoutError::new(format!(
                    "{} start index {} is off the track",
                    color, start
                )));
            }
            let entry = self.entry_index.get(color);
            if !(0..TRACK_LEN).contains(&entry) {
                return Err(LayoutError::new(format!(
                    "{} entry index {} is off the track",
                    color, entry
                )));
            }
        }

        // Inclusive value ranges of every zone in the flat encoding.
        let mut ranges: Vec<(String, i32, i32)> = vec![
            ("track".to_string(), 0, TRACK_LEN - 1),
            ("goal".to_string(), GOAL, GOAL),
        ];
        for color in Color::ALL {
            let safe = self.safe_base.get(color);
            let home = self.home_base.get(color);
            let prison = self.prison_base.get(color);
            ranges.push((format!("{} corridor", color), safe, safe + SAFE_LEN - 1));
            ranges.push((format!("{} home", color), home, home + HOME_SLOTS - 1));
            ranges.push((format!("{} prison", color), prison - (PRISON_SLOTS - 1), prison));
        }

        ranges.sort_by_key(|(_, lo, _)| *lo);
        for pair in ranges.windows(2) {
            let (ref a_name, _, a_hi) = pair[0];
            let (ref b_name, b_lo, _) = pair[1];
            if b_lo <= a_hi {
                return Err(LayoutError::new(format!(
                    "zones overlap: {} and {}",
                    a_name, b_name
                )));
            }
        }

        Ok(())
    }
}

/// Board layout error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Layout error: {} at {}:{}", message, file, line)]
pub struct LayoutError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LayoutError {
    /// Creates a new layout error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
