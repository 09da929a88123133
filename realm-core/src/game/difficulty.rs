//! Difficulty presets and the icon palette.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RealmError;

/// Icon names for tile faces, in the order pairs are drawn from.
pub const ICON_PALETTE: [&str; 12] = [
    "dragon",
    "ghost",
    "hat-wizard",
    "skull",
    "dungeon",
    "shield-halved",
    "gem",
    "crown",
    "fire",
    "bolt",
    "scroll",
    "flask",
];

/// Board size preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// 4 pairs on a 4-column grid.
    Easy,
    /// 6 pairs on a 4-column grid.
    Normal,
    /// 8 pairs on a 4-column grid.
    Hard,
    /// 12 pairs on a 6-column grid.
    Expert,
}

impl Difficulty {
    /// Every preset, easiest first.
    pub const ALL: [Difficulty; 4] = [Self::Easy, Self::Normal, Self::Hard, Self::Expert];

    /// Number of icon pairs on the board.
    #[must_use]
    pub fn pairs(self) -> usize {
        match self {
            Self::Easy => 4,
            Self::Normal => 6,
            Self::Hard => 8,
            Self::Expert => 12,
        }
    }

    /// Grid column count.
    #[must_use]
    pub fn columns(self) -> usize {
        match self {
            Self::Easy | Self::Normal | Self::Hard => 4,
            Self::Expert => 6,
        }
    }

    /// Total tiles (two per pair).
    #[must_use]
    pub fn tile_count(self) -> usize {
        self.pairs() * 2
    }

    /// Lowercase preset name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = RealmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "normal" | "medium" => Ok(Self::Normal),
            "hard" => Ok(Self::Hard),
            "expert" => Ok(Self::Expert),
            other => Err(RealmError::UnknownDifficulty(other.to_string())),
        }
    }
}
