//! Memory Match — the archive's tile-matching minigame.
//!
//! ```text
//!   Setup ──start(difficulty)──▶ Playing ──last pair matched──▶ Won
//!     ▲                            │                             │
//!     └──────────── reset() ◀──────┴─────────────────────────────┘
//! ```
//!
//! The state machine is synchronous. Wall-clock concerns (the one-second
//! game clock and the flip-back delay after a mismatch) belong to whoever
//! drives it: call [`MemoryMatch::tick`] once per second and
//! [`MemoryMatch::resolve_mismatch`] after the delay.

pub mod difficulty;

pub use difficulty::{Difficulty, ICON_PALETTE};

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{RealmError, Result};

/// Points awarded per matched pair.
pub const MATCH_POINTS: u32 = 10;

/// Index into [`ICON_PALETTE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconId(pub usize);

impl IconId {
    /// Palette name of this icon.
    #[must_use]
    pub fn name(self) -> &'static str {
        ICON_PALETTE.get(self.0).copied().unwrap_or("unknown")
    }
}

/// One board tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Face icon; two tiles share each icon.
    pub icon: IconId,
    /// Face-up.
    pub flipped: bool,
    /// Permanently matched (stays face-up).
    pub matched: bool,
    /// Board position.
    pub position: usize,
}

/// Where the game is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a difficulty choice.
    #[default]
    Setup,
    /// Tiles can be flipped; the clock runs.
    Playing,
    /// Every pair matched; the clock is stopped.
    Won {
        /// Final score.
        score: u32,
        /// Seconds on the clock when the last pair matched.
        elapsed_secs: u32,
    },
}

/// Result of a [`MemoryMatch::flip_tile`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Nothing changed (not playing, tile already up, or a pair is pending).
    Ignored,
    /// First tile of a pair turned face-up.
    Revealed {
        /// Tile turned.
        index: usize,
    },
    /// Second tile matched the first.
    Matched {
        /// First tile of the pair.
        first: usize,
        /// Second tile of the pair.
        second: usize,
        /// Score after the match.
        score: u32,
    },
    /// Second tile did not match. Both stay face-up until
    /// [`MemoryMatch::resolve_mismatch`].
    Mismatched {
        /// First tile of the pair.
        first: usize,
        /// Second tile of the pair.
        second: usize,
    },
    /// The final pair matched.
    Won {
        /// Final score.
        score: u32,
        /// Seconds on the clock.
        elapsed_secs: u32,
    },
}

/// Memory-match game state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryMatch {
    phase: GamePhase,
    difficulty: Option<Difficulty>,
    tiles: Vec<Tile>,
    pending: Vec<usize>,
    score: u32,
    elapsed_secs: u32,
    matched_pairs: usize,
}

impl MemoryMatch {
    /// A game in [`GamePhase::Setup`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh round, shuffling with the thread-local RNG.
    pub fn start(&mut self, difficulty: Difficulty) {
        self.start_with_rng(difficulty, &mut rand::thread_rng());
    }

    /// Start a fresh round with a caller-supplied RNG.
    ///
    /// Any previous round is discarded. The board holds two copies of each
    /// of the first `difficulty.pairs()` palette icons in uniformly shuffled
    /// order.
    pub fn start_with_rng<R: Rng + ?Sized>(&mut self, difficulty: Difficulty, rng: &mut R) {
        let mut icons: Vec<IconId> = (0..difficulty.pairs())
            .flat_map(|i| [IconId(i), IconId(i)])
            .collect();
        icons.shuffle(rng);

        *self = Self {
            phase: GamePhase::Playing,
            difficulty: Some(difficulty),
            tiles: icons
                .into_iter()
                .enumerate()
                .map(|(position, icon)| Tile {
                    icon,
                    flipped: false,
                    matched: false,
                    position,
                })
                .collect(),
            ..Self::default()
        };
    }

    /// Flip the tile at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`RealmError::TileOutOfRange`] when `index` is not on the
    /// board during play.
    pub fn flip_tile(&mut self, index: usize) -> Result<FlipOutcome> {
        if self.phase != GamePhase::Playing {
            return Ok(FlipOutcome::Ignored);
        }
        let len = self.tiles.len();
        let tile = self
            .tiles
            .get_mut(index)
            .ok_or(RealmError::TileOutOfRange { index, len })?;

        if self.pending.len() >= 2 || tile.flipped || tile.matched {
            return Ok(FlipOutcome::Ignored);
        }

        tile.flipped = true;
        self.pending.push(index);

        let [first, second] = self.pending[..] else {
            return Ok(FlipOutcome::Revealed { index });
        };

        if self.tiles[first].icon != self.tiles[second].icon {
            return Ok(FlipOutcome::Mismatched { first, second });
        }

        self.tiles[first].matched = true;
        self.tiles[second].matched = true;
        self.pending.clear();
        self.score += MATCH_POINTS;
        self.matched_pairs += 1;

        if self.matched_pairs == self.total_pairs() {
            self.phase = GamePhase::Won {
                score: self.score,
                elapsed_secs: self.elapsed_secs,
            };
            return Ok(FlipOutcome::Won {
                score: self.score,
                elapsed_secs: self.elapsed_secs,
            });
        }

        Ok(FlipOutcome::Matched {
            first,
            second,
            score: self.score,
        })
    }

    /// Turn a mismatched pending pair face-down again.
    ///
    /// Returns `false` (and changes nothing) when no mismatched pair is
    /// pending, e.g. because the game was reset in the meantime.
    pub fn resolve_mismatch(&mut self) -> bool {
        if self.phase != GamePhase::Playing || self.pending.len() != 2 {
            return false;
        }
        for index in self.pending.drain(..) {
            if let Some(tile) = self.tiles.get_mut(index) {
                tile.flipped = false;
            }
        }
        true
    }

    /// Advance the game clock by one second. No-op unless playing.
    pub fn tick(&mut self) -> bool {
        if self.phase == GamePhase::Playing {
            self.elapsed_secs += 1;
            true
        } else {
            false
        }
    }

    /// Return to [`GamePhase::Setup`], discarding the board.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Preset of the current round.
    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Board tiles in position order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Face-up tiles awaiting resolution (0–2).
    #[must_use]
    pub fn pending(&self) -> &[usize] {
        &self.pending
    }

    /// Whether a mismatched pair is waiting to flip back.
    #[must_use]
    pub fn awaiting_flip_back(&self) -> bool {
        self.pending.len() == 2
    }

    /// Running score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Seconds on the game clock.
    #[must_use]
    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    /// Pairs matched so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Pairs on the board (0 in setup).
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.difficulty.map_or(0, Difficulty::pairs)
    }

    /// Grid columns (0 in setup).
    #[must_use]
    pub fn columns(&self) -> usize {
        self.difficulty.map_or(0, Difficulty::columns)
    }
}
