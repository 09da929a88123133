//! Core type definitions for the realm archive.
//!
//! All types are serializable so records and UI state can be cached or
//! persisted as-is.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RealmError;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The fixed set of archive categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Playable and story characters.
    #[default]
    Character,
    /// Hostile creatures.
    Monster,
    /// Companion creatures.
    Pet,
    /// Equipment and artifacts.
    Item,
    /// Spells and arcane arts.
    Magic,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 5] = [
        Self::Character,
        Self::Monster,
        Self::Pet,
        Self::Item,
        Self::Magic,
    ];

    /// Display name, matching the value stored in the `category` column.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Character => "Character",
            Self::Monster => "Monster",
            Self::Pet => "Pet",
            Self::Item => "Item",
            Self::Magic => "Magic",
        }
    }

    /// All categories except `self`, for the quick-switch menu.
    pub fn others(self) -> impl Iterator<Item = Category> {
        Self::ALL.into_iter().filter(move |c| *c != self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RealmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RealmError::UnknownCategory(trimmed.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Rarity
// ---------------------------------------------------------------------------

/// Rarity grade. Ordered so that `S > A > B > C > D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    /// Common.
    D,
    /// Uncommon.
    C,
    /// Rare.
    B,
    /// Epic.
    A,
    /// Legendary.
    S,
}

impl Rarity {
    /// Every grade, highest first (filter chip order).
    pub const ALL: [Rarity; 5] = [Self::S, Self::A, Self::B, Self::C, Self::D];

    /// Single-letter grade.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = RealmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RealmError::UnknownRarity(trimmed.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// Maximum number of extra carousel images per record.
pub const MAX_EXTRA_IMAGES: usize = 3;

/// One archive entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Which category the record belongs to.
    pub category: Category,
    /// Display name; the lookup key.
    pub name: String,
    /// Optional title shown under the name.
    #[serde(default)]
    pub nickname: Option<String>,
    /// Rarity grade, absent when the source leaves it blank.
    #[serde(default)]
    pub rarity: Option<Rarity>,
    /// Card and detail hero image.
    #[serde(default)]
    pub main_image_url: String,
    /// Up to [`MAX_EXTRA_IMAGES`] carousel images, blanks removed.
    #[serde(default)]
    pub extra_images: Vec<String>,
    /// Raw comma-separated tag text, kept verbatim for substring matching.
    #[serde(default)]
    pub tags: String,
    /// Lore text.
    #[serde(default)]
    pub story: String,
}

impl Record {
    /// Create a bare record with only a category and name.
    #[must_use]
    pub fn new(category: Category, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
            nickname: None,
            rarity: None,
            main_image_url: String::new(),
            extra_images: Vec::new(),
            tags: String::new(),
            story: String::new(),
        }
    }

    /// Set the rarity grade.
    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = Some(rarity);
        self
    }

    /// Set the raw tag text.
    #[must_use]
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    /// Set the nickname.
    #[must_use]
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    /// Set the lore text.
    #[must_use]
    pub fn with_story(mut self, story: impl Into<String>) -> Self {
        self.story = story.into();
        self
    }

    /// Set the main image and the carousel images. Blank URLs are dropped and
    /// only the first [`MAX_EXTRA_IMAGES`] are kept.
    #[must_use]
    pub fn with_images<I, S>(mut self, main: impl Into<String>, extras: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.main_image_url = main.into();
        self.extra_images = extras
            .into_iter()
            .map(Into::into)
            .filter(|url: &String| !url.trim().is_empty())
            .take(MAX_EXTRA_IMAGES)
            .collect();
        self
    }

    /// Trimmed, non-empty tag tokens from the raw tag text, in source order.
    pub fn tag_tokens(&self) -> impl Iterator<Item = &str> {
        self.tags.split(',').map(str::trim).filter(|t| !t.is_empty())
    }

    /// Raw substring test against the unsplit tag text.
    ///
    /// `"Fire"` matches a record tagged `"Firearm"`; see `DESIGN.md`.
    #[must_use]
    pub fn tag_text_contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}
