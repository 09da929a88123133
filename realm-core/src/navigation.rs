//! Named views and navigation state.
//!
//! The front end switches between a fixed set of views. The core only
//! tracks which one is active and which category was last browsed, so the
//! pair can be saved and restored across reloads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RealmError;
use crate::types::Category;

/// The three views of the archive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    /// Title screen with the category picker.
    #[default]
    Landing,
    /// Filterable grid of one category.
    Archive,
    /// Single record with lore and carousel.
    Detail,
}

impl View {
    /// Stable identifier used when persisting the view.
    #[must_use]
    pub fn page_id(self) -> &'static str {
        match self {
            Self::Landing => "page-1",
            Self::Archive => "page-2",
            Self::Detail => "page-3",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.page_id())
    }
}

impl FromStr for View {
    type Err = RealmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "page-1" => Ok(Self::Landing),
            "page-2" => Ok(Self::Archive),
            "page-3" => Ok(Self::Detail),
            other => Err(RealmError::Serialization(format!("unknown view: {other}"))),
        }
    }
}

/// Active view plus the last browsed category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    /// Which view is showing.
    pub view: View,
    /// Last category opened, if any.
    pub category: Option<Category>,
}

impl NavState {
    /// State after opening `category`'s archive grid.
    #[must_use]
    pub fn archive(category: Category) -> Self {
        Self {
            view: View::Archive,
            category: Some(category),
        }
    }

    /// Decide where a restored session should land.
    ///
    /// A saved view other than the landing page is only honored when a
    /// category was saved with it; without one there is nothing to show, so
    /// the landing page is used.
    #[must_use]
    pub fn resolve(saved: Option<Self>) -> Self {
        match saved {
            Some(state) if state.view != View::Landing && state.category.is_some() => state,
            Some(state) => Self {
                view: View::Landing,
                category: state.category,
            },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids_round_trip() {
        for view in [View::Landing, View::Archive, View::Detail] {
            assert_eq!(view.page_id().parse::<View>().ok(), Some(view));
        }
        assert!("page-9".parse::<View>().is_err());
    }

    #[test]
    fn resolve_restores_archive_with_category() {
        let saved = NavState::archive(Category::Pet);
        assert_eq!(NavState::resolve(Some(saved)), saved);
    }

    #[test]
    fn resolve_falls_back_to_landing_without_category() {
        let saved = NavState {
            view: View::Detail,
            category: None,
        };
        assert_eq!(NavState::resolve(Some(saved)).view, View::Landing);
        assert_eq!(NavState::resolve(None), NavState::default());
    }
}
