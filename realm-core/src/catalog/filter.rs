//! Filter criteria and the per-record match predicate.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{Rarity, Record};

/// Current search, rarity and tag selections.
///
/// All three criteria are ANDed together. Tags are ANDed among themselves as
/// well: a record must carry every selected tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Lowercased name substring; empty matches everything.
    pub search: String,
    /// Single selected rarity grade.
    pub rarity: Option<Rarity>,
    /// Selected tags.
    pub tags: BTreeSet<String>,
}

impl FilterState {
    /// Whether no criteria are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.rarity.is_none() && self.tags.is_empty()
    }

    /// Store `text` lowercased as the name search.
    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_lowercase();
    }

    /// Select `rarity`, or clear it when it is already selected.
    pub fn toggle_rarity(&mut self, rarity: Rarity) {
        self.rarity = if self.rarity == Some(rarity) {
            None
        } else {
            Some(rarity)
        };
    }

    /// Add `tag` to the selection, or remove it when already selected.
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.tags.remove(tag) {
            self.tags.insert(tag.to_string());
        }
    }

    /// Clear every criterion.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Test a record against the search, rarity and tag criteria.
    ///
    /// Category is not checked here; the engine restricts to the active
    /// category before applying this predicate.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        let search_ok = self.search.is_empty() || record.name.to_lowercase().contains(&self.search);
        let rarity_ok = self.rarity.is_none_or(|r| record.rarity == Some(r));
        let tags_ok = self.tags.iter().all(|t| record.tag_text_contains(t));
        search_ok && rarity_ok && tags_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn slime() -> Record {
        Record::new(Category::Monster, "Slime")
            .with_rarity(Rarity::C)
            .with_tags("Slow, Weak")
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = FilterState::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&slime()));
        assert!(filter.matches(&Record::new(Category::Pet, "Untagged")));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let mut filter = FilterState::default();
        filter.set_search("SLI");
        assert_eq!(filter.search, "sli");
        assert!(filter.matches(&slime()));
        filter.set_search("ime");
        assert!(filter.matches(&slime()));
        filter.set_search("zzz");
        assert!(!filter.matches(&slime()));
    }

    #[test]
    fn rarity_toggle_selects_replaces_and_clears() {
        let mut filter = FilterState::default();
        filter.toggle_rarity(Rarity::C);
        assert_eq!(filter.rarity, Some(Rarity::C));
        filter.toggle_rarity(Rarity::S);
        assert_eq!(filter.rarity, Some(Rarity::S));
        assert!(!filter.matches(&slime()));
        filter.toggle_rarity(Rarity::S);
        assert_eq!(filter.rarity, None);
    }

    #[test]
    fn unrated_records_fail_any_rarity_filter() {
        let mut filter = FilterState::default();
        filter.toggle_rarity(Rarity::D);
        assert!(!filter.matches(&Record::new(Category::Item, "Blank")));
    }

    #[test]
    fn tags_require_every_selection() {
        let mut filter = FilterState::default();
        filter.toggle_tag("Slow");
        assert!(filter.matches(&slime()));
        filter.toggle_tag("Weak");
        assert!(filter.matches(&slime()));
        filter.toggle_tag("Fast");
        assert!(!filter.matches(&slime()));
    }

    #[test]
    fn tag_match_is_raw_substring() {
        let armory = Record::new(Category::Item, "Rifle").with_tags("Firearm, Heavy");
        let mut filter = FilterState::default();
        filter.toggle_tag("Fire");
        assert!(filter.matches(&armory));
    }

    #[test]
    fn toggle_tag_twice_restores_selection() {
        let mut filter = FilterState::default();
        filter.toggle_tag("Weak");
        let before = filter.tags.clone();
        filter.toggle_tag("Slow");
        filter.toggle_tag("Slow");
        assert_eq!(filter.tags, before);
    }
}
