//! Catalog Filter Engine.
//!
//! Holds the loaded record set together with the active category and filter
//! criteria, and derives what the gallery shows:
//!
//!   visible = records where category == active
//!                       ∧ lowercase(name) ⊇ search
//!                       ∧ (rarity unset ∨ rarity == selected)
//!                       ∧ ∀ selected tag: raw tag text ⊇ tag
//!
//! Output keeps load order. The facet list (distinct tags of the active
//! category) is cached and rebuilt on every category change or reload.

pub mod facets;
pub mod filter;

pub use filter::FilterState;

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{RealmError, Result};
use crate::types::{Category, Rarity, Record};

/// The filter engine. One per session; no global state.
#[derive(Debug, Clone)]
pub struct CatalogEngine {
    records: Vec<Record>,
    category: Category,
    filters: FilterState,
    facets: BTreeSet<String>,
}

impl CatalogEngine {
    /// Create an engine over `records` with `category` active and no filters.
    #[must_use]
    pub fn new(records: Vec<Record>, category: Category) -> Self {
        Self::with_filters(records, category, FilterState::default())
    }

    /// Create an engine with an initial category and filter state, e.g. when
    /// restoring a previous session.
    #[must_use]
    pub fn with_filters(records: Vec<Record>, category: Category, filters: FilterState) -> Self {
        let facets = facets::facet_tags(&records, category);
        Self {
            records,
            category,
            filters,
            facets,
        }
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Switch the active category. Always clears every filter, even when the
    /// category does not change, and rebuilds the facet list.
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
        self.filters.clear();
        self.facets = facets::facet_tags(&self.records, category);
        debug!(%category, facets = self.facets.len(), "Category selected");
    }

    /// Set the name search. Stored lowercased; empty matches everything.
    pub fn set_search(&mut self, text: &str) {
        self.filters.set_search(text);
    }

    /// Single-select rarity toggle.
    pub fn toggle_rarity(&mut self, rarity: Rarity) {
        self.filters.toggle_rarity(rarity);
    }

    /// Multi-select tag toggle.
    pub fn toggle_tag(&mut self, tag: &str) {
        self.filters.toggle_tag(tag);
    }

    /// Narrow to exactly one tag, keeping search and rarity.
    ///
    /// This is the detail view's "jump to tag" action.
    pub fn focus_tag(&mut self, tag: &str) {
        self.filters.tags.clear();
        self.filters.tags.insert(tag.to_string());
    }

    /// Clear search, rarity and tags. The category is kept.
    pub fn reset_filters(&mut self) {
        self.filters.clear();
    }

    /// Replace the record set (e.g. after a reload). Category and filters are
    /// kept; facets are rebuilt.
    pub fn replace_records(&mut self, records: Vec<Record>) {
        self.records = records;
        self.facets = facets::facet_tags(&self.records, self.category);
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Records of the active category that pass every filter, in load order.
    #[must_use]
    pub fn visible_records(&self) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| r.category == self.category && self.filters.matches(r))
            .collect()
    }

    /// Distinct tags of the active category.
    #[must_use]
    pub fn facet_tags(&self) -> &BTreeSet<String> {
        &self.facets
    }

    /// Exact name lookup across every category. The first match in load
    /// order wins when names repeat.
    ///
    /// # Errors
    ///
    /// Returns [`RealmError::NotFound`] when no record has that name.
    pub fn find_by_name(&self, name: &str) -> Result<&Record> {
        self.records
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| RealmError::NotFound(name.to_string()))
    }

    /// The active category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// The current filter criteria.
    #[must_use]
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Every loaded record, in load order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}
