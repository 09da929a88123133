//! Browsing session.
//!
//! [`Session`] is the single context object a front end talks to. It owns
//! the filter engine and navigation state, saves navigation on every
//! change, and reports each change through [`PresentationHooks`].

use std::sync::Arc;

use tracing::{debug, info, warn};

use realm_core::carousel::Carousel;
use realm_core::catalog::CatalogEngine;
use realm_core::navigation::{NavState, View};
use realm_core::persistence::StateStore;
use realm_core::types::{Category, Rarity, Record};

use crate::hooks::PresentationHooks;

/// What the detail view shows for one record.
#[derive(Debug, Clone)]
pub struct DetailView {
    /// The record being shown.
    pub record: Record,
    /// Carousel over its extra images.
    pub carousel: Carousel,
}

/// One user's browsing session.
pub struct Session {
    engine: CatalogEngine,
    nav: NavState,
    store: Option<StateStore>,
    hooks: Arc<dyn PresentationHooks>,
}

impl Session {
    /// Start on the landing view with no saved state.
    #[must_use]
    pub fn new(records: Vec<Record>, hooks: Arc<dyn PresentationHooks>) -> Self {
        Self {
            engine: CatalogEngine::new(records, Category::default()),
            nav: NavState::default(),
            store: None,
            hooks,
        }
    }

    /// Save navigation state to `store` from now on.
    #[must_use]
    pub fn with_store(mut self, store: StateStore) -> Self {
        self.store = Some(store);
        self
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Restore the last saved view and category.
    ///
    /// A saved detail view comes back as its category's archive grid,
    /// since the record that was open is not part of the saved state.
    /// Unreadable state is logged and treated as absent.
    pub fn restore(&mut self) -> NavState {
        let saved = match self.store.as_ref().map(StateStore::load_nav) {
            Some(Ok(saved)) => saved,
            Some(Err(e)) => {
                warn!(error = %e, "Failed to load navigation state");
                None
            }
            None => None,
        };

        let mut nav = NavState::resolve(saved);
        if nav.view == View::Detail {
            nav.view = View::Archive;
        }
        info!(view = %nav.view, category = ?nav.category, "Restored navigation state");

        if let Some(category) = nav.category {
            self.engine.set_category(category);
            self.emit_facets();
            self.emit_filter();
        }
        self.nav = nav;
        self.persist();
        self.hooks.on_view_changed(nav.view);
        nav
    }

    /// Open `category`'s archive grid with cleared filters.
    pub fn select_category(&mut self, category: Category) {
        self.engine.set_category(category);
        self.nav = NavState::archive(category);
        self.persist();
        self.emit_facets();
        self.emit_filter();
        self.hooks.on_view_changed(View::Archive);
    }

    /// Switch to `view`, keeping the current category.
    pub fn go_to(&mut self, view: View) {
        self.nav.view = view;
        self.persist();
        self.hooks.on_view_changed(view);
    }

    /// Open the detail view for the first record named `name`.
    ///
    /// A record from another category switches the catalog to that
    /// category (clearing filters) so the grid behind the detail view
    /// matches the saved navigation. An unknown name is a no-op and
    /// returns `None`.
    pub fn show_detail(&mut self, name: &str) -> Option<DetailView> {
        let record = match self.engine.find_by_name(name) {
            Ok(record) => record.clone(),
            Err(e) => {
                debug!(error = %e, "Detail lookup ignored");
                return None;
            }
        };
        if record.category != self.engine.category() {
            self.engine.set_category(record.category);
            self.emit_facets();
            self.emit_filter();
        }
        self.nav.category = Some(record.category);
        self.go_to(View::Detail);

        let carousel = Carousel::new(record.extra_images.iter().cloned());
        Some(DetailView { record, carousel })
    }

    // ------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------

    /// Replace the search text.
    pub fn set_search(&mut self, text: &str) {
        self.engine.set_search(text);
        self.emit_filter();
    }

    /// Select `rarity`, or clear it if it is already selected.
    pub fn toggle_rarity(&mut self, rarity: Rarity) {
        self.engine.toggle_rarity(rarity);
        self.emit_filter();
    }

    /// Add or remove `tag` from the tag selection.
    pub fn toggle_tag(&mut self, tag: &str) {
        self.engine.toggle_tag(tag);
        self.emit_filter();
    }

    /// Show the archive grid filtered to exactly `tag`, as when a tag chip
    /// on the detail view is clicked.
    pub fn focus_tag(&mut self, tag: &str) {
        self.engine.focus_tag(tag);
        self.emit_filter();
        self.go_to(View::Archive);
    }

    /// Clear search, rarity and tag selection.
    pub fn reset_filters(&mut self) {
        self.engine.reset_filters();
        self.emit_filter();
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Current navigation state.
    #[must_use]
    pub fn nav(&self) -> NavState {
        self.nav
    }

    /// The underlying filter engine.
    #[must_use]
    pub fn engine(&self) -> &CatalogEngine {
        &self.engine
    }

    /// Records passing the active filters.
    #[must_use]
    pub fn visible_records(&self) -> Vec<&Record> {
        self.engine.visible_records()
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn persist(&self) {
        let Some(store) = &self.store else { return };
        if let Err(e) = store.save_nav(&self.nav) {
            warn!(error = %e, "Failed to save navigation state");
        }
    }

    fn emit_filter(&self) {
        let visible = self.engine.visible_records();
        debug!(category = %self.engine.category(), visible = visible.len(), "Filter changed");
        self.hooks.on_filter_changed(&visible);
    }

    fn emit_facets(&self) {
        self.hooks.on_facets_changed(self.engine.facet_tags());
    }
}
