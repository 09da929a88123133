//! Shared test hooks that record every presentation event.

#![allow(dead_code)]

use std::collections::BTreeSet;

use parking_lot::Mutex;

use realm_core::game::{GamePhase, MemoryMatch};
use realm_core::navigation::View;
use realm_core::types::Record;
use realm_session::PresentationHooks;

#[derive(Default)]
pub struct RecordingHooks {
    pub filters: Mutex<Vec<Vec<String>>>,
    pub facets: Mutex<Vec<Vec<String>>>,
    pub views: Mutex<Vec<View>>,
    pub games: Mutex<Vec<(GamePhase, u32, usize)>>,
}

impl RecordingHooks {
    pub fn last_visible(&self) -> Vec<String> {
        self.filters.lock().last().cloned().unwrap_or_default()
    }

    pub fn last_view(&self) -> Option<View> {
        self.views.lock().last().copied()
    }

    pub fn game_events(&self) -> usize {
        self.games.lock().len()
    }
}

impl PresentationHooks for RecordingHooks {
    fn on_filter_changed(&self, visible: &[&Record]) {
        self.filters
            .lock()
            .push(visible.iter().map(|r| r.name.clone()).collect());
    }

    fn on_facets_changed(&self, facets: &BTreeSet<String>) {
        self.facets.lock().push(facets.iter().cloned().collect());
    }

    fn on_game_state_changed(&self, game: &MemoryMatch) {
        self.games
            .lock()
            .push((game.phase(), game.elapsed_secs(), game.pending().len()));
    }

    fn on_view_changed(&self, view: View) {
        self.views.lock().push(view);
    }
}
