//! Presentation hooks.
//!
//! The session and game driver never render anything themselves. They call
//! these hooks after every state change and leave the drawing to whatever
//! front end is attached: the terminal binary, a test recorder, or nothing.

use std::collections::BTreeSet;

use realm_core::game::MemoryMatch;
use realm_core::navigation::View;
use realm_core::types::Record;

/// Callbacks fired on state changes. Every method defaults to a no-op.
///
/// Hooks are invoked from the game driver's background tasks as well as
/// from the caller's thread, so implementations must be `Send + Sync`.
/// No internal lock is held while a hook runs.
pub trait PresentationHooks: Send + Sync {
    /// The visible record set changed.
    fn on_filter_changed(&self, _visible: &[&Record]) {}

    /// The facet tags for the active category changed.
    fn on_facets_changed(&self, _facets: &BTreeSet<String>) {}

    /// The memory-match board, score, clock or phase changed.
    fn on_game_state_changed(&self, _game: &MemoryMatch) {}

    /// The active view changed.
    fn on_view_changed(&self, _view: View) {}
}

/// Hooks that ignore every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl PresentationHooks for NoopHooks {}
