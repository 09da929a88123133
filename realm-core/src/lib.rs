//! # Realm Core Library
//!
//! Runtime-free core of the realm archive: a gallery of legends (characters,
//! monsters, pets, items, magic) browsed by category, narrowed by search,
//! rarity and tag filters, plus a memory-match minigame.
//!
//! - [`catalog`] — the filter engine and tag facets over a loaded record set
//! - [`game`] — the memory-match state machine (`Setup → Playing → Won`)
//! - [`tabular`] — header-keyed comma-separated export parsing
//! - [`archive`] — the built-in placeholder archive used as a fallback
//! - [`carousel`] — detail-view image rotation
//! - [`navigation`] / [`persistence`] — named views and saved UI state
//!
//! Nothing in this crate performs I/O beyond the optional `SQLite` state
//! store; fetching and timers live in `realm-sync` and `realm-session`.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod archive;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod error;
pub mod game;
pub mod navigation;
pub mod persistence;
pub mod tabular;
pub mod types;

pub use catalog::{CatalogEngine, FilterState};
pub use config::RealmConfig;
pub use error::RealmError;
pub use game::{Difficulty, FlipOutcome, GamePhase, MemoryMatch};
pub use types::*;
