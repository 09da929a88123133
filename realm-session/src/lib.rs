//! # realm-session — Session Controller for the Realm Archive
//!
//! Ties the pure `realm-core` engines to time, storage and a front end:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               front end (hooks)               │
//! └──────────────▲───────────────────▲───────────┘
//!                │                   │
//!       ┌────────┴───────┐   ┌───────┴────────┐
//!       │    Session     │   │   GameDriver   │
//!       │ catalog + nav  │   │ clock + flips  │
//!       └────────┬───────┘   └───────┬────────┘
//!                ▼                   ▼
//!       ┌────────────────────────────────────┐
//!       │             realm-core             │
//!       └────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `hooks` — presentation callbacks fired after every state change
//! - `session` — category browsing, filters, detail view, saved navigation
//! - `driver` — tokio timers for the memory-match game

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod driver;
pub mod hooks;
pub mod session;

pub use driver::GameDriver;
pub use hooks::{NoopHooks, PresentationHooks};
pub use session::{DetailView, Session};
