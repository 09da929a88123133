//! # realm-sync — Archive Loader for the Realm Archive
//!
//! Fetches the published tabular export that backs the archive and turns
//! it into [`realm_core::Record`]s. Every load succeeds:
//!   - **Remote** when a URL is configured and the export parses into at
//!     least one record
//!   - **Placeholder** otherwise (no URL, network failure, bad status,
//!     empty or unusable payload)
//!
//! Failures are logged at `warn` and never surface to the caller. There
//! are no retries.
//!
//! ```text
//! ArchiveConfig ──► ArchiveLoader::load() ──► LoadedArchive { records, origin }
//!                        │
//!                        ├─ GET csv_url (timeout) ─► tabular::parse_records
//!                        └─ on failure ───────────► archive::placeholder_archive
//! ```

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod loader;

pub use error::SyncError;
pub use loader::{ArchiveLoader, ArchiveOrigin, ArchiveSource, LoadedArchive};
