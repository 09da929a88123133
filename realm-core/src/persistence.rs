//! SQLite-backed UI state store.
//!
//! Small JSON documents (navigation state, last filters) are stored under a
//! string key:
//!
//! ```sql
//! CREATE TABLE IF NOT EXISTS ui_state (
//!     key        TEXT PRIMARY KEY,
//!     data       TEXT NOT NULL,
//!     updated_at TEXT NOT NULL
//! );
//! ```
//!
//! A file-backed store survives restarts ("local" scope); an in-memory
//! store lives as long as the process ("session" scope).

use std::path::{Path, PathBuf};

use chrono::Utc;
use rusqlite::{Connection, OpenFlags, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::PersistenceConfig;
use crate::error::{RealmError, Result};
use crate::navigation::NavState;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS ui_state (
    key        TEXT PRIMARY KEY,
    data       TEXT NOT NULL,
    updated_at TEXT NOT NULL
);";

/// Handle to an open UI state database.
///
/// # Usage
///
/// ```no_run
/// # use realm_core::persistence::StateStore;
/// # use realm_core::navigation::NavState;
/// # use realm_core::types::Category;
/// let store = StateStore::open("realm_state.db", "navigation")?;
/// store.save_nav(&NavState::archive(Category::Monster))?;
/// let restored = store.load_nav()?;
/// # Ok::<(), realm_core::error::RealmError>(())
/// ```
pub struct StateStore {
    conn: Connection,
    nav_key: String,
    db_path: PathBuf,
}

impl std::fmt::Debug for StateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateStore")
            .field("db_path", &self.db_path)
            .field("nav_key", &self.nav_key)
            .finish_non_exhaustive()
    }
}

impl StateStore {
    /// Open (or create) a state database at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RealmError::Database`] on SQLite failures.
    pub fn open<P: AsRef<Path>>(path: P, nav_key: impl Into<String>) -> Result<Self> {
        let db_path = path.as_ref().to_path_buf();
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let conn = Connection::open_with_flags(&db_path, flags)?;
        conn.execute_batch("PRAGMA busy_timeout = 5000;")?;
        conn.execute_batch(SCHEMA)?;

        info!(path = %db_path.display(), "UI state store opened");

        Ok(Self {
            conn,
            nav_key: nav_key.into(),
            db_path,
        })
    }

    /// Open an in-memory store that lasts for the life of the process.
    ///
    /// # Errors
    ///
    /// Returns [`RealmError::Database`] on SQLite failures.
    pub fn open_in_memory(nav_key: impl Into<String>) -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;

        Ok(Self {
            conn,
            nav_key: nav_key.into(),
            db_path: PathBuf::from(":memory:"),
        })
    }

    /// Open the store described by `config`: file-backed when a path is
    /// set, in-memory otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`RealmError::Database`] on SQLite failures.
    pub fn from_config(config: &PersistenceConfig) -> Result<Self> {
        match &config.state_path {
            Some(path) => Self::open(path, config.state_key.clone()),
            None => Self::open_in_memory(config.state_key.clone()),
        }
    }

    // ------------------------------------------------------------------
    // Generic documents
    // ------------------------------------------------------------------

    /// Save (upsert) `value` as JSON under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`RealmError::Serialization`] if JSON encoding fails, or
    /// [`RealmError::Database`] on SQLite failures.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value).map_err(|e| RealmError::Serialization(e.to_string()))?;
        let now = Utc::now().to_rfc3339();

        self.conn.execute(
            "INSERT INTO ui_state (key, data, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                data = excluded.data,
                updated_at = excluded.updated_at",
            params![key, json, now],
        )?;

        debug!(key, bytes = json.len(), "Saved UI state");
        Ok(())
    }

    /// Load the JSON document stored under `key`.
    ///
    /// Returns `None` if nothing was saved under that key.
    ///
    /// # Errors
    ///
    /// Returns [`RealmError::Serialization`] if JSON decoding fails, or
    /// [`RealmError::Database`] on SQLite failures.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let data: Option<String> = self
            .conn
            .prepare_cached("SELECT data FROM ui_state WHERE key = ?1")?
            .query_row(params![key], |row| row.get(0))
            .optional()?;

        let Some(data) = data else {
            return Ok(None);
        };

        let value = serde_json::from_str(&data).map_err(|e| RealmError::Serialization(e.to_string()))?;
        Ok(Some(value))
    }

    /// Remove the document under `key`. Returns `true` if a row was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`RealmError::Database`] on SQLite failures.
    pub fn delete(&self, key: &str) -> Result<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM ui_state WHERE key = ?1", params![key])?;
        Ok(deleted > 0)
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Save the navigation state under the configured key.
    ///
    /// # Errors
    ///
    /// See [`StateStore::save`].
    pub fn save_nav(&self, nav: &NavState) -> Result<()> {
        self.save(&self.nav_key, nav)
    }

    /// Load the navigation state saved under the configured key.
    ///
    /// # Errors
    ///
    /// See [`StateStore::load`].
    pub fn load_nav(&self) -> Result<Option<NavState>> {
        self.load(&self.nav_key)
    }

    /// Return the path to the database file (or `:memory:`).
    #[must_use]
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}
