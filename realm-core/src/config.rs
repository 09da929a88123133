//! Configuration for the realm archive.
//!
//! Maps directly to `realm.toml`. Every section and field is optional; an
//! empty file yields [`RealmConfig::default`].

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RealmConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Where the archive records come from.
    #[serde(default)]
    pub archive: ArchiveConfig,
    /// Minigame timing.
    #[serde(default)]
    pub game: GameConfig,
    /// Saved UI state.
    #[serde(default)]
    pub persistence: PersistenceConfig,
}

impl RealmConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `RealmError::Config` if the TOML is invalid or a value is
    /// out of range.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| crate::RealmError::Config(e.to_string()))?;
        config.game.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General system settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Archive source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Published comma-separated export URL. `None` or blank uses the
    /// built-in placeholder archive.
    #[serde(default)]
    pub csv_url: Option<String>,
    /// Hard timeout for the export fetch in milliseconds.
    #[serde(default = "default_5000")]
    pub request_timeout_ms: u64,
    /// Placeholder records generated per category.
    #[serde(default = "default_3_usize")]
    pub placeholder_per_category: usize,
}

impl ArchiveConfig {
    /// The configured export URL, if it is set and non-blank.
    #[must_use]
    pub fn remote_url(&self) -> Option<&str> {
        self.csv_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            csv_url: None,
            request_timeout_ms: 5000,
            placeholder_per_category: 3,
        }
    }
}

/// Memory-match timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// How long a mismatched pair stays face-up before flipping back.
    #[serde(default = "default_1000")]
    pub flip_back_delay_ms: u64,
    /// Game clock period.
    #[serde(default = "default_1000")]
    pub tick_interval_ms: u64,
}

impl GameConfig {
    /// Check timing values.
    ///
    /// A zero `flip_back_delay_ms` is allowed and flips a mismatch back on
    /// the next scheduler turn.
    ///
    /// # Errors
    /// Returns `RealmError::Config` if `tick_interval_ms` is zero.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(crate::RealmError::Config(
                "game.tick_interval_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            flip_back_delay_ms: 1000,
            tick_interval_ms: 1000,
        }
    }
}

/// Where navigation state is saved between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// `SQLite` file for cross-run state. `None` keeps state for the
    /// lifetime of the process only.
    #[serde(default)]
    pub state_path: Option<PathBuf>,
    /// Key the navigation state is stored under.
    #[serde(default = "default_state_key")]
    pub state_key: String,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            state_path: None,
            state_key: "navigation".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_log_level() -> String { "info".to_string() }
fn default_state_key() -> String { "navigation".to_string() }
fn default_3_usize() -> usize { 3 }
fn default_1000() -> u64 { 1000 }
fn default_5000() -> u64 { 5000 }
