//! Error types for the realm core library.

use thiserror::Error;

/// Top-level error type for all realm core operations.
#[derive(Error, Debug)]
pub enum RealmError {
    /// No record carries the requested name.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A tile index outside the current board was flipped.
    #[error("Tile index {index} out of range (board has {len} tiles)")]
    TileOutOfRange {
        /// Requested tile index.
        index: usize,
        /// Number of tiles on the board.
        len: usize,
    },

    /// A category name did not match the fixed enumeration.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// A rarity grade did not match the fixed enumeration.
    #[error("Unknown rarity: {0}")]
    UnknownRarity(String),

    /// A difficulty name did not match any preset.
    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// A tabular row could not be turned into a record.
    #[error("Malformed row {line}: {reason}")]
    MalformedRow {
        /// 1-based line number in the source text.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// Serialization or deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// SQLite persistence error.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, RealmError>;
