//! Tabular export parsing.
//!
//! The archive is published as a plain comma-separated export. The first
//! line names the columns; header names are trimmed, lowercased and have
//! spaces replaced with underscores (`"Main Image URL"` → `main_image_url`).
//! Every following line is split on commas and assigned to the headers by
//! position. There is no quoting or escaping: a comma inside a value shifts
//! the remaining columns. Missing trailing values are simply absent.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::{RealmError, Result};
use crate::types::{Category, Rarity, Record};

/// One parsed line, keyed by normalized header name.
pub type RawRow = BTreeMap<String, String>;

/// Normalize a header cell into a field name.
#[must_use]
pub fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Split the export into header-keyed rows.
///
/// Blank lines are skipped. Values beyond the last header are dropped.
/// Returns `(line_number, row)` pairs so callers can report bad lines.
#[must_use]
pub fn parse_rows(text: &str) -> Vec<(usize, RawRow)> {
    let mut lines = text.split('\n').enumerate();

    let Some((_, header_line)) = lines.find(|(_, l)| !l.trim().is_empty()) else {
        return Vec::new();
    };
    let headers: Vec<String> = header_line.split(',').map(normalize_header).collect();

    lines
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            let row: RawRow = headers
                .iter()
                .zip(line.split(',').map(str::trim))
                .map(|(h, v)| (h.clone(), v.to_string()))
                .collect();
            (idx + 1, row)
        })
        .collect()
}

/// Build a [`Record`] from a header-keyed row.
///
/// # Errors
///
/// Returns [`RealmError::MalformedRow`] when the row has no name or its
/// category is not one of the fixed categories.
pub fn record_from_row(line: usize, row: &RawRow) -> Result<Record> {
    let field = |key: &str| row.get(key).map(String::as_str).unwrap_or_default();

    let name = field("name");
    if name.is_empty() {
        return Err(RealmError::MalformedRow {
            line,
            reason: "missing name".to_string(),
        });
    }

    let category: Category = field("category").parse().map_err(|e: RealmError| {
        RealmError::MalformedRow {
            line,
            reason: e.to_string(),
        }
    })?;

    let mut record = Record::new(category, name)
        .with_tags(field("tags"))
        .with_story(field("story"))
        .with_images(
            field("main_image_url"),
            ["extra_image_1", "extra_image_2", "extra_image_3"].map(field),
        );

    let nickname = field("nickname");
    if !nickname.is_empty() {
        record = record.with_nickname(nickname);
    }

    let rarity = field("rarity");
    if !rarity.is_empty() {
        match rarity.parse::<Rarity>() {
            Ok(grade) => record = record.with_rarity(grade),
            Err(_) => debug!(line, rarity, "Ignoring unknown rarity grade"),
        }
    }

    Ok(record)
}

/// Parse the export straight into records, skipping unusable rows.
///
/// Skipped rows are logged at `warn` level; parsing itself never fails.
#[must_use]
pub fn parse_records(text: &str) -> Vec<Record> {
    let rows = parse_rows(text);
    let total = rows.len();

    let records: Vec<Record> = rows
        .iter()
        .filter_map(|(line, row)| match record_from_row(*line, row) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(error = %e, "Skipping archive row");
                None
            }
        })
        .collect();

    debug!(rows = total, records = records.len(), "Parsed tabular export");
    records
}
