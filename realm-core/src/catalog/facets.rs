//! Tag facet computation.

use std::collections::BTreeSet;

use crate::types::{Category, Record};

/// Distinct trimmed tag tokens across every record of `category`.
///
/// Tokens come from splitting each record's raw tag text on commas. Empty
/// tokens (e.g. from a trailing comma) are not facets. The set ignores any
/// active filters; it describes the whole category.
pub fn facet_tags<'a, I>(records: I, category: Category) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter(|r| r.category == category)
        .flat_map(Record::tag_tokens)
        .map(str::to_string)
        .collect()
}
