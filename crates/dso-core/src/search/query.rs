//! Field-weighted full-text queries.
//!
//! The search service speaks Lucene query syntax. A query is built by
//! applying the user's text to each indexed field with a fixed boost:
//!
//! ```text
//! id:(vector)^100 name:(vector)^3 description:(vector)
//! ```
//!
//! The text is inserted verbatim so that users can write Lucene syntax
//! (`"linear model"`, `regress*`). Malformed syntax is reported by the
//! service as a [`crate::FetchError::Query`].

use crate::config::{DESCRIPTION_BOOST, EXACT_ID_BOOST, NAME_BOOST, SYMBOL_BOOST};
use serde::Serialize;
use std::fmt;

/// An indexed field and its ranking weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBoost {
    pub field: &'static str,
    pub boost: u32,
}

impl FieldBoost {
    pub const fn new(field: &'static str, boost: u32) -> Self {
        Self { field, boost }
    }
}

/// Fields of the `concept` index.
pub const CONCEPT_FIELDS: &[FieldBoost] = &[
    // Exact match on id due to `keyword` analyzer
    FieldBoost::new("id", EXACT_ID_BOOST),
    FieldBoost::new("name", NAME_BOOST),
    FieldBoost::new("description", DESCRIPTION_BOOST),
];

/// Fields of the `annotation` index.
pub const ANNOTATION_FIELDS: &[FieldBoost] = &[
    FieldBoost::new("key", EXACT_ID_BOOST),
    FieldBoost::new("name", NAME_BOOST),
    FieldBoost::new("description", DESCRIPTION_BOOST),
    FieldBoost::new("class", SYMBOL_BOOST),
    FieldBoost::new("function", SYMBOL_BOOST),
    FieldBoost::new("method", SYMBOL_BOOST),
];

/// A rendered Lucene query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeightedQuery(String);

impl WeightedQuery {
    /// Applies `text` to every field, joining the clauses with spaces.
    /// A boost of 1 is the Lucene default and is left implicit.
    pub fn build(text: &str, fields: &[FieldBoost]) -> Self {
        let clauses: Vec<String> = fields
            .iter()
            .map(|f| {
                if f.boost == 1 {
                    format!("{}:({})", f.field, text)
                } else {
                    format!("{}:({})^{}", f.field, text, f.boost)
                }
            })
            .collect();
        Self(clauses.join(" "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WeightedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trims user input, returning `None` when nothing searchable remains.
pub fn normalize_query(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
