//! Production configuration.
//!
//! Constants describing the ontology database layout (document prefixes,
//! design documents, search indexes) and the ranking weights used by the
//! full-text queries, plus [`ClientConfig`] for building a client.
//!
//! # Usage
//!
//! ```
//! use dso_core::config::{ClientConfig, RESULT_LIMIT};
//!
//! let config = ClientConfig::default();
//! assert!(config.db_url.starts_with("http"));
//! assert_eq!(RESULT_LIMIT, 10);
//! ```

use serde::Deserialize;
use std::time::Duration;

// =============================================================================
// Database Layout
// =============================================================================

/// Database used when nothing else is configured.
pub const DEFAULT_DB_URL: &str = "http://localhost:5984/data-science-ontology";

/// Document id prefix for concepts. A concept `vector` is stored as
/// `concept/data-science/vector`.
pub const CONCEPT_DOC_PREFIX: &str = "concept/data-science/";

/// Design document holding the grouped schema index view.
pub const VIEW_DESIGN_DOC: &str = "query";

/// View counting documents by `[kind, ...]`.
pub const SCHEMA_INDEX_VIEW: &str = "schema_index";

/// Group key (first key element) under which concepts are counted.
pub const CONCEPT_GROUP: &str = "concept";

/// Design document holding the full-text search indexes.
pub const SEARCH_DESIGN_DOC: &str = "search";

/// Full-text index over concepts.
pub const CONCEPT_INDEX: &str = "concept";

/// Full-text index over annotations.
pub const ANNOTATION_INDEX: &str = "annotation";

// =============================================================================
// Search Configuration
// =============================================================================

/// Maximum number of hits shown per result list.
pub const RESULT_LIMIT: usize = 10;

/// Boost for identifier fields (`id`, `key`). These use a `keyword` analyzer,
/// so this only fires on exact matches.
pub const EXACT_ID_BOOST: u32 = 100;

/// Boost for `name` fields.
pub const NAME_BOOST: u32 = 3;

/// Boost for code symbol fields of annotations (`class`, `function`, `method`).
pub const SYMBOL_BOOST: u32 = 5;

/// Boost for free-text `description` fields.
pub const DESCRIPTION_BOOST: u32 = 1;

// =============================================================================
// HTTP Client
// =============================================================================

/// Per-request timeout (native targets only; the browser governs fetch on web).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("dso/", env!("CARGO_PKG_VERSION"));

/// Settings for [`crate::store::CloudantClient`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Database URL, e.g. `https://account.cloudant.com/ontology`
    pub db_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Config for the given database URL with default timeout.
    pub fn with_db_url(db_url: impl Into<String>) -> Self {
        Self {
            db_url: db_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            db_url: DEFAULT_DB_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_boost_dominates() {
        // An exact id hit must outrank any combination of name/symbol hits
        let id_boost = EXACT_ID_BOOST;
        assert!(id_boost > NAME_BOOST + SYMBOL_BOOST * 3 + DESCRIPTION_BOOST);
    }

    #[test]
    fn test_client_config_deserialize_partial() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"db_url": "https://example.com/db"}"#).unwrap();
        assert_eq!(config.db_url, "https://example.com/db");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_with_db_url() {
        let config = ClientConfig::with_db_url("http://127.0.0.1:5984/test");
        assert_eq!(config.db_url, "http://127.0.0.1:5984/test");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
