//! Wire shapes of the search endpoint and the capped result sets built from them.

use super::query::{FieldBoost, WeightedQuery, ANNOTATION_FIELDS, CONCEPT_FIELDS};
use crate::config::{ANNOTATION_INDEX, CONCEPT_INDEX};
use serde::{Deserialize, Serialize};

/// Full-text indexes in the `search` design document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchIndex {
    Concept,
    Annotation,
}

impl SearchIndex {
    /// Index name as used in the `_search/<index>` endpoint.
    pub fn name(self) -> &'static str {
        match self {
            SearchIndex::Concept => CONCEPT_INDEX,
            SearchIndex::Annotation => ANNOTATION_INDEX,
        }
    }

    pub fn fields(self) -> &'static [FieldBoost] {
        match self {
            SearchIndex::Concept => CONCEPT_FIELDS,
            SearchIndex::Annotation => ANNOTATION_FIELDS,
        }
    }

    /// Weighted query for `text` against this index.
    pub fn query(self, text: &str) -> WeightedQuery {
        WeightedQuery::build(text, self.fields())
    }
}

/// Body of a `POST _search/<index>` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub query: WeightedQuery,
    pub limit: usize,
}

impl SearchRequest {
    pub fn new(query: WeightedQuery, limit: usize) -> Self {
        Self { query, limit }
    }
}

/// A single hit. `fields` holds the stored fields of the matched document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchRow<T> {
    pub fields: T,
}

/// Response of the search endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResponse<T> {
    /// Total number of matches, not just the returned rows
    pub total_rows: u64,
    pub rows: Vec<SearchRow<T>>,
}

impl<T> SearchResponse<T> {
    /// Converts to a result set holding at most `limit` records.
    pub fn into_result_set(self, limit: usize) -> ResultSet<T> {
        let mut items: Vec<T> = self.rows.into_iter().map(|row| row.fields).collect();
        items.truncate(limit);
        ResultSet {
            items,
            total: self.total_rows,
        }
    }
}

/// Matched records for one query, capped, with the true match count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultSet<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> ResultSet<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

impl<T> Default for ResultSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Concept, Kind};
    use serde_json::json;

    #[test]
    fn test_search_request_body() {
        let request = SearchRequest::new(SearchIndex::Concept.query("pca"), 10);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "query": "id:(pca)^100 name:(pca)^3 description:(pca)",
                "limit": 10
            })
        );
    }

    #[test]
    fn test_response_decoding() {
        let body = json!({
            "total_rows": 1,
            "bookmark": "g1AAAA",
            "rows": [{
                "id": "concept/data-science/vector",
                "order": [4.2, 0],
                "fields": { "id": "vector", "name": "Vector", "kind": "object" }
            }]
        });
        let response: SearchResponse<Concept> = serde_json::from_value(body).unwrap();
        let results = response.into_result_set(10);
        assert_eq!(results.total, 1);
        assert_eq!(results.items[0].kind, Kind::Object);
    }

    #[test]
    fn test_malformed_row_rejected() {
        let body = json!({
            "total_rows": 1,
            "rows": [{ "fields": { "id": "vector" } }]
        });
        assert!(serde_json::from_value::<SearchResponse<Concept>>(body).is_err());
    }

    #[test]
    fn test_result_set_caps_items_but_keeps_total() {
        let rows = (0..12)
            .map(|i| SearchRow { fields: i })
            .collect();
        let response = SearchResponse {
            total_rows: 57,
            rows,
        };
        let results = response.into_result_set(10);
        assert_eq!(results.items.len(), 10);
        assert_eq!(results.total, 57);
    }

    #[test]
    fn test_index_names() {
        assert_eq!(SearchIndex::Concept.name(), "concept");
        assert_eq!(SearchIndex::Annotation.name(), "annotation");
    }
}
