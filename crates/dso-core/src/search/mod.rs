//! Ontology search.
//!
//! - [`query`]: field-weighted Lucene queries for each index
//! - [`types`]: wire shapes of the search endpoint and capped result sets
//! - [`aggregator`]: the view model merging both indexes, with stale-response
//!   protection
//!
//! The async helpers below issue the requests against any
//! [`OntologyStore`]; [`search_ontology`] runs both halves concurrently and
//! returns a completed aggregator.

pub mod aggregator;
pub mod query;
pub mod types;

pub use aggregator::{ResultsAggregator, SearchTicket};
pub use query::{normalize_query, FieldBoost, WeightedQuery};
pub use types::{ResultSet, SearchIndex, SearchRequest, SearchResponse, SearchRow};

use crate::config::RESULT_LIMIT;
use crate::error::FetchError;
use crate::model::{Annotation, Concept};
use crate::store::OntologyStore;

/// Top concept matches for `text`.
pub async fn search_concepts<S: OntologyStore + ?Sized>(
    store: &S,
    text: &str,
) -> Result<ResultSet<Concept>, FetchError> {
    let request = SearchRequest::new(SearchIndex::Concept.query(text), RESULT_LIMIT);
    let response = store.search_concepts(&request).await?;
    Ok(response.into_result_set(RESULT_LIMIT))
}

/// Top annotation matches for `text`.
pub async fn search_annotations<S: OntologyStore + ?Sized>(
    store: &S,
    text: &str,
) -> Result<ResultSet<Annotation>, FetchError> {
    let request = SearchRequest::new(SearchIndex::Annotation.query(text), RESULT_LIMIT);
    let response = store.search_annotations(&request).await?;
    Ok(response.into_result_set(RESULT_LIMIT))
}

/// Runs a complete search for `text`: both indexes queried concurrently,
/// outcomes merged into a finished aggregator.
pub async fn search_ontology<S: OntologyStore + ?Sized>(store: &S, text: &str) -> ResultsAggregator {
    let mut aggregator = ResultsAggregator::new();
    let Some(ticket) = aggregator.begin(text) else {
        return aggregator;
    };

    let (concepts, annotations) = futures::join!(
        search_concepts(store, ticket.query()),
        search_annotations(store, ticket.query())
    );
    aggregator.apply_concepts(&ticket, concepts);
    aggregator.apply_annotations(&ticket, annotations);
    aggregator
}
