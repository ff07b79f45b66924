//! Data access layer.
//!
//! [`OntologyStore`] abstracts the remote database: a key-addressed document
//! store, a grouped view index and a full-text search service. The only
//! production implementation is [`CloudantClient`], which speaks the
//! CouchDB/Cloudant HTTP API and works on both native and WASM targets.

mod cloudant;
mod view;

pub use cloudant::CloudantClient;
pub use view::{ViewResponse, ViewRow};

use crate::error::FetchError;
use crate::model::{Annotation, Concept};
use crate::search::{SearchRequest, SearchResponse};

/// Read access to the ontology.
///
/// Futures are not required to be `Send`: on the web the HTTP client is
/// backed by the browser's `fetch`, which is single-threaded.
#[async_trait::async_trait(?Send)]
pub trait OntologyStore {
    /// Fetches the concept with the given id.
    ///
    /// Returns [`FetchError::NotFound`] if no such concept exists.
    async fn get_concept(&self, id: &str) -> Result<Concept, FetchError>;

    /// Number of concepts in the ontology.
    ///
    /// Returns `Ok(None)` when the index has no concept group.
    async fn concept_count(&self) -> Result<Option<u64>, FetchError>;

    /// Runs a full-text query against the concept index.
    async fn search_concepts(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse<Concept>, FetchError>;

    /// Runs a full-text query against the annotation index.
    async fn search_annotations(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse<Annotation>, FetchError>;
}
