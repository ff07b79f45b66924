//! CouchDB/Cloudant HTTP client.
//!
//! Wraps reqwest, which works on both native and WASM platforms:
//! - Native: hyper with rustls for HTTPS
//! - WASM: the browser `fetch()` API
//!
//! URLs are built segment by segment from the database URL, so document ids
//! containing `/` (`concept/data-science/vector`) are percent-encoded into a
//! single path segment the way CouchDB expects.

use super::view::ViewResponse;
use super::OntologyStore;
use crate::config::{
    ClientConfig, CONCEPT_GROUP, SCHEMA_INDEX_VIEW, SEARCH_DESIGN_DOC, VIEW_DESIGN_DOC,
};
use crate::error::FetchError;
use crate::model::{concept_doc_id, Annotation, Concept};
use crate::search::{SearchIndex, SearchRequest, SearchResponse};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

/// Error body returned by CouchDB, e.g. `{"error":"not_found","reason":"missing"}`.
#[derive(Debug, Deserialize)]
struct CouchError {
    error: String,
    #[serde(default)]
    reason: Option<String>,
}

/// Client for one ontology database.
///
/// Cloning is cheap: the underlying reqwest client pools connections behind
/// an `Arc`.
#[derive(Debug, Clone)]
pub struct CloudantClient {
    base: Url,
    http: reqwest::Client,
}

impl CloudantClient {
    /// Creates a client for the database at `config.db_url`.
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let base = Url::parse(&config.db_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", config.db_url, e)))?;

        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(FetchError::InvalidUrl(format!(
                "Unsupported scheme: {} (only http/https allowed)",
                base.scheme()
            )));
        }
        if base.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(format!(
                "{} cannot be used as a database URL",
                config.db_url
            )));
        }

        Ok(Self {
            base,
            http: build_http_client(config)?,
        })
    }

    /// Database URL this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Database URL with `segments` appended, each percent-encoded.
    pub fn url_for(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(format!("{} cannot be a base", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Fetches and decodes a document by id.
    pub async fn get_document<T: DeserializeOwned>(&self, doc_id: &str) -> Result<T, FetchError> {
        let url = self.url_for(&[doc_id])?;
        debug!("GET {}", url);
        let response = self.http.get(url).send().await.map_err(transport_error)?;
        decode(response, doc_id).await
    }

    /// Queries a view of a design document, optionally grouped.
    pub async fn query_view(
        &self,
        design: &str,
        view: &str,
        group: bool,
    ) -> Result<ViewResponse, FetchError> {
        let mut url = self.url_for(&["_design", design, "_view", view])?;
        if group {
            url.query_pairs_mut().append_pair("group", "true");
        }
        debug!("GET {}", url);
        let response = self.http.get(url).send().await.map_err(transport_error)?;
        decode(response, &format!("{}/{}", design, view)).await
    }

    /// Runs a full-text search against `index`.
    pub async fn search<T: DeserializeOwned>(
        &self,
        index: SearchIndex,
        request: &SearchRequest,
    ) -> Result<SearchResponse<T>, FetchError> {
        let url = self.url_for(&["_design", SEARCH_DESIGN_DOC, "_search", index.name()])?;
        debug!("POST {} query={:?} limit={}", url, request.query.as_str(), request.limit);
        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;
        decode(response, &format!("{} search", index.name())).await
    }
}

#[async_trait::async_trait(?Send)]
impl OntologyStore for CloudantClient {
    async fn get_concept(&self, id: &str) -> Result<Concept, FetchError> {
        self.get_document(&concept_doc_id(id)).await
    }

    async fn concept_count(&self) -> Result<Option<u64>, FetchError> {
        let response = self
            .query_view(VIEW_DESIGN_DOC, SCHEMA_INDEX_VIEW, true)
            .await?;
        Ok(response.count_for(CONCEPT_GROUP))
    }

    async fn search_concepts(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse<Concept>, FetchError> {
        self.search(SearchIndex::Concept, request).await
    }

    async fn search_annotations(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse<Annotation>, FetchError> {
        self.search(SearchIndex::Annotation, request).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client(config: &ClientConfig) -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .user_agent(crate::config::USER_AGENT)
        .timeout(config.timeout())
        .build()
        .map_err(|e| FetchError::Network(format!("Failed to build HTTP client: {}", e)))
}

// The browser owns timeouts and the user agent on the web
#[cfg(target_arch = "wasm32")]
fn build_http_client(_config: &ClientConfig) -> Result<reqwest::Client, FetchError> {
    Ok(reqwest::Client::new())
}

fn transport_error(err: reqwest::Error) -> FetchError {
    FetchError::Network(err.to_string())
}

/// Checks the status and decodes the body of `response`.
async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
    what: &str,
) -> Result<T, FetchError> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;

    if !status.is_success() {
        let reason = serde_json::from_str::<CouchError>(&body)
            .map(|e| match e.reason {
                Some(reason) => format!("{} ({})", e.error, reason),
                None => e.error,
            })
            .unwrap_or_else(|_| status.to_string());
        warn!("{} failed with {}: {}", what, status, reason);

        return Err(match status {
            StatusCode::NOT_FOUND => FetchError::NotFound(format!("{}: {}", what, reason)),
            StatusCode::BAD_REQUEST => FetchError::Query(format!("{}: {}", what, reason)),
            _ => FetchError::Network(format!("{}: HTTP {}: {}", what, status, reason)),
        });
    }

    serde_json::from_str(&body).map_err(|e| FetchError::Decode(format!("{}: {}", what, e)))
}
