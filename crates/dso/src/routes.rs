//! Client-side routing table.
//!
//! The URL alone decides which page is shown. Every page renders inside the
//! [`AppShell`] layout; leaving a page unmounts it, which also cancels any
//! request it still has in flight.

use crate::components::{AppShell, ConceptPage, HomePage, NotFoundPage, SearchPage};
use dioxus::prelude::*;
use dioxus::router::exports::percent_encoding::{utf8_percent_encode, AsciiSet};
use dioxus::router::exports::PATH_ASCII_SET;
use dioxus::router::routable::{FromRouteSegments, ToRouteSegments};
use std::fmt;

#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/", HomePage)]
        Home {},
        #[route("/concept/:id", ConceptPage)]
        Concept { id: String },
        #[route("/search/:..query", SearchPage)]
        Search { query: SearchQuery },
        #[route("/:..segments", NotFoundPage)]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Detail page of the concept with the given id.
    pub fn concept(id: impl Into<String>) -> Self {
        Route::Concept { id: id.into() }
    }

    /// Results page for a query.
    pub fn search(query: impl Into<String>) -> Self {
        Route::Search {
            query: SearchQuery(query.into()),
        }
    }

    /// Query of a search route.
    pub fn search_query(&self) -> Option<&str> {
        match self {
            Route::Search { query } => Some(query.as_str()),
            _ => None,
        }
    }
}

/// Path segment characters escaped in a search query. Queries hold
/// arbitrary Lucene text, including `/` (annotation keys, regexes) and `%`.
const SEARCH_QUERY_SET: &AsciiSet = &PATH_ASCII_SET.add(b'/').add(b'%');

/// Free-text query carried in the `/search/...` path.
///
/// Written as a single escaped segment. Parsing joins all remaining segments
/// with `/`, so a hand-typed `/search/python/numpy/ndarray` also searches for
/// `python/numpy/ndarray`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A search route without a query.
#[derive(Debug)]
pub struct MissingSearchQuery;

impl fmt::Display for MissingSearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("missing search query")
    }
}

impl ToRouteSegments for SearchQuery {
    fn display_route_segments(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", utf8_percent_encode(&self.0, SEARCH_QUERY_SET))
    }
}

impl FromRouteSegments for SearchQuery {
    type Err = MissingSearchQuery;

    fn from_route_segments(segments: &[&str]) -> Result<Self, Self::Err> {
        let query = segments.join("/");
        if query.is_empty() {
            return Err(MissingSearchQuery);
        }
        Ok(SearchQuery(query))
    }
}
