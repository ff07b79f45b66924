//! Results aggregation for ontology search.
//!
//! A search runs two ranked queries (concepts, annotations) concurrently and
//! merges them into one view model. The aggregator owns that view model and
//! the ordering rule that keeps it consistent:
//!
//! - [`ResultsAggregator::begin`] starts a new search and hands out a
//!   [`SearchTicket`] tagged with a fresh generation.
//! - Responses are applied with the ticket that requested them. A ticket from
//!   an older generation is rejected, so a slow response for a superseded
//!   query can never overwrite the results of a newer one.
//! - `loading` stays true until both halves of the current search have
//!   reported back, whether they succeeded or failed.
//!
//! The aggregator does no I/O itself. Callers (the UI, the CLI) issue the
//! requests and feed the outcomes back, which keeps the state machine
//! testable without a network.

use super::query::normalize_query;
use super::types::ResultSet;
use crate::error::FetchError;
use crate::model::{Annotation, Concept};
use tracing::{debug, warn};

/// Handle for one issued search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

impl SearchTicket {
    /// Normalized query text this ticket was issued for.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// View model for the search results page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsAggregator {
    generation: u64,
    query: String,
    concepts_pending: bool,
    annotations_pending: bool,
    concepts: ResultSet<Concept>,
    annotations: ResultSet<Annotation>,
    errors: Vec<FetchError>,
}

impl ResultsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// State of a search for `text` that has not been issued yet: loading
    /// for a searchable query, empty otherwise.
    pub fn awaiting(text: &str) -> Self {
        let mut agg = Self::new();
        let _ = agg.begin(text);
        agg
    }

    /// Whether the current search was started for `text` (after
    /// normalization). An aggregator that has not begun a search holds the
    /// empty query.
    pub fn is_for(&self, text: &str) -> bool {
        normalize_query(text).as_deref().unwrap_or("") == self.query
    }

    /// Starts a search for `text`, superseding any search in flight.
    ///
    /// Previous results are dropped. Returns `None` for empty or
    /// whitespace-only input: nothing should be requested and the
    /// aggregator reports no results.
    pub fn begin(&mut self, text: &str) -> Option<SearchTicket> {
        self.generation += 1;
        self.concepts = ResultSet::empty();
        self.annotations = ResultSet::empty();
        self.errors.clear();

        let Some(query) = normalize_query(text) else {
            self.query.clear();
            self.concepts_pending = false;
            self.annotations_pending = false;
            return None;
        };

        self.query = query.clone();
        self.concepts_pending = true;
        self.annotations_pending = true;

        Some(SearchTicket {
            generation: self.generation,
            query,
        })
    }

    /// Whether `ticket` belongs to the search currently on display.
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Applies the concept half of a search. Returns false if the ticket is
    /// stale and the outcome was discarded.
    pub fn apply_concepts(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<ResultSet<Concept>, FetchError>,
    ) -> bool {
        if !self.accept(ticket, "concept") {
            return false;
        }
        self.concepts_pending = false;
        self.concepts = self.unwrap_or_record(outcome, "concept");
        true
    }

    /// Applies the annotation half of a search. Returns false if the ticket
    /// is stale and the outcome was discarded.
    pub fn apply_annotations(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<ResultSet<Annotation>, FetchError>,
    ) -> bool {
        if !self.accept(ticket, "annotation") {
            return false;
        }
        self.annotations_pending = false;
        self.annotations = self.unwrap_or_record(outcome, "annotation");
        true
    }

    fn accept(&self, ticket: &SearchTicket, index: &str) -> bool {
        if self.is_current(ticket) {
            return true;
        }
        debug!(
            "Discarding stale {} results for '{}' (generation {} < {})",
            index, ticket.query, ticket.generation, self.generation
        );
        false
    }

    fn unwrap_or_record<T>(
        &mut self,
        outcome: Result<ResultSet<T>, FetchError>,
        index: &str,
    ) -> ResultSet<T> {
        match outcome {
            Ok(results) => results,
            Err(e) => {
                warn!("{} search for '{}' failed: {}", index, self.query, e);
                self.errors.push(e);
                ResultSet::empty()
            }
        }
    }

    /// True from `begin` until both halves of the current search completed.
    pub fn loading(&self) -> bool {
        self.concepts_pending || self.annotations_pending
    }

    /// Query of the current search (empty if none).
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn concepts(&self) -> &[Concept] {
        &self.concepts.items
    }

    pub fn total_concepts(&self) -> u64 {
        self.concepts.total
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations.items
    }

    pub fn total_annotations(&self) -> u64 {
        self.annotations.total
    }

    /// Errors reported by the current search.
    pub fn errors(&self) -> &[FetchError] {
        &self.errors
    }

    /// Whether the concepts section should be shown.
    pub fn show_concepts(&self) -> bool {
        !self.loading() && self.total_concepts() > 0
    }

    /// Whether the annotations section should be shown.
    pub fn show_annotations(&self) -> bool {
        !self.loading() && self.total_annotations() > 0
    }

    /// Summary line, e.g. `3 concepts, 0 annotations`.
    pub fn summary(&self) -> String {
        format!(
            "{} concepts, {} annotations",
            self.total_concepts(),
            self.total_annotations()
        )
    }
}
