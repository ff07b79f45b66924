use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;
use dso_core::search::{search_annotations, search_concepts, ResultsAggregator, SearchTicket};
use dso_core::CloudantClient;
use instant::Instant;

use super::{AnnotationResult, ConceptResult};
use crate::components::use_ontology_store;

/// Ranked concept and annotation matches for `query`.
///
/// Both indexes are queried concurrently each time `query` changes. Results
/// of a superseded query are discarded when they arrive, and the task is
/// dropped with the component when the user navigates away.
#[component]
pub fn OntologyResults(query: String) -> Element {
    let store = use_ontology_store();
    let mut results = use_signal(ResultsAggregator::new);

    use_effect(use_reactive!(|query| {
        let Some(ticket) = results.write().begin(&query) else {
            debug!("Empty query, nothing to search");
            return;
        };
        let store = store.clone();
        spawn(async move {
            run_search(store, ticket, results).await;
        });
    }));

    // Until the effect has begun the search for this query, render the
    // pending state rather than whatever the previous query left behind.
    let view = {
        let current = results.read();
        if current.is_for(&query) {
            current.clone()
        } else {
            ResultsAggregator::awaiting(&query)
        }
    };

    rsx! {
        ResultsList { results: view }
    }
}

/// Issues both searches for `ticket` and applies each outcome as it arrives.
async fn run_search(
    store: CloudantClient,
    ticket: SearchTicket,
    results: Signal<ResultsAggregator>,
) {
    info!("🔍 Searching for: '{}'", ticket.query());
    let start = Instant::now();

    let mut concept_results = results;
    let mut annotation_results = results;

    let concepts = async {
        let outcome = search_concepts(&store, ticket.query()).await;
        concept_results.write().apply_concepts(&ticket, outcome);
    };
    let annotations = async {
        let outcome = search_annotations(&store, ticket.query()).await;
        annotation_results.write().apply_annotations(&ticket, outcome);
    };
    futures::join!(concepts, annotations);

    let view = results.peek();
    if view.is_current(&ticket) {
        info!(
            "✅ Search '{}' completed in {:.0} ms: {}",
            ticket.query(),
            start.elapsed().as_secs_f64() * 1000.0,
            view.summary()
        );
    }
}

/// Renders an aggregator: spinner while loading, then counts and sections.
#[component]
pub fn ResultsList(results: ResultsAggregator) -> Element {
    if results.loading() {
        return rsx! {
            div { class: "dso-spinner", role: "status", "aria-label": "Searching" }
        };
    }

    let summary = results.summary();

    rsx! {
        section { class: "search-results",
            p { class: "dso-text-muted", "{summary}" }

            if results.show_concepts() {
                section { class: "concept-results",
                    h2 { "Concepts" }
                    ul {
                        for concept in results.concepts().iter().cloned() {
                            li { key: "{concept.id}",
                                ConceptResult { concept }
                            }
                        }
                    }
                }
            }

            if results.show_annotations() {
                section { class: "annotation-results",
                    h2 { "Annotations" }
                    ul {
                        for (i, annotation) in results.annotations().iter().cloned().enumerate() {
                            li { key: "{i}",
                                AnnotationResult { annotation }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::history::{History, MemoryHistory};
    use dioxus::router::components::HistoryProvider;
    use dso_core::config::ClientConfig;
    use dso_core::search::ResultSet;
    use dso_core::{Annotation, Concept, FetchError, Kind};
    use std::rc::Rc;

    fn render(results: ResultsAggregator) -> String {
        fn app(results: ResultsAggregator) -> Element {
            rsx! { ResultsList { results } }
        }
        let mut dom = VirtualDom::new_with_props(app, results);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn annotation(id: &str) -> Annotation {
        Annotation {
            id: id.to_string(),
            language: "r".into(),
            package: "stats".into(),
            kind: Kind::Morphism,
            name: None,
            description: None,
        }
    }

    #[test]
    fn test_spinner_while_loading() {
        let mut results = ResultsAggregator::new();
        let _ticket = results.begin("vector");
        let html = render(results);
        assert!(html.contains("dso-spinner"));
        assert!(!html.contains("search-results"));
    }

    #[test]
    fn test_zero_matches_renders_no_sections() {
        let mut results = ResultsAggregator::new();
        let ticket = results.begin("zzz").unwrap();
        results.apply_concepts(&ticket, Ok(ResultSet::empty()));
        results.apply_annotations(&ticket, Ok(ResultSet::empty()));

        let html = render(results);
        assert!(html.contains("0 concepts, 0 annotations"));
        assert!(!html.contains("<h2>Concepts</h2>"));
        assert!(!html.contains("<h2>Annotations</h2>"));
    }

    #[test]
    fn test_annotations_only() {
        let mut results = ResultsAggregator::new();
        let ticket = results.begin("lm").unwrap();
        results.apply_concepts(&ticket, Err(FetchError::Network("offline".into())));
        results.apply_annotations(
            &ticket,
            Ok(ResultSet {
                items: vec![annotation("lm"), annotation("glm")],
                total: 14,
            }),
        );

        let html = render(results);
        assert!(html.contains("0 concepts, 14 annotations"));
        assert!(!html.contains("<h2>Concepts</h2>"));
        assert!(html.contains("<h2>Annotations</h2>"));
        assert!(html.contains("(r/stats/lm)"));
        assert!(html.contains("(r/stats/glm)"));
    }

    #[test]
    fn test_pending_before_search_is_issued() {
        fn app() -> Element {
            rsx! { OntologyResults { query: "vector".to_string() } }
        }
        let client = CloudantClient::new(&ClientConfig::default()).unwrap();
        let mut dom = VirtualDom::new(app).with_root_context(client);
        dom.rebuild_in_place();

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("dso-spinner"));
        assert!(!html.contains("0 concepts, 0 annotations"));
    }

    fn vector_results() -> ResultsAggregator {
        let mut results = ResultsAggregator::new();
        let ticket = results.begin("vector").unwrap();
        results.apply_concepts(
            &ticket,
            Ok(ResultSet {
                items: vec![Concept {
                    id: "vector".into(),
                    kind: Kind::Object,
                    name: "Vector".into(),
                    description: None,
                }],
                total: 1,
            }),
        );
        results.apply_annotations(&ticket, Ok(ResultSet::empty()));
        results
    }

    #[derive(Routable, Clone, PartialEq, Debug)]
    enum Fixture {
        #[route("/", VectorResults)]
        Results {},
    }

    #[component]
    fn VectorResults() -> Element {
        rsx! { ResultsList { results: vector_results() } }
    }

    #[component]
    fn FixtureApp() -> Element {
        rsx! {
            HistoryProvider {
                history: move |_| Rc::new(MemoryHistory::with_initial_path(Fixture::Results {})) as Rc<dyn History>,
                Router::<Fixture> {}
            }
        }
    }

    #[test]
    fn test_vector_concept_links_to_its_page() {
        let mut dom = VirtualDom::new(FixtureApp);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("1 concepts, 0 annotations"));
        assert!(html.contains("<h2>Concepts</h2>"));
        assert!(html.contains(r#"href="/concept/vector""#));
        assert!(html.contains(">Vector</a>"));
        assert!(html.contains("(vector)"));
        assert!(!html.contains("<h2>Annotations</h2>"));
    }
}
