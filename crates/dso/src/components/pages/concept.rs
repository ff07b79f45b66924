use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use dso_core::{Concept, OntologyStore};

use crate::components::use_ontology_store;

/// Concept detail page. Renders nothing until the concept for the current
/// id has loaded; a failed fetch is logged and leaves the page empty.
#[component]
pub fn ConceptPage(id: String) -> Element {
    let store = use_ontology_store();

    // Each fetch is tagged with the id it was issued for. The resource keeps
    // its previous value while a new fetch is pending.
    let concept = use_resource(use_reactive!(|id| {
        let store = store.clone();
        async move {
            let result = store.get_concept(&id).await;
            match &result {
                Ok(concept) => info!("Loaded concept '{}'", concept.id),
                Err(e) => error!("Failed to load concept '{}': {}", id, e),
            }
            (id, result.ok())
        }
    }));

    let fetched = concept.read().clone();

    match concept_for(&id, fetched) {
        Some(concept) => rsx! {
            ConceptDisplay { concept }
        },
        None => rsx! {},
    }
}

/// The fetched concept, if the fetch was for `id` and succeeded.
fn concept_for(id: &str, fetched: Option<(String, Option<Concept>)>) -> Option<Concept> {
    match fetched {
        Some((requested, concept)) if requested == id => concept,
        _ => None,
    }
}

/// Heading plus a definition list of the concept's fields
#[component]
pub fn ConceptDisplay(concept: Concept) -> Element {
    let description = concept.description().map(str::to_string);

    rsx! {
        div { class: "dso-concept",
            h3 { "{concept.name}" }
            dl { class: "dso-fields",
                dt { "ID" }
                dd { "{concept.id}" }
                dt { "Kind" }
                dd { "{concept.kind}" }
                dt { "Name" }
                dd { "{concept.name}" }
                if let Some(description) = description {
                    dt { "Description" }
                    dd { "{description}" }
                }
            }
        }
    }
}
