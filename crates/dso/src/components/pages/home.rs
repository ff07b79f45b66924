use dioxus::logger::tracing::{debug, error};
use dioxus::prelude::*;
use dso_core::OntologyStore;

use crate::components::{use_ontology_store, OntologySearchBar};

/// Landing page: welcome banner, search bar
#[component]
pub fn HomePage() -> Element {
    rsx! {
        section { class: "dso-home",
            div { class: "dso-jumbotron",
                Welcome {}
                p { OntologySearchBar {} }
                p {
                    button { class: "dso-btn dso-btn--primary", "Learn more" }
                }
            }
        }
    }
}

/// Welcome banner including the number of concepts once it is known
#[component]
pub fn Welcome() -> Element {
    let store = use_ontology_store();

    let count = use_resource(move || {
        let store = store.clone();
        async move {
            match store.concept_count().await {
                Ok(count) => {
                    debug!("Ontology has {:?} concepts", count);
                    count
                }
                Err(e) => {
                    error!("Failed to count concepts: {}", e);
                    None
                }
            }
        }
    });

    let nconcepts = (*count.read()).flatten();
    let message = welcome_message(nconcepts);

    rsx! {
        section { class: "dso-welcome",
            p { "{message}" }
        }
    }
}

/// Welcome text. A missing or zero count gets the generic greeting.
pub(crate) fn welcome_message(nconcepts: Option<u64>) -> String {
    match nconcepts {
        Some(n) if n > 0 => format!(
            "Welcome to the Data Science Ontology, with {} data science concepts",
            n
        ),
        _ => "Welcome to the Data Science Ontology".to_string(),
    }
}
