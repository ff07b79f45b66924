//! UI components for the ontology browser.
//!
//! - `app_shell`: the layout every page renders in (page header + outlet)
//! - `pages`: one component per route (home, concept, search, not found)
//! - `search`: search bar, results view and result entries
//!
//! # Context
//!
//! The ontology client is provided as root context by `main`:
//!
//! ```ignore
//! let store = use_ontology_store();
//! let concept = store.get_concept("vector").await?;
//! ```

mod app_shell;
mod pages;
pub mod search;

pub use app_shell::{AppShell, PageHeader};
pub use pages::{ConceptDisplay, ConceptPage, HomePage, NotFoundPage, SearchPage, Welcome};
pub use search::{OntologyResults, OntologySearchBar, SearchBar};

use crate::routes::Route;
use dioxus::prelude::*;
use dso_core::CloudantClient;

/// Ontology client context provider
pub fn use_ontology_store() -> CloudantClient {
    use_context::<CloudantClient>()
}

/// Root component: the router over [`Route`].
#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
