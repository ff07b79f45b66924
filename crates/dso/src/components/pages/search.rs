use dioxus::prelude::*;

use crate::components::{OntologyResults, OntologySearchBar};
use crate::routes::SearchQuery;

/// Search page: search bar prefilled with the query, results below
#[component]
pub fn SearchPage(query: SearchQuery) -> Element {
    let query = query.to_string();

    rsx! {
        section { class: "dso-search",
            OntologySearchBar {}
            OntologyResults { query }
        }
    }
}
