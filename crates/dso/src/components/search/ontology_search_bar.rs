use dioxus::prelude::*;

use super::SearchBar;
use crate::routes::Route;

/// Search bar bound to the router: prefilled from the current search route,
/// submitting navigates to `/search/<query>`.
#[component]
pub fn OntologySearchBar() -> Element {
    let route = use_route::<Route>();
    let nav = navigator();

    let default_query = route.search_query().map(str::to_string);

    rsx! {
        SearchBar {
            default_query,
            placeholder: "Search the ontology",
            on_search: move |query: String| {
                nav.push(Route::search(query));
            },
        }
    }
}
