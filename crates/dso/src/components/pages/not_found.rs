use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

/// Fallback for every unknown path
#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    debug!("No page for /{}", segments.join("/"));

    rsx! {
        div { class: "dso-alert dso-alert--danger", role: "alert",
            h4 { "Whoops" }
            p { "The page you are looking for does not exist." }
        }
    }
}
