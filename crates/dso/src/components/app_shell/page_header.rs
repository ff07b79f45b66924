use crate::routes::Route;
use dioxus::prelude::*;

#[component]
pub fn PageHeader() -> Element {
    rsx! {
        header { class: "dso-page-header",
            h1 {
                Link { class: "dso-page-title", to: Route::Home {}, "Data Science Ontology" }
            }
        }
    }
}
