//! App shell: the persistent frame around every page.

mod page_header;

pub use page_header::PageHeader;

use crate::routes::Route;
use dioxus::prelude::*;

/// Layout shared by all routes
#[component]
pub fn AppShell() -> Element {
    rsx! {
        div { id: "app",
            PageHeader {}
            main { class: "dso-main",
                Outlet::<Route> {}
            }
        }
    }
}
