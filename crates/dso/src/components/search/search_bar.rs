use dioxus::prelude::*;
use dso_core::search::normalize_query;

/// Text input with a search button.
///
/// Submitting (Enter or the button) reports the trimmed text through
/// `on_search`. Empty and whitespace-only input is ignored.
#[component]
pub fn SearchBar(
    default_query: Option<String>,
    #[props(into)] placeholder: String,
    on_search: EventHandler<String>,
) -> Element {
    let mut text = use_signal(|| default_query.clone().unwrap_or_default());

    let submit = move || {
        if let Some(query) = normalize_query(&text.read()) {
            on_search.call(query);
        }
    };

    rsx! {
        div { class: "dso-search-bar",
            input {
                class: "dso-search-input",
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{text}",
                oninput: move |evt| text.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        submit();
                    }
                },
            }
            button {
                class: "dso-btn dso-btn--primary",
                onclick: move |_| submit(),
                "Search"
            }
        }
    }
}
