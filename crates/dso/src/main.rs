use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use dso::components::App as OntologyApp;
use dso_core::config::ClientConfig;
use dso_core::CloudantClient;

const MAIN_CSS: Asset = asset!("/assets/dso.css");

/// Database URL baked in at build time (`DSO_DB_URL=... dx build`), or the
/// default local CouchDB.
fn client_config() -> ClientConfig {
    match option_env!("DSO_DB_URL") {
        Some(url) => ClientConfig::with_db_url(url),
        None => ClientConfig::default(),
    }
}

fn main() {
    // Initialize cross-platform logger (web console + desktop stdout)
    // Use DEBUG level for development builds, INFO for release builds
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    let config = client_config();
    let client = match CloudantClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Invalid ontology database URL: {}", e);
            return;
        }
    };
    info!("Using ontology database at {}", client.base_url());

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let config = Config::default().with_window(
            WindowBuilder::new()
                .with_title("Data Science Ontology")
                .with_resizable(true)
                .with_inner_size(LogicalSize::new(1000.0, 800.0)),
        );

        dioxus::LaunchBuilder::desktop()
            .with_cfg(config)
            .with_context(client)
            .launch(App);
    }

    #[cfg(all(feature = "web", not(feature = "desktop")))]
    {
        dioxus::LaunchBuilder::web().with_context(client).launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // asset! is unreliable on desktop, inline the stylesheet there
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/dso.css")} }
        }

        OntologyApp {}
    }
}
