//! Configuration resolution for the CLI.
//!
//! The database URL is taken from, in order:
//! 1. `--db-url`
//! 2. `$DSO_DB_URL` environment variable
//! 3. The built-in default (local CouchDB)

use anyhow::{Context, Result};
use dso_core::config::ClientConfig;
use dso_core::CloudantClient;
use tracing::info;

/// Environment variable for the database URL
const DB_URL_ENV: &str = "DSO_DB_URL";

/// Builds the client configuration from CLI flags and the environment.
pub fn resolve(db_url: Option<String>, timeout_secs: Option<u64>) -> ClientConfig {
    resolve_with_env(db_url, std::env::var(DB_URL_ENV).ok(), timeout_secs)
}

fn resolve_with_env(
    flag: Option<String>,
    env: Option<String>,
    timeout_secs: Option<u64>,
) -> ClientConfig {
    let mut config = ClientConfig::default();
    if let Some(url) = flag.or(env).filter(|url| !url.trim().is_empty()) {
        config.db_url = url;
    }
    if let Some(secs) = timeout_secs {
        config.timeout_secs = secs;
    }
    config
}

/// Creates the ontology client.
pub fn connect(config: &ClientConfig) -> Result<CloudantClient> {
    info!("Using ontology database: {}", config.db_url);
    CloudantClient::new(config)
        .with_context(|| format!("Invalid database URL: {}", config.db_url))
}
