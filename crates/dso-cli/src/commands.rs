//! Subcommand implementations.

use anyhow::{anyhow, Context, Result};
use dso_core::search::{normalize_query, search_ontology, ResultsAggregator};
use dso_core::{CloudantClient, Concept, OntologyStore};
use tracing::info;

/// Runs both ontology searches for `query`.
///
/// Fails if either index reported an error, so that partial results are
/// never mistaken for a complete answer.
pub async fn execute_search(client: &CloudantClient, query: &str) -> Result<ResultsAggregator> {
    if normalize_query(query).is_none() {
        return Err(anyhow!("Search query is empty"));
    }

    info!("Searching for: \"{}\"", query);
    let results = search_ontology(client, query).await;

    if !results.errors().is_empty() {
        let reasons: Vec<String> = results.errors().iter().map(|e| e.to_string()).collect();
        return Err(anyhow!("Search failed: {}", reasons.join("; ")));
    }

    info!("{}", results.summary());
    Ok(results)
}

/// Fetches a single concept.
pub async fn fetch_concept(client: &CloudantClient, id: &str) -> Result<Concept> {
    client
        .get_concept(id)
        .await
        .with_context(|| format!("Failed to load concept '{}'", id))
}

/// Number of concepts in the ontology (0 if the index has no concept group).
pub async fn count_concepts(client: &CloudantClient) -> Result<u64> {
    let count = client
        .concept_count()
        .await
        .context("Failed to query the schema index")?;
    Ok(count.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dso_core::config::ClientConfig;

    fn unreachable_client() -> CloudantClient {
        CloudantClient::new(&ClientConfig::with_db_url("http://127.0.0.1:9/ontology")).unwrap()
    }

    #[tokio::test]
    async fn test_empty_query_rejected() {
        let err = execute_search(&unreachable_client(), "  ")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[tokio::test]
    async fn test_search_failure_reported() {
        let err = execute_search(&unreachable_client(), "vector")
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Search failed"));
    }

    #[tokio::test]
    async fn test_concept_failure_has_context() {
        let err = fetch_concept(&unreachable_client(), "vector")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to load concept 'vector'"));
    }
}
