//! DSO CLI - query the Data Science Ontology from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Search concepts and annotations
//! dsoq search "linear regression"
//! dsoq search kmeans --json
//!
//! # Show a single concept
//! dsoq concept vector
//!
//! # Count concepts
//! dsoq count
//!
//! # Use another database
//! dsoq --db-url https://example.cloudant.com/ontology search pca
//! DSO_DB_URL=https://example.cloudant.com/ontology dsoq count
//! ```

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Data Science Ontology CLI.
///
/// Reads concepts and annotations from the same database the web app uses.
#[derive(Parser)]
#[command(name = "dsoq", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Ontology database URL (default: $DSO_DB_URL, then local CouchDB)
    #[arg(long, global = true)]
    db_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Search concepts and annotations
    Search {
        /// Search text (Lucene syntax allowed)
        query: String,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a concept by id
    Concept {
        /// Concept id, e.g. `vector`
        id: String,

        /// Output the concept as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the number of concepts in the ontology
    Count,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info,dso_core=debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = config::resolve(cli.db_url, cli.timeout);
    let client = config::connect(&config)?;

    let output = match cli.command {
        Command::Search { query, json } => {
            let results = commands::execute_search(&client, &query).await?;
            if json {
                output::format_search_json(&results)
            } else {
                output::format_search_human(&results)
            }
        }
        Command::Concept { id, json } => {
            let concept = commands::fetch_concept(&client, &id).await?;
            if json {
                output::format_concept_json(&concept)
            } else {
                output::format_concept_human(&concept)
            }
        }
        Command::Count => {
            let count = commands::count_concepts(&client).await?;
            output::format_count(count)
        }
    };

    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_must_be_positive() {
        assert!(Cli::try_parse_from(["dsoq", "--timeout", "0", "count"]).is_err());

        let cli = Cli::try_parse_from(["dsoq", "count", "--timeout", "5"]).unwrap();
        assert_eq!(cli.timeout, Some(5));
        assert!(matches!(cli.command, Command::Count));
    }

    #[test]
    fn test_search_arguments() {
        let cli = Cli::try_parse_from(["dsoq", "search", "python/numpy/ndarray", "--json"]).unwrap();
        match cli.command {
            Command::Search { query, json } => {
                assert_eq!(query, "python/numpy/ndarray");
                assert!(json);
            }
            _ => panic!("expected search command"),
        }
    }
}
